use anyhow::Result;

use crate::{CliTest, RESTRICT_TO_SELF_DECL, stderr, stdout};

#[test]
fn test_files_merges_listed_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.gql", "type Foo { id: ID }\n")?;
    test.write_file("b.gql", "type Query { foo: Foo }\n")?;

    let output = test.run(&["-f", "a.gql", "b.gql", "out.sdl"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Schema content written to out.sdl"));

    let sdl = test.read_file("out.sdl")?;
    assert!(sdl.contains("type Foo"), "{sdl}");
    assert!(sdl.contains("type Query"), "{sdl}");
    assert!(sdl.contains("scalar DateTime"), "{sdl}");
    assert!(sdl.contains(RESTRICT_TO_SELF_DECL), "{sdl}");

    Ok(())
}

#[test]
fn test_files_skips_non_gql_inputs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.gql", "type Query { ok: Boolean }\n")?;
    test.write_file("notes.graphql", "this would not parse\n")?;

    let output = test.run(&["-f", "a.gql", "notes.graphql", "out.sdl"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let sdl = test.read_file("out.sdl")?;
    assert!(sdl.contains("type Query"), "{sdl}");

    Ok(())
}

#[test]
fn test_files_long_flag_is_invalid_mode() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.gql", "type Query { ok: Boolean }\n")?;

    let output = test.run(&["--files", "a.gql", "out.sdl"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Invalid mode. Use -h for help"));
    assert!(!test.root().join("out.sdl").exists());

    Ok(())
}

#[test]
fn test_files_missing_arguments() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.gql", "type Query { ok: Boolean }\n")?;

    for args in [&["-f"][..], &["-f", "a.gql"][..]] {
        let output = test.run(args)?;

        assert_eq!(output.status.code(), Some(1));
        let stdout = stdout(&output);
        assert!(stdout.contains("Error: Missing arguments for -f option"), "{stdout}");
        assert!(stdout.contains("Usage:"), "{stdout}");
    }
    // `a.gql` must not have been treated as the output path.
    assert_eq!(test.read_file("a.gql")?, "type Query { ok: Boolean }\n");

    Ok(())
}

#[test]
fn test_files_missing_input_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["-f", "missing.gql", "out.sdl"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing.gql"), "{}", stderr(&output));
    assert!(!test.root().join("out.sdl").exists());

    Ok(())
}

#[test]
fn test_files_build_error_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.gql", "type Query { when: DateTime }\n")?;

    let output = test.run(&["-f", "a.gql", "out.sdl"])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.contains("DateTime"), "{stderr}");
    assert!(!test.root().join("out.sdl").exists());

    Ok(())
}
