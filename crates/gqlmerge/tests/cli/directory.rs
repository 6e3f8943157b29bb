use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, RESTRICT_TO_SELF_DECL, stderr, stdout};

fn write_schema_tree(test: &CliTest) -> Result<()> {
    test.write_file("schema/a.gql", "type Foo { id: ID }\n")?;
    test.write_file("schema/nested/b.gql", "type Query { foo: Foo }\n")?;
    test.write_file("schema/README.md", "# not a schema\n")?;
    Ok(())
}

#[test]
fn test_directory_merges_recursively() -> Result<()> {
    let test = CliTest::new()?;
    write_schema_tree(&test)?;

    let output = test.run(&["-d", "schema", "out.sdl"])?;

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
fn test_directory_matches_file_list() -> Result<()> {
    let test = CliTest::new()?;
    write_schema_tree(&test)?;

    let from_dir = test.run(&["-d", "schema", "from_dir.sdl"])?;
    let from_list = test.run(&["-f", "schema/a.gql", "schema/nested/b.gql", "from_list.sdl"])?;

    assert!(from_dir.status.success(), "stderr: {}", stderr(&from_dir));
    assert!(from_list.status.success(), "stderr: {}", stderr(&from_list));
    assert_eq!(test.read_file("from_dir.sdl")?, test.read_file("from_list.sdl")?);

    Ok(())
}

#[test]
fn test_directory_ignores_extra_arguments() -> Result<()> {
    let test = CliTest::new()?;
    write_schema_tree(&test)?;

    let output = test.run(&["-d", "schema", "out.sdl", "extra.sdl"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("out.sdl").exists());
    assert!(!test.root().join("extra.sdl").exists());

    Ok(())
}

#[test]
fn test_directory_missing_arguments() -> Result<()> {
    let test = CliTest::new()?;
    write_schema_tree(&test)?;

    let output = test.run(&["-d", "schema"])?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout(&output);
    assert!(stdout.contains("Error: Missing arguments for -d option"), "{stdout}");
    assert!(stdout.contains("Usage:"), "{stdout}");

    Ok(())
}

#[test]
fn test_directory_missing_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["-d", "nowhere", "out.sdl"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("nowhere"), "{}", stderr(&output));
    assert!(!test.root().join("out.sdl").exists());

    Ok(())
}

#[test]
fn test_directory_without_gql_files_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("schema/notes.txt", "type Query { ok: Boolean }\n")?;

    let output = test.run(&["-d", "schema", "out.sdl"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr(&output).is_empty());
    assert!(!test.root().join("out.sdl").exists());

    Ok(())
}
