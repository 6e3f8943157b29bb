use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_no_arguments_is_invalid_mode() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Invalid mode"));

    Ok(())
}

#[test]
fn test_unknown_flag_is_invalid_mode() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.gql", "type Query { ok: Boolean }\n")?;

    let output = test.run(&["-z", "a.gql", "out.sdl"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Invalid mode. Use -h for help"));
    assert!(!test.root().join("out.sdl").exists());

    Ok(())
}

#[test]
fn test_help_exits_with_failure_by_default() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["-h"])?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout(&output);
    assert!(stdout.contains("Usage:"), "{stdout}");
    assert!(stdout.contains("gqlmerge -d <DIRECTORY> <OUTPUT_FILE>"), "{stdout}");
    assert!(stdout.contains("gqlmerge -f <FILE>... <OUTPUT_FILE>"), "{stdout}");

    Ok(())
}

#[test]
fn test_help_exit_code_is_configurable() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command()
        .arg("-h")
        .env("HELP_EXIT_CODE", "0")
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}

#[test]
fn test_help_ignores_following_arguments() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["-h", "foo"])?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout(&output);
    assert!(stdout.contains("Usage:"), "{stdout}");
    assert!(!stdout.contains("Invalid mode"), "{stdout}");

    Ok(())
}

#[test]
fn test_subcommand_names_are_invalid_mode() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.gql", "type Query { ok: Boolean }\n")?;
    test.write_file("schema/b.gql", "type B { ok: Boolean }\n")?;

    for args in [
        ["files", "a.gql", "out.sdl"],
        ["directory", "schema", "out.sdl"],
        ["--dir", "schema", "out.sdl"],
    ] {
        let output = test.run(&args)?;

        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(stdout(&output).contains("Invalid mode"), "{args:?}");
        assert!(!test.root().join("out.sdl").exists(), "{args:?}");
    }

    Ok(())
}

#[test]
fn test_version_flag_is_invalid_mode() -> Result<()> {
    let test = CliTest::new()?;

    for flag in ["-V", "--version"] {
        let output = test.run(&[flag])?;

        assert_eq!(output.status.code(), Some(1), "{flag}");
        assert!(stdout(&output).contains("Invalid mode"), "{flag}");
    }

    Ok(())
}

#[test]
fn test_leading_verbose_flag_is_invalid_mode() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.gql", "type Query { ok: Boolean }\n")?;

    let output = test.run(&["-v", "-f", "a.gql", "out.sdl"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Invalid mode"));
    assert!(!test.root().join("out.sdl").exists());

    Ok(())
}
