use crate::Cli;
use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// Prints whatever output the command produced and hands back its exit
    /// code.
    pub fn emit(self) -> ExitCode {
        if let Some(stdout) = self.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = self.stderr {
            eprintln!("{stderr}");
        }
        self.exit_code
    }

    pub fn help(exit_code: u8) -> Self {
        Self {
            exit_code: ExitCode::from(exit_code),
            stderr: None,
            stdout: Some(Cli::help_text()),
        }
    }

    pub fn invalid_mode() -> Self {
        Self::stdout(format_args!("Invalid mode. Use -h for help"))
    }

    pub fn missing_args(mode_flag: &str) -> Self {
        Self::stdout(format_args!(
            "Error: Missing arguments for {mode_flag} option\n{}",
            Cli::help_text(),
        ))
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    pub fn success(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
