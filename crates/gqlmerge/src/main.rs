mod cli;
mod command;
mod command_result;
mod commands;
mod config;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
use cli::Mode;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use config::EnvConfig;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

fn main() -> std::process::ExitCode {
    let env_config = EnvConfig::from_env();
    setup_logger(&env_config);

    let result = match Mode::from_first_arg(std::env::args_os().nth(1).as_deref()) {
        // Anything after `-h` is ignored.
        Mode::Help => CommandResult::help(env_config.help_exit_code),
        Mode::Invalid => CommandResult::invalid_mode(),
        Mode::Merge => match Cli::try_parse() {
            Ok(mut cli) => match cli.cmd.take() {
                Some(command) => command.run(&cli),
                None => CommandResult::invalid_mode(),
            },
            Err(err) => {
                log::debug!("Rejected arguments: {err}");
                CommandResult::invalid_mode()
            },
        },
    };
    result.emit()
}

fn setup_logger(env_config: &EnvConfig) {
    let log_level = env_config.log_level.unwrap_or(DEFAULT_LOG_LEVEL);

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in &env_config.warnings {
        log::warn!("{warning}");
    }
}
