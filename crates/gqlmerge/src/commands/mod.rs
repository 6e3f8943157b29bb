mod directory;
mod files;

use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use anyhow::Context;
use directory::DirectoryCmd;
use files::FilesCmd;
use libgqlmerge::SdlDocument;
use std::path::Path;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    #[command(
        about = "Merge every `.gql` file found (recursively) under a directory.",
        disable_help_flag = true,
        short_flag = 'd',
    )]
    Directory(DirectoryCmd),

    #[command(
        about = "Merge an explicit list of `.gql` files.",
        disable_help_flag = true,
        short_flag = 'f',
    )]
    Files(FilesCmd),
}
impl CommandEnum {
    pub(crate) fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Directory(cmd) => cmd.run(cli),
            Self::Files(cmd) => cmd.run(cli),
        }
    }
}

/// Builds, extends, and writes the collected document, reporting the
/// outcome the same way for every mode.
fn merge_into(
    output_file: &Path,
    collect: impl FnOnce() -> anyhow::Result<SdlDocument>,
) -> CommandResult {
    let merged = collect().and_then(|document| {
        libgqlmerge::merge_to_file(&document, output_file)
            .with_context(|| format!(
                "Failed to merge {} schema files into `{}`",
                document.len(),
                output_file.display(),
            ))
    });

    match merged {
        Ok(summary) => {
            log::debug!(
                "Merged {} files: wrote {} types and {} directives.",
                summary.num_fragments,
                summary.num_types,
                summary.num_directives,
            );
            CommandResult::success(format_args!(
                "{} Schema content written to {}",
                output_utils::GREEN_CHECK,
                output_file.display(),
            ))
        },

        Err(err) => CommandResult::stderr(format_args!(
            "{} {err:?}",
            output_utils::RED_X,
        )),
    }
}
