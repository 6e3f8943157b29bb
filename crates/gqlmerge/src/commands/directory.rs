use crate::commands::merge_into;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgqlmerge::sdl_collector;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct DirectoryCmd {
    #[arg(
        help = "Directory to search recursively for `.gql` files.",
        name = "DIRECTORY",
    )]
    dir: Option<PathBuf>,

    #[arg(
        help = "Path of the merged SDL file to write.",
        name = "OUTPUT_FILE",
    )]
    output_file: Option<PathBuf>,

    #[arg(
        allow_hyphen_values = true,
        hide = true,
        name = "IGNORED",
    )]
    ignored_args: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for DirectoryCmd {
    pub fn run(self, _cli: &Cli) -> CommandResult {
        let (Some(dir), Some(output_file)) = (self.dir, self.output_file) else {
            return CommandResult::missing_args("-d");
        };

        if !self.ignored_args.is_empty() {
            log::warn!(
                "Ignoring {} extra argument(s) after the output file: {}",
                self.ignored_args.len(),
                self.ignored_args.join(" "),
            );
        }

        merge_into(output_file.as_path(), || {
            sdl_collector::collect_from_directory(&dir)
                .with_context(|| format!("Failed to collect schema files from `{}`", dir.display()))
        })
    }
}
