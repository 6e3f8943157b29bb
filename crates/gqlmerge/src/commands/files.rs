use crate::commands::merge_into;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgqlmerge::sdl_collector;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct FilesCmd {
    #[arg(
        help = "One or more `.gql` files to merge, followed by the path of \
                the merged SDL file to write. Inputs without a `.gql` \
                suffix are skipped.",
        name = "FILES",
    )]
    paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for FilesCmd {
    pub fn run(self, _cli: &Cli) -> CommandResult {
        let Some((output_file, input_files)) = self.paths.split_last()
            .filter(|(_, input_files)| !input_files.is_empty()) else {
            return CommandResult::missing_args("-f");
        };

        log::debug!("Merging {} listed files.", input_files.len());
        merge_into(output_file.as_path(), || {
            sdl_collector::collect_from_files(input_files)
                .context("Failed to read the listed schema files")
        })
    }
}
