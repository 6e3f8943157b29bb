use clap::CommandFactory;
use crate::commands;
use std::ffi::OsStr;

#[derive(clap::Parser, Debug)]
#[command(
    about = "Merges `.gql` schema fragments into a single GraphQL SDL file, \
             extended with a `DateTime` scalar and an `@restrictToSelf` \
             directive.",
    after_help = concat!(
        "Examples:\n",
        "  gqlmerge -d ./schema merged.sdl\n",
        "  gqlmerge -f user.gql post.gql merged.sdl",
    ),
    disable_help_subcommand = true,
    name = "gqlmerge",
    override_usage = concat!(
        "gqlmerge -d <DIRECTORY> <OUTPUT_FILE>\n",
        "       gqlmerge -f <FILE>... <OUTPUT_FILE>\n",
        "       gqlmerge -h",
    ),
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,
}
impl Cli {
    pub(crate) fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}

/// What the first command-line argument asks for. Only the literal `-d`,
/// `-f` and `-h` flags select a mode; everything else is rejected before
/// clap sees it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Mode {
    Help,
    Invalid,
    Merge,
}
impl Mode {
    pub(crate) fn from_first_arg(arg: Option<&OsStr>) -> Self {
        match arg.and_then(OsStr::to_str) {
            Some("-h") => Self::Help,
            Some("-d" | "-f") => Self::Merge,
            _ => Self::Invalid,
        }
    }
}
