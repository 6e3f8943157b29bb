use crate::sdl_document::ReadFragmentError;
use crate::sdl_document::SdlDocument;
use crate::sdl_document::SdlFragment;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, CollectError>;

/// Only files whose name ends with exactly this suffix are collected.
pub const GQL_FILE_SUFFIX: &str = ".gql";

pub fn has_gql_suffix(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(GQL_FILE_SUFFIX))
        .unwrap_or(false)
}

/// Recursively collects every `.gql` file under `dir`.
///
/// Entries within each directory are visited in file-name order, so the
/// resulting document is stable across runs on the same tree. Symlinked
/// directories are not descended into; symlinked files are read.
pub fn collect_from_directory(dir: impl AsRef<Path>) -> Result<SdlDocument> {
    let dir = dir.as_ref();
    if dir.is_file() {
        return Err(CollectError::NotADirectory(dir.to_path_buf()));
    }
    log::debug!("Scanning {dir:?} for `{GQL_FILE_SUFFIX}` files...");

    let mut document = SdlDocument::new();
    let mut num_skipped_files = 0;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|err| CollectError::DirectoryWalkError {
            dir: dir.to_path_buf(),
            err,
        })?;

        let path = entry.path();
        let is_file =
            entry.file_type().is_file()
            || (entry.path_is_symlink() && path.is_file());
        if !is_file {
            log::trace!("Skipping non-file: {path:?}.");
            continue;
        }

        if !has_gql_suffix(path) {
            log::trace!("Skipping non-gql file: {path:?}.");
            num_skipped_files += 1;
            continue;
        }

        log::trace!("Found file at {path:?}.");
        document.push(SdlFragment::from_file(path)?);
    }

    log::debug!(
        "Collected {} `{GQL_FILE_SUFFIX}` files ({num_skipped_files} other files skipped).",
        document.len(),
    );
    Ok(document)
}

/// Collects the given files in order, silently dropping any path that
/// doesn't end in `.gql`.
pub fn collect_from_files<P: AsRef<Path>>(paths: &[P]) -> Result<SdlDocument> {
    let mut document = SdlDocument::new();
    for path in paths {
        let path = path.as_ref();
        if !has_gql_suffix(path) {
            log::debug!("Ignoring {path:?}: not a `{GQL_FILE_SUFFIX}` file.");
            continue;
        }
        document.push(SdlFragment::from_file(path)?);
    }
    Ok(document)
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Failed to walk the `{}` directory", dir.display())]
    DirectoryWalkError {
        dir: PathBuf,
        #[source]
        err: walkdir::Error,
    },

    #[error(transparent)]
    FileReadError(#[from] ReadFragmentError),

    #[error("`{}` is a file, not a directory", .0.display())]
    NotADirectory(PathBuf),
}
