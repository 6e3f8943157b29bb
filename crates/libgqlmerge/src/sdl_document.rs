use crate::ast;
use crate::loc;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// The raw text of a single SDL source (usually one `.gql` file).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SdlFragment {
    content: String,
    source_path: Option<PathBuf>,
}
impl SdlFragment {
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Reads the full UTF-8 text of the file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReadFragmentError> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(ReadFragmentError::PathIsADirectory(path.to_path_buf()));
        }

        let bytes = std::fs::read(path).map_err(|err| ReadFragmentError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        let content = String::from_utf8(bytes).map_err(|err| ReadFragmentError::NotUtf8 {
            path: path.to_path_buf(),
            err,
        })?;

        Ok(Self {
            content,
            source_path: Some(path.to_path_buf()),
        })
    }

    pub fn new(source_path: Option<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source_path,
        }
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    fn line_count(&self) -> usize {
        self.content.matches('\n').count() + 1
    }
}

#[derive(Debug, Error)]
pub enum ReadFragmentError {
    #[error("Failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("`{}` does not contain valid UTF-8 text", path.display())]
    NotUtf8 {
        path: PathBuf,
        #[source]
        err: std::string::FromUtf8Error,
    },

    #[error("`{}` is a directory, not a file", .0.display())]
    PathIsADirectory(PathBuf),
}
impl ReadFragmentError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::NotUtf8 { path, .. }
            | Self::PathIsADirectory(path) => path.as_path(),
        }
    }
}

/// An ordered sequence of [SdlFragment]s that is handed to the schema
/// builder as one newline-joined document.
///
/// No deduplication happens here: two fragments that define the same type
/// only conflict once the joined text is built into a
/// [Schema](crate::Schema).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SdlDocument {
    fragments: Vec<SdlFragment>,
}
impl SdlDocument {
    pub fn fragments(&self) -> &[SdlFragment] {
        self.fragments.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Maps a position within [SdlDocument::text()] back to the fragment it
    /// came from, with the line number made relative to that fragment.
    ///
    /// Positions past the end of the document are returned unchanged and
    /// without a file.
    pub fn locate(&self, pos: ast::Pos) -> loc::FilePosition {
        let mut fragment_start_line = 1;
        for fragment in &self.fragments {
            let line_count = fragment.line_count();
            if pos.line < fragment_start_line + line_count {
                return loc::FilePosition {
                    col: pos.column,
                    file: fragment.source_path.clone(),
                    line: pos.line + 1 - fragment_start_line,
                };
            }
            fragment_start_line += line_count;
        }

        loc::FilePosition::from_pos(None, pos)
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: SdlFragment) {
        self.fragments.push(fragment);
    }

    /// Joins every fragment's content with a single `\n` between them.
    pub fn text(&self) -> String {
        self.fragments.iter()
            .map(|fragment| fragment.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
impl std::iter::FromIterator<SdlFragment> for SdlDocument {
    fn from_iter<I: IntoIterator<Item = SdlFragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}
