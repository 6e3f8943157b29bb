use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file the position was read from (when the SDL
/// came from a file at all).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(file: Option<&Path>, pos: ast::Pos) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}

/// Where a type or directive definition came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceLocation {
    /// Implicitly defined by GraphQL itself (e.g. `String`, `@deprecated`).
    GraphQLBuiltIn,

    /// Added programmatically after the schema was built (e.g. the
    /// `DateTime` scalar).
    Generated,

    SchemaFile(FilePosition),
}
impl SourceLocation {
    pub fn file_position(&self) -> Option<&FilePosition> {
        if let Self::SchemaFile(file_pos) = self {
            Some(file_pos)
        } else {
            None
        }
    }
}
impl std::convert::From<FilePosition> for SourceLocation {
    fn from(value: FilePosition) -> Self {
        Self::SchemaFile(value)
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<builtin>"),
            Self::Generated => write!(f, "<generated>"),
            Self::SchemaFile(file_pos) => write!(f, "{file_pos}"),
        }
    }
}
