use crate::extensions;
use crate::schema::SchemaBuildError;
use crate::schema_printer;
use crate::schema_printer::PrintError;
use crate::sdl_document::SdlDocument;
use crate::Schema;
use std::path::Path;
use thiserror::Error;

/// What [merge_to_file()] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeSummary {
    pub num_directives: usize,
    pub num_fragments: usize,
    pub num_types: usize,
    /// Whether the input SDL declared its own `DateTime` type, which was
    /// replaced by the custom scalar.
    pub replaced_date_time: bool,
}

/// Builds `document` into a schema, extends it with the custom `DateTime`
/// scalar and `@restrictToSelf` directive, and writes the resulting SDL to
/// `output_path`.
///
/// Nothing is written unless the schema builds successfully.
pub fn merge_to_file(
    document: &SdlDocument,
    output_path: impl AsRef<Path>,
) -> Result<MergeSummary, MergeError> {
    let mut schema = Schema::builder()
        .load_document(document)?
        .build()?;
    let replaced = extensions::extend_schema(&mut schema);

    schema_printer::write_schema(&schema, output_path)?;

    Ok(MergeSummary {
        num_directives: schema.custom_directives().count(),
        num_fragments: document.len(),
        num_types: schema.defined_types().count(),
        replaced_date_time: replaced.is_some(),
    })
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error(transparent)]
    SchemaBuildError(#[from] SchemaBuildError),

    #[error(transparent)]
    SchemaWriteError(#[from] PrintError),
}
