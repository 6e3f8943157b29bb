use crate::ast;
use crate::Schema;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Renders `schema` as SDL text.
///
/// Output order is: the `schema { ... }` block (only when it says something
/// the conventional root type names don't), custom directive definitions
/// in registration order, then every non-built-in type in type map order.
/// Built-in scalars and directives are never printed.
pub fn print_schema(schema: &Schema) -> String {
    to_ast_document(schema).to_string()
}

/// Prints `schema` and writes it to `output_path`, replacing any existing
/// file. Parent directories are not created.
pub fn write_schema(
    schema: &Schema,
    output_path: impl AsRef<Path>,
) -> Result<(), PrintError> {
    let output_path = output_path.as_ref();
    let sdl = print_schema(schema);
    std::fs::write(output_path, sdl).map_err(|err| PrintError::OutputWriteError {
        output_path: output_path.to_path_buf(),
        err,
    })?;
    log::debug!("Wrote schema SDL to {output_path:?}.");
    Ok(())
}

pub(crate) fn to_ast_document(schema: &Schema) -> ast::schema::Document {
    let mut definitions = vec![];

    if let Some(schema_def) = schema.schema_definition()
        && needs_schema_block(schema, schema_def) {
        definitions.push(ast::schema::Definition::SchemaDefinition(
            schema_def.to_owned(),
        ));
    }

    for directive in schema.custom_directives() {
        if let Some(def) = directive.as_custom_def() {
            definitions.push(ast::schema::Definition::DirectiveDefinition(
                def.to_owned(),
            ));
        }
    }

    for type_ in schema.types().values() {
        if let Some(def) = type_.to_ast() {
            definitions.push(ast::schema::Definition::TypeDefinition(def));
        }
    }

    ast::schema::Document { definitions }
}

fn needs_schema_block(
    schema: &Schema,
    schema_def: &ast::schema::SchemaDefinition,
) -> bool {
    if !schema_def.directives.is_empty() {
        return true;
    }

    let root_types = [
        (&schema_def.query, "Query"),
        (&schema_def.mutation, "Mutation"),
        (&schema_def.subscription, "Subscription"),
    ];
    root_types.into_iter().any(|(explicit_name, conventional_name)| {
        match explicit_name {
            Some(name) => name != conventional_name,
            // Dropping the block would promote a conventionally-named type
            // the block deliberately left out.
            None => schema.types().contains_key(conventional_name),
        }
    })
}

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("Failed to write schema SDL to `{}`", output_path.display())]
    OutputWriteError {
        output_path: PathBuf,
        #[source]
        err: std::io::Error,
    },
}
