use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::schema::type_validator::TypeValidator;
use crate::sdl_document::SdlDocument;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypesMapBuilder;
use crate::types::directive::BUILTIN_DIRECTIVE_NAMES;
use crate::types::defined_type::type_def_position;
use crate::types::defined_type::type_ext_name;
use crate::types::defined_type::type_ext_position;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [Schema] from one or more SDL sources.
///
/// Loading only parses and registers definitions. Type extensions are
/// merged, built-in directives injected, and type references checked when
/// [SchemaBuilder::build()] is called, so definitions may appear in any
/// order across loads.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: Vec<Directive>,
    pending_extensions: Vec<(loc::SourceLocation, ast::schema::TypeExtension)>,
    schema_def: Option<(ast::schema::SchemaDefinition, loc::SourceLocation)>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.apply_type_extensions()?;
        self.inject_missing_builtin_directives();

        let types = self.types_map_builder.into_types_map();
        let errors = TypeValidator::new(&types).validate(
            &self.directive_defs,
            self.schema_def.as_ref().map(|(def, location)| (def, location)),
        );
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(Schema {
            directives: self.directive_defs,
            schema_def: self.schema_def.map(|(def, _)| def),
            types,
        })
    }

    /// Parses the newline-joined text of `document` as a single SDL source.
    /// Definition locations are reported relative to the fragment (and file)
    /// each definition came from.
    pub fn load_document(self, document: &SdlDocument) -> Result<Self> {
        // graphql_parser only reports parse-error positions as text, so the
        // best we can do for attribution is the file of a lone fragment.
        let parse_err_file = match document.fragments() {
            [fragment] => fragment.source_path(),
            _ => None,
        };
        let ast_doc = parse_sdl(document.text().as_str(), parse_err_file)?;
        self.load_ast(ast_doc, |pos| document.locate(pos).into())
    }

    pub fn load_str(
        self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc = parse_sdl(content, file_path.as_deref())?;
        self.load_ast(ast_doc, |pos| {
            loc::FilePosition::from_pos(file_path.as_deref(), pos).into()
        })
    }

    pub fn new() -> Self {
        Self {
            directive_defs: vec![],
            pending_extensions: vec![],
            schema_def: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    fn apply_type_extensions(&mut self) -> Result<()> {
        for (extension_location, ext) in self.pending_extensions.drain(..) {
            let type_name = type_ext_name(&ext).to_string();
            match self.types_map_builder.get_type_mut(type_name.as_str()) {
                Some(GraphQLType::Defined(defined)) => {
                    let type_kind = defined.kind();
                    defined.merge_extension(ext).map_err(|ext| {
                        SchemaBuildError::InvalidExtensionType {
                            extension_kind: GraphQLTypeKind::from(&ext),
                            extension_location: extension_location.to_owned(),
                            type_kind,
                            type_name: type_name.to_string(),
                        }
                    })?;
                    log::trace!("Merged extension of `{type_name}` from {extension_location}.");
                },

                Some(non_extendable_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        extension_kind: GraphQLTypeKind::from(&ext),
                        extension_location,
                        type_kind: non_extendable_type.kind(),
                        type_name,
                    }),

                None =>
                    return Err(SchemaBuildError::ExtensionOfUndefinedType {
                        extension_location,
                        type_name,
                    }),
            }
        }
        Ok(())
    }

    fn inject_missing_builtin_directives(&mut self) {
        for name in BUILTIN_DIRECTIVE_NAMES {
            if self.directive_defs.iter().any(|directive| directive.name() == name) {
                continue;
            }
            if let Some(directive) = Directive::builtin(name) {
                self.directive_defs.push(directive);
            }
        }
    }

    fn load_ast(
        mut self,
        ast_doc: ast::schema::Document,
        locate: impl Fn(ast::Pos) -> loc::SourceLocation,
    ) -> Result<Self> {
        for def in ast_doc.definitions {
            self.visit_ast_def(def, &locate)?;
        }
        Ok(self)
    }

    fn visit_ast_def(
        &mut self,
        def: ast::schema::Definition,
        locate: &impl Fn(ast::Pos) -> loc::SourceLocation,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(directive_def, locate),

            Definition::SchemaDefinition(schema_def) => {
                let location = locate(schema_def.position);
                if let Some((_, existing_location)) = &self.schema_def {
                    return Err(SchemaBuildError::DuplicateSchemaDefinition {
                        location1: existing_location.to_owned(),
                        location2: location,
                    });
                }
                self.schema_def = Some((schema_def, location));
                Ok(())
            },

            Definition::TypeDefinition(type_def) => {
                let location = locate(type_def_position(&type_def));
                self.types_map_builder.add_new_type(type_def, location)
            },

            Definition::TypeExtension(type_ext) => {
                let location = locate(type_ext_position(&type_ext));
                self.pending_extensions.push((location, type_ext));
                Ok(())
            },
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        def: ast::schema::DirectiveDefinition,
        locate: &impl Fn(ast::Pos) -> loc::SourceLocation,
    ) -> Result<()> {
        let location = locate(def.position);

        if let Some(existing) = self.directive_defs.iter()
            .find(|directive| directive.name() == def.name) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name,
                location1: existing.def_location(),
                location2: location,
            });
        }

        if BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()) {
            log::debug!("`@{}` declared at {location} replaces the built-in.", def.name);
        }

        self.directive_defs.push(Directive::Custom {
            def,
            def_location: location,
        });
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_sdl(content: &str, file: Option<&Path>) -> Result<ast::schema::Document> {
    graphql_parser::schema::parse_schema::<String>(content)
        .map(|doc| doc.into_static())
        .map_err(|err| SchemaBuildError::ParseError {
            file: file.map(|f| f.to_path_buf()),
            err: err.to_string(),
        })
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The `@{directive_name}` directive is defined more than once \
        ({location1} and {location2})"
    )]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("Multiple `schema` blocks were defined ({location1} and {location2})")]
    DuplicateSchemaDefinition {
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The `{type_name}` type is defined more than once ({def1} and {def2})")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error(
        "Attempted to extend the `{type_name}` type, which is not defined \
        anywhere ({extension_location})"
    )]
    ExtensionOfUndefinedType {
        extension_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the {type_kind} type `{type_name}` with a \
        {extension_kind} extension ({extension_location})"
    )]
    InvalidExtensionType {
        extension_kind: GraphQLTypeKind,
        extension_location: loc::SourceLocation,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Error parsing schema SDL{}: {err}",
        file.as_ref()
            .map(|file| format!(" in `{}`", file.display()))
            .unwrap_or_default(),
    )]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
