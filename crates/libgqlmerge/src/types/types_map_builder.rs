use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DefinedType;
use crate::types::GraphQLType;
use crate::types::defined_type::type_def_name;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Accumulates the type map in the order types are declared.
#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn add_new_type(
        &mut self,
        def: ast::schema::TypeDefinition,
        def_location: loc::SourceLocation,
    ) -> Result<()> {
        let type_name = type_def_name(&def).to_string();
        if let Some(conflicting_type) = self.types.get(type_name.as_str()) {
            // `scalar String` and friends just restate a built-in.
            if conflicting_type.is_builtin()
                && matches!(def, ast::schema::TypeDefinition::Scalar(_)) {
                log::debug!(
                    "Keeping the built-in `{type_name}` scalar redeclared at {def_location}.",
                );
                return Ok(());
            }
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                def1: conflicting_type.def_location(),
                def2: def_location,
            });
        }

        self.types.insert(type_name, GraphQLType::Defined(DefinedType {
            def,
            def_location,
        }));
        Ok(())
    }

    pub fn get_type_mut(&mut self, type_name: &str) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    pub fn into_types_map(self) -> IndexMap<String, GraphQLType> {
        self.types
    }

    pub fn new() -> Self {
        Self {
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }
}
