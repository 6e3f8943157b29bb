use crate::ast;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// An in-memory GraphQL schema built from SDL.
///
/// Unlike most schema representations this one stays mutable after it is
/// built: [Schema::types_mut()] and [Schema::directives_mut()] are the two
/// points through which extra types and directives get registered before
/// the schema is printed.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) directives: Vec<Directive>,
    pub(crate) schema_def: Option<ast::schema::SchemaDefinition>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Iterates over every directive that is not one of GraphQL's built-in
    /// directives, in declaration order.
    pub fn custom_directives(&self) -> impl Iterator<Item = &Directive> {
        self.directives.iter().filter(|directive| !directive.is_builtin())
    }

    /// Iterates over every type that is not one of GraphQL's built-in
    /// scalars, in type map order.
    pub fn defined_types(&self) -> impl Iterator<Item = &GraphQLType> {
        self.types.values().filter(|type_| !type_.is_builtin())
    }

    /// All directives, including the built-in ones, in the order they were
    /// registered.
    pub fn directives(&self) -> &[Directive] {
        self.directives.as_slice()
    }

    /// The directive collection. Appending here preserves the existing
    /// order.
    pub fn directives_mut(&mut self) -> &mut Vec<Directive> {
        &mut self.directives
    }

    /// Looks up the first directive registered under `name`.
    pub fn get_directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|directive| directive.name() == name)
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.root_type_name(
            self.schema_def.as_ref().and_then(|def| def.mutation.as_deref()),
            "Mutation",
        )
    }

    pub fn query_type_name(&self) -> Option<&str> {
        self.root_type_name(
            self.schema_def.as_ref().and_then(|def| def.query.as_deref()),
            "Query",
        )
    }

    /// The explicit `schema { ... }` block, if the SDL declared one.
    pub fn schema_definition(&self) -> Option<&ast::schema::SchemaDefinition> {
        self.schema_def.as_ref()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.root_type_name(
            self.schema_def.as_ref().and_then(|def| def.subscription.as_deref()),
            "Subscription",
        )
    }

    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// The type map. Inserting under an existing key replaces that binding
    /// in place.
    pub fn types_mut(&mut self) -> &mut IndexMap<String, GraphQLType> {
        &mut self.types
    }

    fn root_type_name<'a>(
        &'a self,
        explicit_name: Option<&'a str>,
        default_name: &'static str,
    ) -> Option<&'a str> {
        if let Some(name) = explicit_name {
            return Some(name);
        }

        // Without a `schema` block, GraphQL falls back to conventionally
        // named object types.
        if self.schema_def.is_none() && self.types.contains_key(default_name) {
            Some(default_name)
        } else {
            None
        }
    }
}
