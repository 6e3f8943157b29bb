mod custom_scalar_type;
pub(crate) mod defined_type;
pub(crate) mod directive;
mod graphql_type;
mod graphql_type_kind;
mod types_map_builder;

pub use custom_scalar_type::CustomScalarType;
pub use custom_scalar_type::ScalarCoercion;
pub use defined_type::DefinedType;
pub use directive::Directive;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub(crate) use types_map_builder::TypesMapBuilder;

#[cfg(test)]
mod tests;
