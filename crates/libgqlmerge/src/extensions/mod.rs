//! The custom elements every merged schema is extended with, and the
//! extension step itself.

mod date_time;
mod restrict_to_self;

pub use date_time::DATE_TIME_SCALAR_NAME;
pub use date_time::DateTimeCoercion;
pub use date_time::date_time_scalar;
pub use restrict_to_self::RESTRICT_TO_SELF_DIRECTIVE_NAME;
pub use restrict_to_self::restrict_to_self_directive;

use crate::Schema;
use crate::types::GraphQLType;

/// Registers the `DateTime` scalar and the `@restrictToSelf` directive on
/// `schema`.
///
/// The scalar is bound under `"DateTime"` in the type map, replacing any
/// existing binding with that name; the replaced type is returned. The
/// directive is appended after all existing directives. Calling this twice
/// on the same schema appends a second `@restrictToSelf`.
pub fn extend_schema(schema: &mut Schema) -> Option<GraphQLType> {
    let replaced = schema.types_mut().insert(
        DATE_TIME_SCALAR_NAME.to_string(),
        GraphQLType::CustomScalar(date_time_scalar()),
    );
    if let Some(replaced) = &replaced {
        log::warn!(
            "Replaced the {} type `{DATE_TIME_SCALAR_NAME}` defined at {} with \
            the built-in `{DATE_TIME_SCALAR_NAME}` scalar.",
            replaced.kind(),
            replaced.def_location(),
        );
    }

    schema.directives_mut().push(restrict_to_self_directive());
    replaced
}

#[cfg(test)]
mod tests;
