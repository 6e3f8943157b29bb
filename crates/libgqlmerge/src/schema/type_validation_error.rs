use crate::loc;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{enum_name}` enum defines the `{value_name}` value more than \
        once ({def_location})"
    )]
    DuplicateEnumValueName {
        def_location: loc::SourceLocation,
        enum_name: String,
        value_name: String,
    },

    #[error(
        "The `{type_name}` type defines the `{field_name}` field more than \
        once ({def_location})"
    )]
    DuplicateFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "`{referenced_from}` refers to `{undefined_type_name}`, but there is \
        no type defined with that name ({ref_location})"
    )]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        referenced_from: String,
        undefined_type_name: String,
    },
}
