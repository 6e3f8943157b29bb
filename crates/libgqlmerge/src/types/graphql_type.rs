use crate::ast;
use crate::loc;
use crate::types::CustomScalarType;
use crate::types::DefinedType;
use crate::types::GraphQLTypeKind;

/// An entry in a [Schema](crate::Schema)'s type map.
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Bool,
    CustomScalar(CustomScalarType),
    Defined(DefinedType),
    Float,
    ID,
    Int,
    String,
}
impl GraphQLType {
    pub fn as_custom_scalar(&self) -> Option<&CustomScalarType> {
        if let Self::CustomScalar(scalar) = self {
            Some(scalar)
        } else {
            None
        }
    }

    pub fn as_defined(&self) -> Option<&DefinedType> {
        if let Self::Defined(defined) = self {
            Some(defined)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> loc::SourceLocation {
        match self {
            Self::CustomScalar(_) => loc::SourceLocation::Generated,
            Self::Defined(defined) => defined.def_location().to_owned(),
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String => loc::SourceLocation::GraphQLBuiltIn,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String,
        )
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        match self {
            Self::Bool => GraphQLTypeKind::Bool,
            Self::CustomScalar(_) => GraphQLTypeKind::Scalar,
            Self::Defined(defined) => defined.kind(),
            Self::Float => GraphQLTypeKind::Float,
            Self::ID => GraphQLTypeKind::ID,
            Self::Int => GraphQLTypeKind::Int,
            Self::String => GraphQLTypeKind::String,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::CustomScalar(scalar) => scalar.name(),
            Self::Defined(defined) => defined.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }

    /// The SDL definition for this type, or `None` for built-in scalars
    /// (which are never printed).
    pub(crate) fn to_ast(&self) -> Option<ast::schema::TypeDefinition> {
        match self {
            Self::CustomScalar(scalar) =>
                Some(ast::schema::TypeDefinition::Scalar(scalar.to_ast())),
            Self::Defined(defined) => Some(defined.ast().to_owned()),
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String => None,
        }
    }
}
