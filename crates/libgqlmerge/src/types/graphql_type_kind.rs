use crate::ast;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum => "enum",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject => "input object",
            Self::Int => "Int",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::String => "String",
            Self::Union => "union",
        }
    }
}
impl std::convert::From<&ast::schema::TypeDefinition> for GraphQLTypeKind {
    fn from(value: &ast::schema::TypeDefinition) -> Self {
        use ast::schema::TypeDefinition;
        match value {
            TypeDefinition::Enum(_) => Self::Enum,
            TypeDefinition::InputObject(_) => Self::InputObject,
            TypeDefinition::Interface(_) => Self::Interface,
            TypeDefinition::Object(_) => Self::Object,
            TypeDefinition::Scalar(_) => Self::Scalar,
            TypeDefinition::Union(_) => Self::Union,
        }
    }
}
impl std::convert::From<&ast::schema::TypeExtension> for GraphQLTypeKind {
    fn from(value: &ast::schema::TypeExtension) -> Self {
        use ast::schema::TypeExtension;
        match value {
            TypeExtension::Enum(_) => Self::Enum,
            TypeExtension::InputObject(_) => Self::InputObject,
            TypeExtension::Interface(_) => Self::Interface,
            TypeExtension::Object(_) => Self::Object,
            TypeExtension::Scalar(_) => Self::Scalar,
            TypeExtension::Union(_) => Self::Union,
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
