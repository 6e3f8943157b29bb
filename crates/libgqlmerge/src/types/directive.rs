use crate::ast;
use crate::loc;

pub(crate) const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = [
    "skip",
    "include",
    "deprecated",
    "specifiedBy",
];

/// Represents a defined directive.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Custom {
        def: ast::schema::DirectiveDefinition,
        def_location: loc::SourceLocation,
    },
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub fn as_custom_def(&self) -> Option<&ast::schema::DirectiveDefinition> {
        if let Self::Custom { def, .. } = self {
            Some(def)
        } else {
            None
        }
    }

    pub(crate) fn builtin(name: &str) -> Option<Self> {
        match name {
            "deprecated" => Some(Self::Deprecated),
            "include" => Some(Self::Include),
            "skip" => Some(Self::Skip),
            "specifiedBy" => Some(Self::SpecifiedBy),
            _ => None,
        }
    }

    pub fn def_location(&self) -> loc::SourceLocation {
        match self {
            Self::Custom { def_location, .. } => def_location.to_owned(),
            Self::Deprecated
            | Self::Include
            | Self::Skip
            | Self::SpecifiedBy => loc::SourceLocation::GraphQLBuiltIn,
        }
    }

    /// True for GraphQL's own directives, including an SDL declaration that
    /// takes the place of one of them.
    pub fn is_builtin(&self) -> bool {
        match self {
            Self::Custom { def, .. } => BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()),
            Self::Deprecated
            | Self::Include
            | Self::Skip
            | Self::SpecifiedBy => true,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Custom { def, .. } => def.name.as_str(),
            Self::Deprecated => "deprecated",
            Self::Include => "include",
            Self::Skip => "skip",
            Self::SpecifiedBy => "specifiedBy",
        }
    }
}
