use crate::ast;
use crate::loc;
use crate::types::Directive;

pub const RESTRICT_TO_SELF_DIRECTIVE_NAME: &str = "restrictToSelf";

/// Builds a fresh definition of:
///
/// ```graphql
/// directive @restrictToSelf(reason: String = "restricted") on FIELD_DEFINITION
/// ```
pub fn restrict_to_self_directive() -> Directive {
    Directive::Custom {
        def: ast::schema::DirectiveDefinition {
            position: ast::Pos::default(),
            description: None,
            name: RESTRICT_TO_SELF_DIRECTIVE_NAME.to_string(),
            arguments: vec![
                ast::schema::InputValue {
                    position: ast::Pos::default(),
                    description: None,
                    name: "reason".to_string(),
                    value_type: ast::schema::Type::NamedType("String".to_string()),
                    default_value: Some(ast::Value::String("restricted".to_string())),
                    directives: vec![],
                },
            ],
            repeatable: false,
            locations: vec![ast::schema::DirectiveLocation::FieldDefinition],
        },
        def_location: loc::SourceLocation::Generated,
    }
}
