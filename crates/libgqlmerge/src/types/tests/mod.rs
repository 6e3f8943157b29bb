
use crate::ast;

pub(super) fn parse_definitions(sdl: &str) -> Vec<ast::schema::Definition> {
    graphql_parser::schema::parse_schema::<String>(sdl)
        .expect("parse error")
        .into_static()
        .definitions
}

pub(super) fn parse_type_def(sdl: &str) -> ast::schema::TypeDefinition {
    parse_definitions(sdl).into_iter()
        .find_map(|def| match def {
            ast::schema::Definition::TypeDefinition(type_def) => Some(type_def),
            _ => None,
        })
        .expect("no type definition found")
}

pub(super) fn parse_type_ext(sdl: &str) -> ast::schema::TypeExtension {
    parse_definitions(sdl).into_iter()
        .find_map(|def| match def {
            ast::schema::Definition::TypeExtension(type_ext) => Some(type_ext),
            _ => None,
        })
        .expect("no type extension found")
}
