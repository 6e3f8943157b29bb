use crate::extensions;
use crate::extensions::DATE_TIME_SCALAR_NAME;
use crate::extensions::RESTRICT_TO_SELF_DIRECTIVE_NAME;
use crate::types::GraphQLTypeKind;
use crate::Schema;

fn build(sdl: &str) -> Schema {
    Schema::builder()
        .load_str(None, sdl)
        .and_then(|builder| builder.build())
        .expect("schema builds")
}

#[test]
fn adds_date_time_scalar_and_directive() {
    let mut schema = build("type Query { ok: Boolean }");

    let replaced = extensions::extend_schema(&mut schema);

    assert!(replaced.is_none());
    let date_time = schema.get_type(DATE_TIME_SCALAR_NAME).expect("DateTime is registered");
    assert_eq!(date_time.kind(), GraphQLTypeKind::Scalar);
    let scalar = date_time.as_custom_scalar().expect("DateTime is a custom scalar");
    assert_eq!(scalar.description(), Some("A custom scalar for DateTime"));

    let last = schema.directives().last().expect("directives are not empty");
    assert_eq!(last.name(), RESTRICT_TO_SELF_DIRECTIVE_NAME);
    assert!(!last.is_builtin());
}

#[test]
fn existing_directives_keep_their_order() {
    let mut schema = build("directive @b on OBJECT\ndirective @a on OBJECT");
    let before: Vec<_> = schema.directives().iter()
        .map(|d| d.name().to_string())
        .collect();

    extensions::extend_schema(&mut schema);

    let after: Vec<_> = schema.directives().iter()
        .map(|d| d.name().to_string())
        .collect();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], before.as_slice());
    assert_eq!(after[before.len()], RESTRICT_TO_SELF_DIRECTIVE_NAME);
}

#[test]
fn user_defined_date_time_is_replaced() {
    let mut schema = build(concat!(
        "type DateTime { iso: String }\n",
        "type Query { now: DateTime }\n",
    ));

    let replaced = extensions::extend_schema(&mut schema);

    let replaced = replaced.expect("the user's DateTime is returned");
    assert_eq!(replaced.kind(), GraphQLTypeKind::Object);
    assert!(schema.get_type(DATE_TIME_SCALAR_NAME)
        .and_then(|t| t.as_custom_scalar())
        .is_some());

    // The replacement keeps the original's slot in the type map.
    let names: Vec<_> = schema.defined_types().map(|t| t.name()).collect();
    assert_eq!(names, vec!["DateTime", "Query"]);
}

#[test]
fn extending_twice_appends_a_second_directive() {
    let mut schema = build("type Query { ok: Boolean }");

    extensions::extend_schema(&mut schema);
    let replaced = extensions::extend_schema(&mut schema);

    assert!(replaced.is_some());
    let restrict_count = schema.directives().iter()
        .filter(|d| d.name() == RESTRICT_TO_SELF_DIRECTIVE_NAME)
        .count();
    assert_eq!(restrict_count, 2);
    let date_time_count = schema.types().keys()
        .filter(|name| name.as_str() == DATE_TIME_SCALAR_NAME)
        .count();
    assert_eq!(date_time_count, 1);
}

#[test]
fn factories_return_fresh_values() {
    let directive = extensions::restrict_to_self_directive();
    let def = directive.as_custom_def().expect("a custom directive");

    assert_eq!(def.arguments.len(), 1);
    assert_eq!(def.arguments[0].name, "reason");
    assert_eq!(
        def.arguments[0].default_value,
        Some(crate::ast::Value::String("restricted".to_string())),
    );
    assert!(!def.repeatable);
    assert_eq!(extensions::restrict_to_self_directive(), directive);
}
