use crate::ast;
use crate::types::CustomScalarType;
use crate::types::ScalarCoercion;
use crate::Value;

pub const DATE_TIME_SCALAR_NAME: &str = "DateTime";

/// Builds a fresh `DateTime` scalar definition.
pub fn date_time_scalar() -> CustomScalarType {
    CustomScalarType::new(
        DATE_TIME_SCALAR_NAME,
        Some("A custom scalar for DateTime".to_string()),
        DateTimeCoercion,
    )
}

/// Serializes temporal values as ISO-8601 strings and otherwise leaves
/// values alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateTimeCoercion;
impl ScalarCoercion for DateTimeCoercion {
    fn serialize(&self, value: Value) -> Value {
        match value.to_iso8601() {
            Some(iso) => Value::String(iso),
            None => value,
        }
    }

    fn parse_value(&self, value: Value) -> Value {
        value
    }

    fn parse_literal(&self, literal: &ast::Value) -> Option<Value> {
        if let ast::Value::String(str) = literal {
            Some(Value::String(str.to_owned()))
        } else {
            None
        }
    }
}
