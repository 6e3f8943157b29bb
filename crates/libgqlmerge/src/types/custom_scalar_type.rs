use crate::ast;
use crate::Value;
use std::sync::Arc;

/// Runtime behavior attached to a programmatically-defined scalar.
pub trait ScalarCoercion: std::fmt::Debug + Send + Sync {
    /// Converts an internal value into its wire form.
    fn serialize(&self, value: Value) -> Value;

    /// Accepts a value supplied through variables.
    fn parse_value(&self, value: Value) -> Value;

    /// Accepts a value written inline in a document. `None` means the
    /// literal is not a valid input for this scalar.
    fn parse_literal(&self, literal: &ast::Value) -> Option<Value>;
}

/// A scalar type that was added to a [Schema](crate::Schema) in code rather
/// than declared in SDL.
#[derive(Clone, Debug)]
pub struct CustomScalarType {
    coercion: Arc<dyn ScalarCoercion>,
    description: Option<String>,
    name: String,
}
impl CustomScalarType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        coercion: impl ScalarCoercion + 'static,
    ) -> Self {
        Self {
            coercion: Arc::new(coercion),
            description,
            name: name.into(),
        }
    }

    pub fn parse_literal(&self, literal: &ast::Value) -> Option<Value> {
        self.coercion.parse_literal(literal)
    }

    pub fn parse_value(&self, value: Value) -> Value {
        self.coercion.parse_value(value)
    }

    pub fn serialize(&self, value: Value) -> Value {
        self.coercion.serialize(value)
    }

    pub(crate) fn to_ast(&self) -> ast::schema::ScalarType {
        ast::schema::ScalarType {
            position: ast::Pos::default(),
            description: self.description.to_owned(),
            name: self.name.to_string(),
            directives: vec![],
        }
    }
}
