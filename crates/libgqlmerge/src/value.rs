use chrono::Timelike;
use indexmap::IndexMap;

/// A runtime value flowing through a scalar's coercion functions.
///
/// The temporal variants are the values that "know how" to render
/// themselves as ISO-8601 text (see [Value::to_iso8601()]); every other
/// variant is opaque to the `DateTime` scalar.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Date(chrono::NaiveDate),
    DateTime(chrono::NaiveDateTime),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    Time(chrono::NaiveTime),
    ZonedDateTime(chrono::DateTime<chrono::FixedOffset>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Renders temporal values in ISO-8601 form. Sub-second precision is
    /// only emitted (as microseconds) when non-zero, and zoned values carry
    /// a `±HH:MM` offset.
    ///
    /// Returns `None` for non-temporal values.
    pub fn to_iso8601(&self) -> Option<String> {
        match self {
            Self::Date(date) => Some(date.format(DATE_FORMAT).to_string()),

            Self::DateTime(datetime) => Some(format!(
                "{}T{}",
                datetime.format(DATE_FORMAT),
                datetime.format(time_format(datetime)),
            )),

            Self::Time(time) => Some(time.format(time_format(time)).to_string()),

            Self::ZonedDateTime(datetime) => Some(format!(
                "{}T{}{}",
                datetime.format(DATE_FORMAT),
                datetime.format(time_format(datetime)),
                datetime.format(OFFSET_FORMAT),
            )),

            Self::Boolean(_)
            | Self::Float(_)
            | Self::Int(_)
            | Self::List(_)
            | Self::Null
            | Self::Object(_)
            | Self::String(_) => None,
        }
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<chrono::NaiveDate> for Value {
    fn from(value: chrono::NaiveDate) -> Self {
        Self::Date(value)
    }
}
impl std::convert::From<chrono::NaiveDateTime> for Value {
    fn from(value: chrono::NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}
impl std::convert::From<chrono::NaiveTime> for Value {
    fn from(value: chrono::NaiveTime) -> Self {
        Self::Time(value)
    }
}
impl std::convert::From<chrono::DateTime<chrono::FixedOffset>> for Value {
    fn from(value: chrono::DateTime<chrono::FixedOffset>) -> Self {
        Self::ZonedDateTime(value)
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const OFFSET_FORMAT: &str = "%:z";

/// Leap seconds carry nanoseconds past 1e9; only the sub-second remainder
/// decides whether a fraction is printed.
fn time_format(time: &impl Timelike) -> &'static str {
    if time.nanosecond() % 1_000_000_000 / 1_000 == 0 {
        "%H:%M:%S"
    } else {
        "%H:%M:%S%.6f"
    }
}
