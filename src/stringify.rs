//! Renders values into the compact text used by assertion messages.
//!
//! Functions render as `[Function]`. Everything else follows JSON
//! serialization conventions: absent values and unsupported kinds have no
//! JSON form, so they print as `undefined` at the top level, as `null`
//! inside lists, and are dropped from maps.
//!
//! Maps are ordered by key, so their keys print in sorted order rather than
//! the order they were inserted: `{"b":1,"a":2}` renders as `{"a":2,"b":1}`.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::Value;

/// Token printed for function values.
pub const FUNCTION_TOKEN: &str = "[Function]";

/// Token printed for values without a JSON form.
pub const UNDEFINED_TOKEN: &str = "undefined";

// Largest magnitude at which every integer is exactly representable in an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Stringifies a value for use in an assertion message.
///
/// # Examples
///
/// ```rust
/// use attest::stringify::stringify;
/// use attest::value::Value;
/// assert_eq!(stringify(&Value::from(1)), "1");
/// assert_eq!(stringify(&Value::from("a")), "\"a\"");
/// assert_eq!(stringify(&Value::list([1.5, 2.0])), "[1.5,2]");
/// assert_eq!(stringify(&Value::function(|_| Value::Null)), "[Function]");
/// ```
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Function(_) => FUNCTION_TOKEN.to_string(),
        Value::Undefined | Value::Symbol(_) => UNDEFINED_TOKEN.to_string(),
        // Best effort: the serializer below never raises, but a failure must not abort a run.
        _ => serde_json::to_string(value).unwrap_or_else(|_| UNDEFINED_TOKEN.to_string()),
    }
}

/// Returns true if the value has no JSON representation.
fn is_unrepresentable(value: &Value) -> bool {
    matches!(
        value,
        Value::Undefined | Value::Function(_) | Value::Symbol(_)
    )
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) | Value::Symbol(_) => {
                serializer.serialize_unit()
            }
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, item) in entries.iter().filter(|(_, v)| !is_unrepresentable(v)) {
                    map.serialize_entry(key, item)?;
                }
                map.end()
            }
        }
    }
}

fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !n.is_finite() {
        return serializer.serialize_unit();
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        // Also folds -0 into 0.
        return serializer.serialize_i64(n as i64);
    }
    serializer.serialize_f64(n)
}
