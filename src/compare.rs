//! Structural equality over [`Value`].
//!
//! The rules are evaluated from the point of view of the first operand:
//!
//! - **Primitives** compare by kind and content with no coercion. Numbers
//!   follow IEEE-754, so `NaN` never equals anything, itself included.
//! - **Functions** compare by identity.
//! - **Lists** compare set-like: equal lengths, and every element of `value`
//!   has *some* recursively equal element in `expected`. Matches are not
//!   consumed, so `[1, 1]` equals `[1, 2]` but `[1, 2]` does not equal
//!   `[1, 1]`.
//! - **Maps** need the same number of keys, and each key of `value` must map
//!   to an equal entry in `expected`; a missing key reads as
//!   [`Value::Undefined`].
//! - **Symbols** and mismatched kinds are never equal.
//!
//! There is no cycle detection. `Value` is an owned tree, so recursion depth
//! equals nesting depth; extremely deep nesting can exhaust the stack.

use im::OrdMap;

use crate::value::Value;

/// Returns true if `value` is structurally equal to `expected`.
///
/// # Examples
///
/// ```rust
/// use attest::compare::equal;
/// use attest::value::Value;
/// assert!(equal(&Value::list([3, 1, 2]), &Value::list([1, 2, 3])));
/// assert!(!equal(&Value::from(1), &Value::from("1")));
/// assert!(!equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
/// ```
pub fn equal(value: &Value, expected: &Value) -> bool {
    match (value, expected) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Function(a), Value::Function(b)) => a.same_as(b),
        (Value::List(items), Value::List(candidates)) => lists_equal(items, candidates),
        (Value::Map(entries), Value::Map(other)) => maps_equal(entries, other),
        _ => false,
    }
}

fn lists_equal(items: &[Value], candidates: &[Value]) -> bool {
    items.len() == candidates.len()
        && items
            .iter()
            .all(|item| candidates.iter().any(|candidate| equal(item, candidate)))
}

fn maps_equal(entries: &OrdMap<String, Value>, other: &OrdMap<String, Value>) -> bool {
    entries.len() == other.len()
        && entries.iter().all(|(key, item)| match other.get(key) {
            Some(found) => equal(item, found),
            None => equal(item, &Value::Undefined),
        })
}
