//! Equality and inequality assertions built on [`equal`].
//!
//! Both builders are pure: they never panic or print, and a failed check is
//! an [`AssertionResult`] with `ok == false`.

use serde::Serialize;

use crate::compare::equal;
use crate::stringify::stringify;
use crate::value::Value;

/// Outcome of a single equality or inequality check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertionResult {
    ok: bool,
    message: String,
}

impl AssertionResult {
    pub fn ok(&self) -> bool {
        self.ok
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// Asserts that `value` is structurally equal to `expected`.
///
/// # Examples
///
/// ```rust
/// use attest::assertion::assert_equal;
/// let result = assert_equal(1, 2);
/// assert!(!result.ok());
/// assert_eq!(result.message(), "1 is not equal to 2");
/// ```
pub fn assert_equal(value: impl Into<Value>, expected: impl Into<Value>) -> AssertionResult {
    let (value, expected): (Value, Value) = (value.into(), expected.into());
    let ok = equal(&value, &expected);
    let (value, expected) = (stringify(&value), stringify(&expected));
    let message = if ok {
        format!("{value} is equal to {expected}")
    } else {
        format!("{value} is not equal to {expected}")
    };
    AssertionResult { ok, message }
}

/// Asserts that `value` is not structurally equal to `expected`.
///
/// # Examples
///
/// ```rust
/// use attest::assertion::assert_not_equal;
/// let result = assert_not_equal("a", "a");
/// assert!(!result.ok());
/// assert_eq!(result.message(), r#""a" is equal to "a", but it shouldn't be"#);
/// ```
pub fn assert_not_equal(value: impl Into<Value>, expected: impl Into<Value>) -> AssertionResult {
    let (value, expected): (Value, Value) = (value.into(), expected.into());
    let ok = !equal(&value, &expected);
    let (value, expected) = (stringify(&value), stringify(&expected));
    let message = if ok {
        format!("{value} is not equal to {expected}")
    } else {
        format!("{value} is equal to {expected}, but it shouldn't be")
    };
    AssertionResult { ok, message }
}
