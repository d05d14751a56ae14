//! Collects assertion results into a named test.

use serde::Serialize;

use crate::assertion::AssertionResult;

/// Failure recorded for a test that made no assertions.
pub const NO_ASSERTIONS_MESSAGE: &str = "Test did not contain any assertions.";

/// A named group of assertion outcomes.
///
/// `failures` holds the messages of failed assertions in their original
/// order and `total` counts every assertion supplied. A test with no
/// assertions carries [`NO_ASSERTIONS_MESSAGE`] as its only failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    pub name: String,
    pub failures: Vec<String>,
    pub total: usize,
}

impl TestResult {
    /// Number of assertions that held. Never underflows.
    pub fn passed(&self) -> usize {
        self.total.saturating_sub(self.failures.len())
    }

    pub fn is_failing(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Aggregates assertion results into a [`TestResult`].
///
/// # Examples
///
/// ```rust
/// use attest::{assert_equal, test};
/// let result = test("math", [assert_equal(1, 1), assert_equal(1, 2)]);
/// assert_eq!(result.total, 2);
/// assert_eq!(result.failures, vec!["1 is not equal to 2".to_string()]);
/// ```
pub fn test(
    name: impl Into<String>,
    assertions: impl IntoIterator<Item = AssertionResult>,
) -> TestResult {
    let name = name.into();
    let mut total = 0;
    let mut failures = Vec::new();
    for assertion in assertions {
        total += 1;
        if !assertion.ok() {
            failures.push(assertion.into_message());
        }
    }
    if total == 0 {
        failures.push(NO_ASSERTIONS_MESSAGE.to_string());
    }
    TestResult {
        name,
        failures,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::{assert_equal, assert_not_equal};

    #[test]
    fn empty_test_fails_with_synthetic_message() {
        let result = test("empty", Vec::new());
        assert_eq!(result.total, 0);
        assert_eq!(result.failures, vec![NO_ASSERTIONS_MESSAGE.to_string()]);
        assert_eq!(result.passed(), 0);
        assert!(result.is_failing());
    }

    #[test]
    fn failures_keep_input_order() {
        let result = test(
            "ordered",
            [
                assert_equal(1, 2),
                assert_equal(3, 3),
                assert_not_equal("x", "x"),
            ],
        );
        assert_eq!(result.total, 3);
        assert_eq!(
            result.failures,
            vec![
                "1 is not equal to 2".to_string(),
                r#""x" is equal to "x", but it shouldn't be"#.to_string(),
            ]
        );
        assert_eq!(result.passed(), 1);
    }

    #[test]
    fn all_passing_test_has_no_failures() {
        let result = test("ok", [assert_equal(true, true)]);
        assert!(!result.is_failing());
        assert_eq!(result.passed(), 1);
    }
}
