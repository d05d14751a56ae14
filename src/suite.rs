//! Suite runner: turns test results into a report and an exit status.
//!
//! [`build_report`] is pure. [`define`] and [`Runner::define`] are the only
//! operations in the crate with side effects: they flush a report to a sink
//! and hand back a [`RunResult`]. The exit status is threaded through values
//! instead of a process-wide flag, and combining results is a logical OR, so
//! a failure is never cleared by a later passing suite.

use std::ops::{BitOr, BitOrAssign};
use std::process::ExitCode;

use serde::Serialize;
use tracing::{debug, warn};

use crate::aggregate::TestResult;
use crate::output::{Line, OutputSink, StdoutSink};

// ============================================================================
// RUN RESULT
// ============================================================================

/// Exit status produced by running one or more suites.
#[must_use = "dropping a RunResult loses the suite's failure status"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunResult {
    exit_code: u8,
}

impl RunResult {
    pub const SUCCESS: RunResult = RunResult { exit_code: 0 };
    pub const FAILURE: RunResult = RunResult { exit_code: 1 };

    pub fn from_failures(has_failures: bool) -> Self {
        if has_failures {
            Self::FAILURE
        } else {
            Self::SUCCESS
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn is_failure(&self) -> bool {
        self.exit_code != 0
    }
}

impl BitOr for RunResult {
    type Output = RunResult;

    fn bitor(self, rhs: RunResult) -> RunResult {
        RunResult::from_failures(self.is_failure() || rhs.is_failure())
    }
}

impl BitOrAssign for RunResult {
    fn bitor_assign(&mut self, rhs: RunResult) {
        *self = *self | rhs;
    }
}

impl From<RunResult> for ExitCode {
    fn from(result: RunResult) -> Self {
        ExitCode::from(result.exit_code)
    }
}

// ============================================================================
// REPORT CONSTRUCTION
// ============================================================================

/// A rendered suite report together with its pass/fail verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<Line>,
    pub has_failures: bool,
    pub test_count: usize,
    pub failing_tests: usize,
}

impl Report {
    pub fn run_result(&self) -> RunResult {
        RunResult::from_failures(self.has_failures)
    }
}

/// Builds the report for a suite without writing it anywhere.
///
/// A suite fails when it has no tests or when any test has failures.
pub fn build_report(name: &str, tests: &[TestResult]) -> Report {
    let failing_tests = tests.iter().filter(|t| t.is_failing()).count();
    let has_failures = tests.is_empty() || failing_tests > 0;

    let mut lines = vec![Line::text(["Suite:", name]), Line::blank()];
    for test in tests {
        push_test_section(&mut lines, test);
    }

    let quoted = format!("\"{name}\"");
    lines.push(if tests.is_empty() {
        Line::error([
            "Suite".to_string(),
            quoted,
            "failed: it contains no tests.".to_string(),
        ])
    } else if has_failures {
        Line::error([
            "Suite".to_string(),
            quoted,
            format!("failed: {} of {} tests failed.", failing_tests, tests.len()),
        ])
    } else {
        Line::success(["Suite".to_string(), quoted, "passed.".to_string()])
    });
    lines.push(Line::blank());

    Report {
        lines,
        has_failures,
        test_count: tests.len(),
        failing_tests,
    }
}

fn push_test_section(lines: &mut Vec<Line>, test: &TestResult) {
    lines.push(Line::text(["Test:", test.name.as_str()]));
    if test.is_failing() {
        let noun = if test.failures.len() == 1 {
            "assertion:"
        } else {
            "assertions:"
        };
        lines.push(Line::error([
            test.failures.len().to_string(),
            "failed".to_string(),
            noun.to_string(),
        ]));
        for failure in &test.failures {
            lines.push(Line::error(["-", failure.as_str()]));
            lines.push(Line::blank());
        }
    }
    lines.push(Line::text([format!(
        "{} out of {} passed",
        test.passed(),
        test.total
    )]));
}

// ============================================================================
// EXECUTION
// ============================================================================

/// Execution context that owns a sink and a sticky exit status.
///
/// # Examples
///
/// ```rust
/// use attest::output::OutputBuffer;
/// use attest::suite::Runner;
/// use attest::{assert_equal, test};
///
/// let mut runner = Runner::new(OutputBuffer::new());
/// assert!(runner.define("broken", &[]).is_failure());
/// assert!(!runner.define("fine", &[test("t", [assert_equal(1, 1)])]).is_failure());
/// assert!(runner.status().is_failure());
/// ```
pub struct Runner<S: OutputSink> {
    sink: S,
    status: RunResult,
    suites: usize,
}

impl<S: OutputSink> Runner<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            status: RunResult::SUCCESS,
            suites: 0,
        }
    }

    /// Reports one suite and folds its verdict into the runner's status.
    /// Returns the verdict of this suite alone.
    #[must_use]
    pub fn define(&mut self, name: &str, tests: &[TestResult]) -> RunResult {
        let result = emit(&mut self.sink, name, tests);
        self.suites += 1;
        if result.is_failure() && !self.status.is_failure() {
            debug!(suite = name, "exit status is now failing");
        }
        self.status |= result;
        result
    }

    /// Accumulated status of every suite defined so far.
    pub fn status(&self) -> RunResult {
        self.status
    }

    pub fn suites(&self) -> usize {
        self.suites
    }

    pub fn finish(self) -> RunResult {
        self.status
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Reports a suite to stdout and returns its exit status.
///
/// Callers running several suites in one process must OR the results
/// together (or use a [`Runner`]) so that an earlier failure is kept.
#[must_use]
pub fn define(name: &str, tests: &[TestResult]) -> RunResult {
    emit(&mut StdoutSink::default(), name, tests)
}

fn emit<S: OutputSink>(sink: &mut S, name: &str, tests: &[TestResult]) -> RunResult {
    let report = build_report(name, tests);
    debug!(
        suite = name,
        tests = report.test_count,
        failing = report.failing_tests,
        "suite finished"
    );
    if let Err(e) = sink.flush(&report.lines) {
        warn!(suite = name, error = %e, "failed to write suite report");
    }
    report.run_result()
}

// ============================================================================
// SUMMARIES
// ============================================================================

/// Machine-readable outcome of one suite.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteSummary {
    pub suite: String,
    pub passed: bool,
    pub tests: Vec<TestResult>,
}

impl SuiteSummary {
    pub fn new(name: impl Into<String>, tests: Vec<TestResult>) -> Self {
        let passed = !tests.is_empty() && tests.iter().all(|t| !t.is_failing());
        Self {
            suite: name.into(),
            passed,
            tests,
        }
    }

    pub fn run_result(&self) -> RunResult {
        RunResult::from_failures(!self.passed)
    }
}
