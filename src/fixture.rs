//! Declarative suite files.
//!
//! A fixture describes one suite as data, in JSON or YAML:
//!
//! ```yaml
//! suite: arithmetic
//! tests:
//!   - name: sums
//!     assertions:
//!       - equal: { value: 2, expected: 2 }
//!       - not_equal: { value: [1, 2], expected: [3] }
//! ```
//!
//! An omitted `value` or `expected` is the absent value; an explicit `null`
//! is null. Functions and symbols cannot be written in a fixture.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::aggregate::{test, TestResult};
use crate::assertion::{assert_equal, assert_not_equal, AssertionResult};
use crate::errors::{AttestError, Result};
use crate::value::Value;

// =============================================================================
// CORE TYPES
// =============================================================================

/// Source syntax of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Json,
    Yaml,
}

impl FixtureFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(FixtureFormat::Json),
            "yaml" | "yml" => Some(FixtureFormat::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Equal,
    NotEqual,
}

/// One assertion read from a fixture.
#[derive(Debug, Clone)]
pub struct Check {
    pub kind: CheckKind,
    pub value: Value,
    pub expected: Value,
}

impl Check {
    pub fn run(&self) -> AssertionResult {
        match self.kind {
            CheckKind::Equal => assert_equal(&self.value, &self.expected),
            CheckKind::NotEqual => assert_not_equal(&self.value, &self.expected),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FixtureTest {
    pub name: String,
    pub checks: Vec<Check>,
}

/// A validated suite description.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub suite: String,
    pub tests: Vec<FixtureTest>,
}

impl Fixture {
    /// Runs every check and aggregates the results per test.
    pub fn evaluate(&self) -> Vec<TestResult> {
        self.tests
            .iter()
            .map(|t| test(t.name.as_str(), t.checks.iter().map(Check::run)))
            .collect()
    }

    pub fn assertion_count(&self) -> usize {
        self.tests.iter().map(|t| t.checks.len()).sum()
    }
}

// =============================================================================
// RAW FILE SHAPE
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFixture {
    suite: String,
    #[serde(default)]
    tests: Vec<RawTest>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTest {
    name: String,
    #[serde(default)]
    assertions: Vec<RawAssertion>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAssertion {
    #[serde(default)]
    equal: Option<RawOperands>,
    #[serde(default)]
    not_equal: Option<RawOperands>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOperands {
    #[serde(default, deserialize_with = "present")]
    value: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    expected: Option<serde_json::Value>,
}

/// Keeps an explicit `null` distinct from a missing field.
fn present<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<serde_json::Value>, D::Error> {
    serde_json::Value::deserialize(deserializer).map(Some)
}

fn operand(raw: Option<serde_json::Value>) -> Value {
    raw.map_or(Value::Undefined, Value::from)
}

// =============================================================================
// LOADING
// =============================================================================

/// Reads and validates a fixture file.
pub fn load_fixture(path: &Path) -> Result<Fixture> {
    let format = FixtureFormat::from_path(path).ok_or_else(|| AttestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let source = fs::read_to_string(path).map_err(|source| AttestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let fixture = parse_fixture(&source, format, path)?;
    debug!(
        path = %path.display(),
        suite = %fixture.suite,
        tests = fixture.tests.len(),
        "loaded fixture"
    );
    Ok(fixture)
}

/// Parses fixture text. `path` is only used for error reporting.
pub fn parse_fixture(source: &str, format: FixtureFormat, path: &Path) -> Result<Fixture> {
    let raw: RawFixture = match format {
        FixtureFormat::Json => serde_json::from_str::<RawFixture>(source).map_err(|e| e.to_string()),
        FixtureFormat::Yaml => serde_yaml::from_str::<RawFixture>(source).map_err(|e| e.to_string()),
    }
    .map_err(|message| AttestError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    validate(raw, path)
}

fn validate(raw: RawFixture, path: &Path) -> Result<Fixture> {
    let tests = raw
        .tests
        .into_iter()
        .map(|t| -> Result<FixtureTest> {
            let checks = t
                .assertions
                .into_iter()
                .enumerate()
                .map(|(index, a)| to_check(a).map_err(|reason| invalid(path, &t.name, index, reason)))
                .collect::<Result<Vec<_>>>()?;
            Ok(FixtureTest {
                name: t.name,
                checks,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Fixture {
        suite: raw.suite,
        tests,
    })
}

fn to_check(raw: RawAssertion) -> std::result::Result<Check, String> {
    let (kind, operands) = match (raw.equal, raw.not_equal) {
        (Some(ops), None) => (CheckKind::Equal, ops),
        (None, Some(ops)) => (CheckKind::NotEqual, ops),
        (Some(_), Some(_)) => return Err("both `equal` and `not_equal` given".to_string()),
        (None, None) => return Err("missing `equal` or `not_equal`".to_string()),
    };
    Ok(Check {
        kind,
        value: operand(operands.value),
        expected: operand(operands.expected),
    })
}

fn invalid(path: &Path, test: &str, index: usize, reason: String) -> AttestError {
    AttestError::InvalidAssertion {
        path: PathBuf::from(path),
        test: test.to_string(),
        index: index + 1,
        reason,
    }
}
