//! Attest: structural equality, assertion builders, and suite reports.
//!
//! ```rust
//! use attest::output::OutputBuffer;
//! use attest::suite::Runner;
//! use attest::value::Value;
//! use attest::{assert_equal, assert_not_equal, test};
//!
//! let mut runner = Runner::new(OutputBuffer::new());
//! let status = runner.define(
//!     "lists",
//!     &[test(
//!         "order does not matter",
//!         [
//!             assert_equal(Value::list([1, 2, 3]), Value::list([3, 2, 1])),
//!             assert_not_equal(Value::list([1]), Value::list([1, 1])),
//!         ],
//!     )],
//! );
//! assert!(!status.is_failure());
//! assert!(!runner.finish().is_failure());
//! ```

pub use crate::aggregate::{test, TestResult};
pub use crate::assertion::{assert_equal, assert_not_equal, AssertionResult};
pub use crate::compare::equal;
pub use crate::errors::AttestError;
pub use crate::stringify::stringify;
pub use crate::suite::{build_report, define, RunResult, Runner};
pub use crate::value::Value;

pub mod aggregate;
pub mod assertion;
pub mod cli;
pub mod compare;
pub mod errors;
pub mod fixture;
pub mod output;
pub mod stringify;
pub mod suite;
pub mod value;

pub mod prelude {
    pub use crate::aggregate::{test, TestResult};
    pub use crate::assertion::{assert_equal, assert_not_equal, AssertionResult};
    pub use crate::compare::equal;
    pub use crate::output::{Line, LineKind, OutputSink};
    pub use crate::suite::{define, RunResult, Runner};
    pub use crate::value::{FunctionRef, Symbol, Value};
}
