//! Errors surfaced by the harnesses.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The two inner-product inputs differ in length.
    LengthMismatch { left: usize, right: usize },
    /// A kernel disagreed with the reference beyond the allowed tolerance.
    ToleranceViolation {
        kernel: String,
        operation: &'static str,
        metric: f64,
        tolerance: f64,
        expected: f64,
        actual: f64,
    },
    /// The static input buffer was already handed out.
    StaticBufferTaken,
    /// A buffer larger than the build-time budget was requested.
    BudgetExceeded { requested: usize, budget: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LengthMismatch { left, right } => {
                write!(f, "sequences must have the same length ({} != {})", left, right)
            }
            Error::ToleranceViolation {
                kernel,
                operation,
                metric,
                tolerance,
                expected,
                actual,
            } => write!(
                f,
                "{} variant '{}' failed verification: expected {}, got {}, error {:e} (tolerance {:e})",
                operation, kernel, expected, actual, metric, tolerance
            ),
            Error::StaticBufferTaken => write!(f, "static input buffer is already in use"),
            Error::BudgetExceeded { requested, budget } => write!(
                f,
                "requested {} bytes but the buffer budget is {} bytes",
                requested, budget
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject inner-product inputs of different lengths before any kernel runs.
pub fn check_lengths<T>(x: &[T], y: &[T]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok(())
}
