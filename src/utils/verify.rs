//! Agreement checks between a kernel and the reference.

use crate::error::{Error, Result};

/// How close an alternative result must be to the reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance {
    /// `|ref - alt| / |ref|` must stay strictly below the bound.
    Relative(f64),
    /// Results must be bit-for-bit equal values.
    Exact,
}

impl Tolerance {
    /// Error metric for this tolerance.
    pub fn metric(self, expected: f64, actual: f64) -> f64 {
        match self {
            Tolerance::Relative(_) => relative_error(expected, actual),
            Tolerance::Exact => (expected - actual).abs(),
        }
    }

    pub fn accepts(self, expected: f64, actual: f64) -> bool {
        match self {
            Tolerance::Relative(bound) => relative_error(expected, actual) < bound,
            Tolerance::Exact => expected == actual,
        }
    }

    pub fn bound(self) -> f64 {
        match self {
            Tolerance::Relative(bound) => bound,
            Tolerance::Exact => 0.0,
        }
    }
}

/// `|expected - actual| / |expected|`, or the absolute difference when the
/// expected value is zero.
pub fn relative_error(expected: f64, actual: f64) -> f64 {
    let diff = (expected - actual).abs();
    if expected == 0.0 {
        diff
    } else {
        diff / expected.abs()
    }
}

/// Outcome for one kernel.
#[derive(Clone, Debug, PartialEq)]
pub struct KernelCheck {
    pub kernel: &'static str,
    pub expected: f64,
    pub actual: f64,
    pub metric: f64,
    pub passed: bool,
}

/// Outcomes for every kernel of one reduction.
#[derive(Clone, Debug)]
pub struct VerifyReport {
    pub operation: &'static str,
    pub tolerance: Tolerance,
    pub checks: Vec<KernelCheck>,
}

impl VerifyReport {
    pub fn new(operation: &'static str, tolerance: Tolerance) -> Self {
        Self {
            operation,
            tolerance,
            checks: Vec::new(),
        }
    }

    /// Compare one kernel result against the reference and keep the outcome.
    pub fn record(&mut self, kernel: &'static str, expected: f64, actual: f64) -> &KernelCheck {
        self.checks.push(KernelCheck {
            kernel,
            expected,
            actual,
            metric: self.tolerance.metric(expected, actual),
            passed: self.tolerance.accepts(expected, actual),
        });
        &self.checks[self.checks.len() - 1]
    }

    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// The first disagreement, as an error.
    pub fn first_failure(&self) -> Option<Error> {
        self.checks
            .iter()
            .find(|c| !c.passed)
            .map(|c| Error::ToleranceViolation {
                kernel: c.kernel.to_string(),
                operation: self.operation,
                metric: c.metric,
                tolerance: self.tolerance.bound(),
                expected: c.expected,
                actual: c.actual,
            })
    }

    pub fn into_result(self) -> Result<Vec<KernelCheck>> {
        match self.first_failure() {
            Some(e) => Err(e),
            None => Ok(self.checks),
        }
    }
}
