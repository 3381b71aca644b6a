//! The embedded self-test battery behind `--test`.
//!
//! Each check runs a division and judges the outcome. The runner executes
//! every check even after a failure so the report names all broken checks,
//! not just the first. Rendering is left to the binary.

use crate::divide::divide;
use crate::error::DivideError;

struct Check {
    name: &'static str,
    run: fn() -> std::result::Result<(), String>,
}

fn expect_close(actual: crate::error::Result<f64>, expected: f64) -> std::result::Result<(), String> {
    match actual {
        Ok(v) if (v - expected).abs() < 1e-7 => Ok(()),
        Ok(v) => Err(format!("expected {expected:?}, got {v:?}")),
        Err(e) => Err(format!("expected {expected:?}, got error: {e}")),
    }
}

fn expect_exact(actual: crate::error::Result<f64>, expected: f64) -> std::result::Result<(), String> {
    match actual {
        Ok(v) if v == expected => Ok(()),
        Ok(v) => Err(format!("expected {expected:?}, got {v:?}")),
        Err(e) => Err(format!("expected {expected:?}, got error: {e}")),
    }
}

fn expect_failure(
    actual: crate::error::Result<f64>,
    expected: DivideError,
) -> std::result::Result<(), String> {
    match actual {
        Err(e) if e == expected => Ok(()),
        Err(e) => Err(format!("expected {expected:?}, got {e:?}")),
        Ok(v) => Err(format!("expected {expected:?}, got {v:?}")),
    }
}

const CHECKS: &[Check] = &[
    Check {
        name: "integer_division",
        run: || expect_exact(divide(6, 3), 2.0),
    },
    Check {
        name: "float_division",
        run: || expect_close(divide(1, 3), 0.3333333333333),
    },
    Check {
        name: "negative_operand",
        run: || expect_exact(divide(-6, 3), -2.0),
    },
    Check {
        name: "division_by_zero",
        run: || expect_failure(divide(1, 0), DivideError::DivisionByZero),
    },
    Check {
        name: "invalid_input",
        run: || expect_failure(divide("not-a-number", 2), DivideError::InvalidInput),
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub name: &'static str,
    /// `None` means the check passed; otherwise the failure detail.
    pub failure: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub results: Vec<CheckResult>,
}

impl Report {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.failure.is_none())
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.failure.is_none()).count()
    }
}

/// Run the whole battery in declaration order and collect every result.
pub fn run_all() -> Report {
    let results = CHECKS
        .iter()
        .map(|check| CheckResult {
            name: check.name,
            failure: (check.run)().err(),
        })
        .collect();
    Report { results }
}
