//! Fail-fast checks used by the harness binaries.
//!
//! A failed check carries the offending value instead of aborting the process, so the
//! caller decides how to report it.

use std::fmt::Display;

use crate::error::{Result, StatsError};

/// Require `actual == expected`.
pub fn ensure_eq<T: PartialEq + Display>(what: &str, expected: T, actual: T) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(StatsError::Verification {
            what: what.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// Require `|actual - expected| <= tol`.
pub fn ensure_close(what: &str, expected: f64, actual: f64, tol: f64) -> Result<()> {
    if (actual - expected).abs() <= tol {
        Ok(())
    } else {
        Err(StatsError::Verification {
            what: what.to_string(),
            expected: format!("{expected} (±{tol:e})"),
            actual: actual.to_string(),
        })
    }
}
