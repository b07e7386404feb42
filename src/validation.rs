//! Input validation for simulation workloads.
//!
//! Checks a process list and quantum before any simulation state is built.
//! Detects:
//! - Non-positive quantum
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process IDs
//! - Time horizons that do not fit in `i64`
//!
//! All problems are reported together rather than stopping at the first.

use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The time quantum is zero or negative.
    NonPositiveQuantum,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Two processes share the same ID.
    DuplicateId,
    /// Latest arrival plus total burst exceeds the representable clock range.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the input of a simulation run.
///
/// Checks:
/// 1. `quantum > 0`
/// 2. Every `burst_time > 0`
/// 3. Every `arrival_time >= 0`
/// 4. No duplicate process IDs
/// 5. `max(arrival_time) + sum(burst_time)` fits in `i64`
///
/// The last bound caps every clock value the engine can reach, so a run
/// over validated input never overflows.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[ProcessSpec], quantum: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if quantum <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be positive, got {quantum}"),
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    if time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the simulation clock: latest arrival plus total burst.
///
/// Invalid (negative) times are ignored here; they are reported by their
/// own checks.
fn time_horizon(processes: &[ProcessSpec]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .map(|p| p.burst_time.max(0))
        .try_fold(latest_arrival, i64::checked_add)
}
