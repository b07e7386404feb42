//! Simulation error type.

use std::error::Error;
use std::fmt;

use crate::validation::ValidationError;

/// Failure of a simulation run.
///
/// Input is validated upfront; once it passes, a run always completes, so
/// invalid input is the only failure mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The workload failed validation. Carries every detected problem.
    InvalidInput(Vec<ValidationError>),
}

impl SimulationError {
    /// The validation problems behind this error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidInput(errors) => errors,
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{e}")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}
