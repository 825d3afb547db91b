//! Departure simulation errors.

use super::error_code::{self, KeyholderErrorCode};

/// Errors returned by the departure simulator.
///
/// `PersonNotFound` is the only failure: every other input produces a
/// (possibly empty) result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("Person not found: {person_id}")]
    PersonNotFound { person_id: String },
}

impl KeyholderErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PersonNotFound { .. } => error_code::PERSON_NOT_FOUND,
        }
    }
}

/// Convenience for callers rendering a "person not found" state.
pub trait SimulationResultExt {
    fn is_person_not_found(&self) -> bool;
}

impl<T> SimulationResultExt for Result<T, SimulationError> {
    fn is_person_not_found(&self) -> bool {
        matches!(self, Err(SimulationError::PersonNotFound { .. }))
    }
}
