//! Snapshot ingestion errors.

use super::error_code::{self, KeyholderErrorCode};

/// Data-quality errors detected when a snapshot is ingested.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("Duplicate person id: {id}")]
    DuplicatePersonId { id: String },

    #[error("Duplicate module id: {id}")]
    DuplicateModuleId { id: String },

    #[error("Risk score {value} out of range [1, 5] for person {person_id}")]
    RiskScoreOutOfRange { person_id: String, value: u8 },

    #[error("Concentration {value} out of range [0, 100] for module {module_id}")]
    ConcentrationOutOfRange { module_id: String, value: u8 },

    #[error("Link strength {value} out of range [1, 100] for link {person_id} -> {module_id}")]
    StrengthOutOfRange {
        person_id: String,
        module_id: String,
        value: u8,
    },

    #[error("Snapshot parse error: {message}")]
    ParseError { message: String },
}

impl KeyholderErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ParseError { .. } => error_code::SNAPSHOT_PARSE_ERROR,
            _ => error_code::SNAPSHOT_INVALID,
        }
    }
}
