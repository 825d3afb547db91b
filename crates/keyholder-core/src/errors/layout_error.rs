//! Layout geometry errors.

use super::error_code::{self, KeyholderErrorCode};

/// Errors raised when building layout geometry.
///
/// Empty visible sets are not an error; they produce an empty layout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid layout geometry: {message}")]
    InvalidGeometry { message: String },
}

impl KeyholderErrorCode for LayoutError {
    fn error_code(&self) -> &'static str {
        error_code::LAYOUT_ERROR
    }
}
