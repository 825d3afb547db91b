//! KeyholderErrorCode trait for stable, caller-facing error codes.

/// Every error enum implements this so presentation callers can branch on a
/// stable code string instead of matching display text.
pub trait KeyholderErrorCode {
    /// Returns the error code string (e.g., "PERSON_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PERSON_NOT_FOUND: &str = "PERSON_NOT_FOUND";
pub const SNAPSHOT_INVALID: &str = "SNAPSHOT_INVALID";
pub const SNAPSHOT_PARSE_ERROR: &str = "SNAPSHOT_PARSE_ERROR";
pub const LAYOUT_ERROR: &str = "LAYOUT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
