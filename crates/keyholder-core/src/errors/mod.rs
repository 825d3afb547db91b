//! Error handling for Keyholder.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod layout_error;
pub mod simulation_error;
pub mod snapshot_error;

pub use config_error::ConfigError;
pub use error_code::KeyholderErrorCode;
pub use layout_error::LayoutError;
pub use simulation_error::{SimulationError, SimulationResultExt};
pub use snapshot_error::SnapshotError;
