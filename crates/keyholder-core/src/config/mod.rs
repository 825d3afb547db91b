//! Configuration system for Keyholder.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod keyholder_config;
pub mod layout_config;
pub mod simulation_config;

pub use keyholder_config::{CliOverrides, KeyholderConfig};
pub use layout_config::LayoutConfig;
pub use simulation_config::SimulationConfig;
