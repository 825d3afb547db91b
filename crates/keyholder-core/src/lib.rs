//! keyholder-core: shared foundation for the Keyholder risk engine.
//!
//! - Types: people, modules, knowledge areas, dependency links, snapshots
//! - Traits: the snapshot source consumed from the ingestion collaborator
//! - Errors: one `thiserror` enum per subsystem
//! - Config: TOML-based, layered resolution
//! - Tracing: `tracing-subscriber` setup driven by `KEYHOLDER_LOG`

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::KeyholderConfig;
pub use errors::{KeyholderErrorCode, LayoutError, SimulationError, SnapshotError};
pub use traits::SnapshotSource;
pub use types::{
    DependencyLink, KnowledgeArea, KnowledgeLevel, LinkType, Module, ModuleId, Person, PersonId,
    RiskLevel, Snapshot, SnapshotStore,
};
