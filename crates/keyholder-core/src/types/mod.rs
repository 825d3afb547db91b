//! Core types: identifiers, entities, snapshots.

pub mod collections;
pub mod entities;
pub mod identifiers;
pub mod snapshot;
pub mod store;

pub use entities::{
    DependencyLink, KnowledgeArea, KnowledgeLevel, LinkType, Module, Person, RiskLevel,
};
pub use identifiers::{ModuleId, PersonId};
pub use snapshot::Snapshot;
pub use store::{LoadedSnapshot, SnapshotStore};
