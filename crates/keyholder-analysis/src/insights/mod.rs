//! Read-only views over a snapshot: summary, profiles, alerts, sorting,
//! and the person → module knowledge graph.

pub mod alerts;
pub mod graph;
pub mod profile;
pub mod sorting;
pub mod summary;

pub use alerts::{derive_alerts, Alert, AlertKind};
pub use graph::{GraphNode, KnowledgeGraph, LinkEdge};
pub use profile::{ModuleProfile, PersonProfile};
pub use sorting::{
    search_modules, search_people, sort_modules, sort_people, ModuleSort, PersonSort,
    SortOrder,
};
pub use summary::RiskSummary;
