//! Seams to external collaborators.

pub mod snapshot_source;

pub use snapshot_source::{JsonSnapshotSource, SnapshotSource};
