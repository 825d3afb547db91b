//! Atomic snapshot replacement.

use std::sync::{Arc, PoisonError, RwLock};

use super::snapshot::Snapshot;

/// A snapshot together with the generation it was published under.
#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    pub generation: u64,
    pub snapshot: Arc<Snapshot>,
}

/// Holds the current snapshot and swaps it atomically when a scan finishes.
///
/// Readers clone the `Arc` and keep computing against it even if a
/// replacement lands mid-computation, so every computation sees exactly one
/// snapshot.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<LoadedSnapshot>,
}

impl SnapshotStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            current: RwLock::new(LoadedSnapshot {
                generation: 0,
                snapshot: Arc::new(snapshot),
            }),
        }
    }

    /// The current snapshot.
    pub fn current(&self) -> Arc<Snapshot> {
        self.load().snapshot
    }

    /// The current snapshot and its generation, read under one lock.
    pub fn load(&self) -> LoadedSnapshot {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn generation(&self) -> u64 {
        self.load().generation
    }

    /// Publish a new snapshot. Returns the new generation.
    pub fn replace(&self, snapshot: Snapshot) -> u64 {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let generation = guard.generation + 1;
        *guard = LoadedSnapshot {
            generation,
            snapshot: Arc::new(snapshot),
        };
        tracing::info!(
            generation,
            people = guard.snapshot.people().len(),
            modules = guard.snapshot.modules().len(),
            "snapshot replaced"
        );
        generation
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(Snapshot::empty())
    }
}
