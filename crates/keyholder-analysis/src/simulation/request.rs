//! Last-request-wins tracking for callers issuing simulations.
//!
//! The simulator is stateless; this tracker lives on the caller side. Each
//! request is stamped with a generation. A result is accepted only if its
//! request is still the newest one issued, so a slow result for a previously
//! selected person never overwrites the current selection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use keyholder_core::types::PersonId;

/// A generation-stamped simulation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRequest {
    pub generation: u64,
    pub person_id: PersonId,
}

/// Shared generation counter. Clones observe the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request, superseding every earlier one.
    pub fn issue(&self, person_id: impl Into<PersonId>) -> SimulationRequest {
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        SimulationRequest {
            generation,
            person_id: person_id.into(),
        }
    }

    /// Supersede every outstanding request without issuing a new one
    /// (e.g. the caller reset its selection).
    pub fn cancel_pending(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }

    pub fn is_current(&self, request: &SimulationRequest) -> bool {
        self.latest.load(Ordering::Acquire) == request.generation
    }

    /// Returns `outcome` if `request` is still current, otherwise discards it.
    pub fn accept<T>(&self, request: &SimulationRequest, outcome: T) -> Option<T> {
        if self.is_current(request) {
            Some(outcome)
        } else {
            tracing::debug!(
                generation = request.generation,
                person_id = %request.person_id,
                "discarding stale simulation result"
            );
            None
        }
    }
}
