//! Departure Simulator: what breaks if a person leaves.
//!
//! Stateless projection over one snapshot: per-module bus-factor deltas,
//! aggregate severity, recovery estimate and mitigation plan. Ranking runs
//! the simulator for everyone; the request tracker gives callers a
//! last-request-wins discard policy without adding state to the engine.

pub mod departure;
pub mod mitigations;
pub mod ranking;
pub mod request;
pub mod types;

pub use departure::{simulate_departure, DepartureSimulator};
pub use mitigations::{plan_mitigations, Mitigation};
pub use ranking::{rank_departures, RankedDeparture};
pub use request::{RequestTracker, SimulationRequest};
pub use types::*;
