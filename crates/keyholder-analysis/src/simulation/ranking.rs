//! Rank every person by departure impact.

use std::cmp::Reverse;
use std::time::Instant;

use keyholder_core::types::{PersonId, Snapshot};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::departure::DepartureSimulator;
use super::types::SimulationResult;
use crate::classifier::{classify_person_impact, PersonImpact};

/// One person's simulated departure, for "who is our biggest risk" views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedDeparture {
    pub person_id: PersonId,
    pub person_name: String,
    pub person_impact: PersonImpact,
    pub result: SimulationResult,
}

/// Simulate every person in parallel and order the results most severe
/// first: overall impact, then recovery weeks, then person id.
pub fn rank_departures(simulator: &DepartureSimulator, snapshot: &Snapshot) -> Vec<RankedDeparture> {
    let started = Instant::now();

    let mut ranked: Vec<RankedDeparture> = snapshot
        .people()
        .par_iter()
        .filter_map(|person| {
            simulator
                .simulate(person.id.as_str(), snapshot)
                .ok()
                .map(|result| RankedDeparture {
                    person_id: person.id.clone(),
                    person_name: person.name.clone(),
                    person_impact: classify_person_impact(person.risk_score),
                    result,
                })
        })
        .collect();

    ranked.sort_by(|a, b| {
        (
            Reverse(a.result.overall_impact),
            Reverse(a.result.estimated_recovery_weeks),
            &a.person_id,
        )
            .cmp(&(
                Reverse(b.result.overall_impact),
                Reverse(b.result.estimated_recovery_weeks),
                &b.person_id,
            ))
    });

    info!(
        people = ranked.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "departure ranking complete"
    );

    ranked
}
