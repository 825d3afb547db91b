//! Organization-wide risk counts.

use keyholder_core::types::{RiskLevel, Snapshot};
use serde::Serialize;

use crate::classifier::{classify_person_impact, PersonImpact};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummary {
    pub total_people: usize,
    pub total_modules: usize,
    pub critical_modules: usize,
    pub warning_modules: usize,
    pub healthy_modules: usize,
    pub high_impact_people: usize,
    pub medium_impact_people: usize,
    pub low_impact_people: usize,
    /// Mean stored bus factor; 0.0 with no modules.
    pub average_bus_factor: f64,
    pub sole_owned_areas: usize,
}

impl RiskSummary {
    /// Module counts use the stored risk level; people counts use the
    /// impact tier of their risk score.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut summary = Self {
            total_people: snapshot.people().len(),
            total_modules: snapshot.modules().len(),
            ..Self::default()
        };

        let mut bus_factor_sum: u64 = 0;
        for module in snapshot.modules() {
            bus_factor_sum += u64::from(module.bus_factor);
            match module.risk_level {
                RiskLevel::Critical => summary.critical_modules += 1,
                RiskLevel::Warning => summary.warning_modules += 1,
                RiskLevel::Healthy => summary.healthy_modules += 1,
            }
        }
        if summary.total_modules > 0 {
            summary.average_bus_factor = bus_factor_sum as f64 / summary.total_modules as f64;
        }

        for person in snapshot.people() {
            match classify_person_impact(person.risk_score) {
                PersonImpact::HighImpact => summary.high_impact_people += 1,
                PersonImpact::MediumImpact => summary.medium_impact_people += 1,
                PersonImpact::LowImpact => summary.low_impact_people += 1,
            }
            summary.sole_owned_areas += person.sole_owned_areas().count();
        }

        summary
    }
}
