//! Deterministic risk alerts derived from a snapshot.

use keyholder_core::types::{ModuleId, PersonId, RiskLevel, Snapshot};
use serde::Serialize;

use crate::classifier::{classify_module_by_bus_factor, classify_module_by_concentration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    SinglePointOfFailure,
    KnowledgeConcentration,
    SoleOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub kind: AlertKind,
    /// Critical or Warning; healthy entities raise no alert.
    pub severity: RiskLevel,
    pub module_id: Option<ModuleId>,
    pub person_id: Option<PersonId>,
    pub message: String,
}

/// Critical alerts first, then warnings. Within a severity: module alerts
/// in snapshot order, then sole-owner alerts in snapshot order.
pub fn derive_alerts(snapshot: &Snapshot) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for module in snapshot.modules() {
        if classify_module_by_bus_factor(module.bus_factor) == RiskLevel::Critical {
            alerts.push(Alert {
                kind: AlertKind::SinglePointOfFailure,
                severity: RiskLevel::Critical,
                module_id: Some(module.id.clone()),
                person_id: None,
                message: format!(
                    "{} has a bus factor of {}",
                    module.name, module.bus_factor
                ),
            });
        }

        let severity = classify_module_by_concentration(module.concentration);
        if severity != RiskLevel::Healthy {
            alerts.push(Alert {
                kind: AlertKind::KnowledgeConcentration,
                severity,
                module_id: Some(module.id.clone()),
                person_id: None,
                message: format!(
                    "{}% of recent activity on {} comes from one contributor",
                    module.concentration, module.name
                ),
            });
        }
    }

    for person in snapshot.people() {
        let sole = person.sole_owned_areas().count();
        if sole > 0 {
            alerts.push(Alert {
                kind: AlertKind::SoleOwner,
                severity: RiskLevel::Critical,
                module_id: None,
                person_id: Some(person.id.clone()),
                message: format!("{} is the only owner of {} area(s)", person.name, sole),
            });
        }
    }

    alerts.sort_by_key(|a| severity_rank(a.severity));
    alerts
}

fn severity_rank(level: RiskLevel) -> u8 {
    match level {
        RiskLevel::Critical => 0,
        RiskLevel::Warning => 1,
        RiskLevel::Healthy => 2,
    }
}
