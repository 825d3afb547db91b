//! Mitigation plan for a departure.

use keyholder_core::types::collections::SmallVec5;
use serde::{Deserialize, Serialize};

/// One recommended action. Rendered to text via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mitigation {
    AssignBackupOwners { critical_modules: usize },
    DocumentSoleOwnedModules,
    ScheduleKnowledgeTransfer { high_impact_areas: usize },
    EncouragePairProgramming,
    UpdateSuccessionPlanning,
}

impl std::fmt::Display for Mitigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssignBackupOwners { critical_modules } => {
                write!(f, "assign backup owners to {critical_modules} critical module(s)")
            }
            Self::DocumentSoleOwnedModules => {
                f.write_str("create documentation for sole-owned modules")
            }
            Self::ScheduleKnowledgeTransfer { high_impact_areas } => write!(
                f,
                "schedule knowledge-transfer sessions for {high_impact_areas} high-impact area(s)"
            ),
            Self::EncouragePairProgramming => {
                f.write_str("encourage pair programming to distribute knowledge")
            }
            Self::UpdateSuccessionPlanning => {
                f.write_str("update succession-planning documentation")
            }
        }
    }
}

/// Ordered plan: critical actions, then high-impact actions, then the two
/// closing recommendations that every plan carries.
pub fn plan_mitigations(critical: usize, high: usize) -> SmallVec5<Mitigation> {
    let mut plan = SmallVec5::new();
    if critical > 0 {
        plan.push(Mitigation::AssignBackupOwners {
            critical_modules: critical,
        });
        plan.push(Mitigation::DocumentSoleOwnedModules);
    }
    if high > 0 {
        plan.push(Mitigation::ScheduleKnowledgeTransfer {
            high_impact_areas: high,
        });
    }
    plan.push(Mitigation::EncouragePairProgramming);
    plan.push(Mitigation::UpdateSuccessionPlanning);
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_without_findings_has_closing_steps_only() {
        let plan = plan_mitigations(0, 0);
        assert_eq!(
            plan.as_slice(),
            &[
                Mitigation::EncouragePairProgramming,
                Mitigation::UpdateSuccessionPlanning
            ]
        );
    }

    #[test]
    fn test_full_plan_order_and_text() {
        let plan: Vec<String> = plan_mitigations(2, 1).iter().map(|m| m.to_string()).collect();
        assert_eq!(
            plan,
            vec![
                "assign backup owners to 2 critical module(s)",
                "create documentation for sole-owned modules",
                "schedule knowledge-transfer sessions for 1 high-impact area(s)",
                "encourage pair programming to distribute knowledge",
                "update succession-planning documentation",
            ]
        );
    }

    #[test]
    fn test_plan_fits_inline() {
        assert!(!plan_mitigations(3, 3).spilled());
    }
}
