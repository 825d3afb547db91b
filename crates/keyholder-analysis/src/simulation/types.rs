//! Simulation types: impact levels, affected modules, results.

use keyholder_core::types::collections::SmallVec5;
use keyholder_core::types::{ModuleId, PersonId};
use serde::{Deserialize, Serialize};

use super::mitigations::Mitigation;

/// Severity of a departure's consequences. Ordered `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ImpactLevel {
    /// All levels, most severe first.
    pub const ALL: &'static [ImpactLevel] = &[Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Impact on one module once the person is gone.
    pub fn for_module(is_only_owner: bool, new_bus_factor: u32) -> Self {
        if is_only_owner {
            Self::Critical
        } else {
            match new_bus_factor {
                1 => Self::High,
                2 => Self::Medium,
                _ => Self::Low,
            }
        }
    }

    /// Most severe level present; `Low` when there are none.
    pub fn aggregate(levels: impl IntoIterator<Item = ImpactLevel>) -> Self {
        levels.into_iter().max().unwrap_or(Self::Low)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Projected state of one module after the departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectedModule {
    pub module_id: ModuleId,
    pub module_name: String,
    pub current_bus_factor: u32,
    pub new_bus_factor: u32,
    pub impact: ImpactLevel,
}

/// Complete departure simulation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub person_id: PersonId,
    /// In the order of the person's knowledge areas.
    pub affected_modules: Vec<AffectedModule>,
    pub estimated_recovery_weeks: u32,
    pub overall_impact: ImpactLevel,
    pub mitigations: SmallVec5<Mitigation>,
}

impl SimulationResult {
    /// Number of affected modules at exactly `impact`.
    pub fn count(&self, impact: ImpactLevel) -> usize {
        self.affected_modules
            .iter()
            .filter(|m| m.impact == impact)
            .count()
    }
}
