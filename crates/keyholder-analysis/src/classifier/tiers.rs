//! Tier boundaries for modules and people.
//!
//! Thresholds come from `keyholder_core::constants` so every caller agrees
//! on the same boundaries.

use keyholder_core::constants::{
    BUS_FACTOR_CRITICAL_MAX, BUS_FACTOR_WARNING, CONCENTRATION_CRITICAL_MIN,
    CONCENTRATION_WARNING_MIN, RISK_SCORE_HIGH_IMPACT_MIN, RISK_SCORE_MEDIUM_IMPACT,
};
use keyholder_core::types::RiskLevel;
use serde::{Deserialize, Serialize};

/// How strongly the organization depends on one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonImpact {
    HighImpact,
    MediumImpact,
    LowImpact,
}

impl PersonImpact {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HighImpact => "high_impact",
            Self::MediumImpact => "medium_impact",
            Self::LowImpact => "low_impact",
        }
    }
}

impl std::fmt::Display for PersonImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which scale `classify` should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationKind {
    BusFactor,
    Concentration,
    PersonImpact,
}

/// Output of `classify`: a module tier or a person tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tier {
    Module(RiskLevel),
    Person(PersonImpact),
}

/// Critical at or below 1 (0 included), warning at 2, healthy from 3.
pub fn classify_module_by_bus_factor(bus_factor: u32) -> RiskLevel {
    if bus_factor <= BUS_FACTOR_CRITICAL_MAX {
        RiskLevel::Critical
    } else if bus_factor == BUS_FACTOR_WARNING {
        RiskLevel::Warning
    } else {
        RiskLevel::Healthy
    }
}

/// Critical from 80%, warning from 60%, healthy below.
pub fn classify_module_by_concentration(concentration: u8) -> RiskLevel {
    if concentration >= CONCENTRATION_CRITICAL_MIN {
        RiskLevel::Critical
    } else if concentration >= CONCENTRATION_WARNING_MIN {
        RiskLevel::Warning
    } else {
        RiskLevel::Healthy
    }
}

/// High from 4, medium at 3, low below.
pub fn classify_person_impact(risk_score: u8) -> PersonImpact {
    if risk_score >= RISK_SCORE_HIGH_IMPACT_MIN {
        PersonImpact::HighImpact
    } else if risk_score == RISK_SCORE_MEDIUM_IMPACT {
        PersonImpact::MediumImpact
    } else {
        PersonImpact::LowImpact
    }
}

/// Dispatch to one of the three scales. Values too large for the scale's
/// field type saturate, so the function is total.
pub fn classify(kind: ClassificationKind, value: u32) -> Tier {
    let saturated = u8::try_from(value).unwrap_or(u8::MAX);
    match kind {
        ClassificationKind::BusFactor => Tier::Module(classify_module_by_bus_factor(value)),
        ClassificationKind::Concentration => {
            Tier::Module(classify_module_by_concentration(saturated))
        }
        ClassificationKind::PersonImpact => Tier::Person(classify_person_impact(saturated)),
    }
}
