//! Departure simulation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASELINE_RECOVERY_WEEKS, DEFAULT_CRITICAL_RECOVERY_WEEKS,
    DEFAULT_HIGH_RECOVERY_WEEKS,
};

/// Recovery-time weights. Estimate = critical * n_critical + high * n_high + baseline.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Weeks per critical-impact module. Default: 8.
    pub critical_recovery_weeks: Option<u32>,
    /// Weeks per high-impact module. Default: 4.
    pub high_recovery_weeks: Option<u32>,
    /// Fixed onboarding overhead. Default: 2.
    pub baseline_recovery_weeks: Option<u32>,
}

impl SimulationConfig {
    pub fn effective_critical_recovery_weeks(&self) -> u32 {
        self.critical_recovery_weeks
            .unwrap_or(DEFAULT_CRITICAL_RECOVERY_WEEKS)
    }

    pub fn effective_high_recovery_weeks(&self) -> u32 {
        self.high_recovery_weeks.unwrap_or(DEFAULT_HIGH_RECOVERY_WEEKS)
    }

    pub fn effective_baseline_recovery_weeks(&self) -> u32 {
        self.baseline_recovery_weeks
            .unwrap_or(DEFAULT_BASELINE_RECOVERY_WEEKS)
    }
}
