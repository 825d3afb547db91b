//! Departure impact simulation.

use keyholder_core::config::SimulationConfig;
use keyholder_core::errors::SimulationError;
use keyholder_core::types::Snapshot;
use tracing::debug;

use super::mitigations::plan_mitigations;
use super::types::{AffectedModule, ImpactLevel, SimulationResult};

/// Projects the effect of one person leaving. Holds only configuration;
/// every call is a pure read of the snapshot.
#[derive(Debug, Clone, Default)]
pub struct DepartureSimulator {
    config: SimulationConfig,
}

impl DepartureSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Simulate `person_id` leaving.
    ///
    /// Knowledge areas naming no module are skipped. The stored bus factor
    /// is taken as ground truth; only the delta is projected.
    pub fn simulate(
        &self,
        person_id: &str,
        snapshot: &Snapshot,
    ) -> Result<SimulationResult, SimulationError> {
        let person = snapshot
            .person(person_id)
            .ok_or_else(|| SimulationError::PersonNotFound {
                person_id: person_id.to_string(),
            })?;

        let mut affected_modules = Vec::with_capacity(person.knowledge_areas.len());
        for area in &person.knowledge_areas {
            let Some(module) = snapshot.module_by_name(&area.module) else {
                debug!(person_id, module = %area.module, "skipping unresolved knowledge area");
                continue;
            };

            let new_bus_factor = if area.is_only_owner {
                0
            } else {
                module.bus_factor.saturating_sub(1).max(1)
            };

            affected_modules.push(AffectedModule {
                module_id: module.id.clone(),
                module_name: module.name.clone(),
                current_bus_factor: module.bus_factor,
                new_bus_factor,
                impact: ImpactLevel::for_module(area.is_only_owner, new_bus_factor),
            });
        }

        let critical = count(&affected_modules, ImpactLevel::Critical);
        let high = count(&affected_modules, ImpactLevel::High);

        let overall_impact = ImpactLevel::aggregate(affected_modules.iter().map(|m| m.impact));
        let estimated_recovery_weeks = self.recovery_weeks(critical, high);

        debug!(
            person_id,
            affected = affected_modules.len(),
            critical,
            high,
            %overall_impact,
            estimated_recovery_weeks,
            "departure simulated"
        );

        Ok(SimulationResult {
            person_id: person.id.clone(),
            affected_modules,
            estimated_recovery_weeks,
            overall_impact,
            mitigations: plan_mitigations(critical, high),
        })
    }

    /// `critical_weeks * critical + high_weeks * high + baseline`.
    pub fn recovery_weeks(&self, critical: usize, high: usize) -> u32 {
        let critical = u32::try_from(critical).unwrap_or(u32::MAX);
        let high = u32::try_from(high).unwrap_or(u32::MAX);
        self.config
            .effective_critical_recovery_weeks()
            .saturating_mul(critical)
            .saturating_add(self.config.effective_high_recovery_weeks().saturating_mul(high))
            .saturating_add(self.config.effective_baseline_recovery_weeks())
    }
}

/// Simulate with the default recovery weights (8 / 4 / 2).
pub fn simulate_departure(
    person_id: &str,
    snapshot: &Snapshot,
) -> Result<SimulationResult, SimulationError> {
    DepartureSimulator::default().simulate(person_id, snapshot)
}

fn count(modules: &[AffectedModule], impact: ImpactLevel) -> usize {
    modules.iter().filter(|m| m.impact == impact).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyholder_core::types::{KnowledgeArea, KnowledgeLevel, Module, Person, RiskLevel};

    fn area(module: &str, is_only_owner: bool) -> KnowledgeArea {
        KnowledgeArea {
            module: module.to_string(),
            level: KnowledgeLevel::Primary,
            is_only_owner,
        }
    }

    fn module(id: &str, name: &str, bus_factor: u32) -> Module {
        Module {
            id: id.into(),
            name: name.to_string(),
            bus_factor,
            risk_level: RiskLevel::Warning,
            owners: vec!["p1".into()],
            last_activity: "today".to_string(),
            concentration: 50,
            description: String::new(),
        }
    }

    fn snapshot(areas: Vec<KnowledgeArea>, modules: Vec<Module>) -> Snapshot {
        let person = Person {
            id: "p1".into(),
            name: "Sam".to_string(),
            role: "Engineer".to_string(),
            avatar: "S".to_string(),
            risk_score: 4,
            knowledge_areas: areas,
            last_active: "today".to_string(),
        };
        Snapshot::new(vec![person], modules, vec![]).unwrap()
    }

    #[test]
    fn test_new_bus_factor_floor_is_one_for_shared_modules() {
        let snap = snapshot(
            vec![area("A", false), area("B", false), area("C", false)],
            vec![module("m1", "A", 0), module("m2", "B", 1), module("m3", "C", 5)],
        );
        let result = simulate_departure("p1", &snap).unwrap();
        let new: Vec<u32> = result.affected_modules.iter().map(|m| m.new_bus_factor).collect();
        assert_eq!(new, vec![1, 1, 4]);
        assert_eq!(result.overall_impact, ImpactLevel::High);
    }

    #[test]
    fn test_unresolved_area_is_skipped() {
        let snap = snapshot(
            vec![area("Ghost", true), area("A", false)],
            vec![module("m1", "A", 3)],
        );
        let result = simulate_departure("p1", &snap).unwrap();
        assert_eq!(result.affected_modules.len(), 1);
        assert_eq!(result.affected_modules[0].impact, ImpactLevel::Medium);
        assert_eq!(result.overall_impact, ImpactLevel::Medium);
        assert_eq!(result.estimated_recovery_weeks, 2);
    }

    #[test]
    fn test_custom_weights() {
        let simulator = DepartureSimulator::new(SimulationConfig {
            critical_recovery_weeks: Some(10),
            high_recovery_weeks: Some(5),
            baseline_recovery_weeks: Some(1),
        });
        assert_eq!(simulator.recovery_weeks(2, 1), 26);
        assert_eq!(simulator.recovery_weeks(0, 0), 1);
    }

    #[test]
    fn test_recovery_weeks_saturates() {
        let simulator = DepartureSimulator::default();
        assert_eq!(simulator.recovery_weeks(usize::MAX, 0), u32::MAX);
    }
}
