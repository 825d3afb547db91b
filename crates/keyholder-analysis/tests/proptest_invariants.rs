//! Property tests: classifier totality and monotonicity, simulation
//! projection bounds, layout placement, edge weights.

mod common;

use common::{area, module, person};
use keyholder_analysis::classifier::*;
use keyholder_analysis::layout::{compute_layout, EdgeStyler, LayoutGeometry};
use keyholder_analysis::simulation::{simulate_departure, ImpactLevel};
use keyholder_core::types::{KnowledgeLevel, Module, RiskLevel, Snapshot};
use proptest::prelude::*;

proptest! {
    #[test]
    fn concentration_always_classifies(c in 0u8..=100) {
        let tier = classify_module_by_concentration(c);
        prop_assert!(RiskLevel::ALL.contains(&tier));
        prop_assert_eq!(tier, classify_module_by_concentration(c));
    }

    #[test]
    fn lower_bus_factor_is_never_healthier(bf in 0u32..50) {
        let rank = |l: RiskLevel| match l {
            RiskLevel::Critical => 0,
            RiskLevel::Warning => 1,
            RiskLevel::Healthy => 2,
        };
        prop_assert!(
            rank(classify_module_by_bus_factor(bf)) <= rank(classify_module_by_bus_factor(bf + 1))
        );
    }

    #[test]
    fn classify_saturates_large_values(value in any::<u32>()) {
        let tier = classify(ClassificationKind::Concentration, value);
        prop_assert!(matches!(tier, Tier::Module(_)));
    }

    #[test]
    fn new_bus_factor_never_exceeds_current(
        areas in prop::collection::vec((0u32..6, any::<bool>()), 1..6)
    ) {
        let modules: Vec<Module> = areas
            .iter()
            .enumerate()
            .map(|(i, (bf, _))| module(&format!("m{i}"), &format!("M{i}"), *bf, RiskLevel::Warning))
            .collect();
        let knowledge = areas
            .iter()
            .enumerate()
            .map(|(i, (_, sole))| area(&format!("M{i}"), KnowledgeLevel::Primary, *sole))
            .collect();
        let snapshot = Snapshot::new(vec![person("p1", "P", 3, knowledge)], modules, vec![]).unwrap();

        let result = simulate_departure("p1", &snapshot).unwrap();
        prop_assert_eq!(result.affected_modules.len(), areas.len());
        for (affected, (bf, sole)) in result.affected_modules.iter().zip(&areas) {
            if *sole {
                prop_assert_eq!(affected.new_bus_factor, 0);
                prop_assert_eq!(affected.impact, ImpactLevel::Critical);
            } else {
                prop_assert!(affected.new_bus_factor >= 1);
                prop_assert!(affected.new_bus_factor <= (*bf).max(1));
            }
            prop_assert!(affected.impact <= result.overall_impact);
        }

        let critical = result.count(ImpactLevel::Critical) as u32;
        let high = result.count(ImpactLevel::High) as u32;
        prop_assert_eq!(result.estimated_recovery_weeks, 8 * critical + 4 * high + 2);
    }

    #[test]
    fn every_visible_node_is_placed_once(people in 0usize..12, mods in 0usize..12) {
        let persons: Vec<_> = (0..people)
            .map(|i| person(&format!("p{i}"), "P", 3, Vec::new()))
            .collect();
        let modules: Vec<Module> = (0..mods)
            .map(|i| module(&format!("m{i}"), "M", 2, RiskLevel::Warning))
            .collect();
        let person_refs: Vec<_> = persons.iter().collect();
        let module_refs: Vec<_> = modules.iter().collect();
        let geometry = LayoutGeometry::default();

        let layout = compute_layout(&person_refs, &module_refs, &geometry);
        prop_assert_eq!(layout.len(), people + mods);
        for node in layout.people() {
            let r = node.position.distance_to(geometry.center());
            prop_assert!((r - geometry.person_radius()).abs() < 1e-9);
        }
        for node in layout.modules() {
            let r = node.position.distance_to(geometry.center());
            prop_assert!((r - geometry.module_radius()).abs() < 1e-9);
        }
        prop_assert_eq!(layout, compute_layout(&person_refs, &module_refs, &geometry));
    }

    #[test]
    fn edge_weight_is_monotonic(a in 1u8..=100, b in 1u8..=100) {
        let styler = EdgeStyler::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(styler.stroke_width(lo) <= styler.stroke_width(hi));
        prop_assert!(styler.opacity(lo) <= styler.opacity(hi));
        prop_assert!(styler.stroke_width(lo) >= 1.0);
    }
}
