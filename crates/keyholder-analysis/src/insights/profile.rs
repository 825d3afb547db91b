//! Detail views for one person or one module.

use keyholder_core::types::{KnowledgeArea, Module, Person, RiskLevel, Snapshot};
use serde::Serialize;

use super::graph::{KnowledgeGraph, LinkEdge};
use crate::classifier::{
    classify_module_by_bus_factor, classify_module_by_concentration, classify_person_impact,
    PersonImpact,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonProfile<'a> {
    pub person: &'a Person,
    pub impact: PersonImpact,
    /// Modules listing this person among their owners, in snapshot order.
    pub owned_modules: Vec<&'a Module>,
    pub sole_owned_areas: Vec<&'a KnowledgeArea>,
    pub links: Vec<LinkEdge>,
}

impl<'a> PersonProfile<'a> {
    pub fn build(snapshot: &'a Snapshot, graph: &KnowledgeGraph, person_id: &str) -> Option<Self> {
        let person = snapshot.person(person_id)?;
        Some(Self {
            person,
            impact: classify_person_impact(person.risk_score),
            owned_modules: snapshot
                .modules()
                .iter()
                .filter(|m| m.has_owner(person_id))
                .collect(),
            sole_owned_areas: person.sole_owned_areas().collect(),
            links: graph.links_from_person(person_id),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProfile<'a> {
    pub module: &'a Module,
    pub bus_factor_tier: RiskLevel,
    pub concentration_tier: RiskLevel,
    /// Owner ids that resolve to a person; unknown ids are dropped.
    pub owners: Vec<&'a Person>,
    /// Incoming links, strongest first.
    pub links: Vec<LinkEdge>,
}

impl<'a> ModuleProfile<'a> {
    pub fn build(snapshot: &'a Snapshot, graph: &KnowledgeGraph, module_id: &str) -> Option<Self> {
        let module = snapshot.module(module_id)?;
        Some(Self {
            module,
            bus_factor_tier: classify_module_by_bus_factor(module.bus_factor),
            concentration_tier: classify_module_by_concentration(module.concentration),
            owners: module
                .owners
                .iter()
                .filter_map(|id| snapshot.person(id.as_str()))
                .collect(),
            links: graph.links_into_module(module_id),
        })
    }
}
