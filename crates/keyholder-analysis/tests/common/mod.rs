//! Shared fixtures for keyholder-analysis integration tests.

#![allow(dead_code)]

use keyholder_core::traits::JsonSnapshotSource;
use keyholder_core::types::{
    KnowledgeArea, KnowledgeLevel, Module, Person, RiskLevel, Snapshot,
};

const ORG_SNAPSHOT: &str = include_str!("../../../../test-fixtures/org_snapshot.json");

/// Five people, six modules, twelve links.
pub fn org_snapshot() -> Snapshot {
    let source = JsonSnapshotSource::from_json(ORG_SNAPSHOT).unwrap();
    Snapshot::from_source(&source).unwrap()
}

pub fn area(module: &str, level: KnowledgeLevel, is_only_owner: bool) -> KnowledgeArea {
    KnowledgeArea {
        module: module.to_string(),
        level,
        is_only_owner,
    }
}

pub fn person(id: &str, name: &str, risk_score: u8, areas: Vec<KnowledgeArea>) -> Person {
    Person {
        id: id.into(),
        name: name.to_string(),
        role: "Engineer".to_string(),
        avatar: String::new(),
        risk_score,
        knowledge_areas: areas,
        last_active: "today".to_string(),
    }
}

pub fn module(id: &str, name: &str, bus_factor: u32, risk_level: RiskLevel) -> Module {
    Module {
        id: id.into(),
        name: name.to_string(),
        bus_factor,
        risk_level,
        owners: Vec::new(),
        last_activity: "today".to_string(),
        concentration: 50,
        description: String::new(),
    }
}

/// `count` modules named `Module {i}` with ids `m{i}`.
pub fn modules(count: usize) -> Vec<Module> {
    (0..count)
        .map(|i| module(&format!("m{i}"), &format!("Module {i}"), 2, RiskLevel::Warning))
        .collect()
}
