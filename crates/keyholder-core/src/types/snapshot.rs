//! Immutable point-in-time snapshot of people, modules and links.

use crate::constants::{
    CONCENTRATION_MAX, LINK_STRENGTH_MAX, LINK_STRENGTH_MIN, RISK_SCORE_MAX, RISK_SCORE_MIN,
};
use crate::errors::SnapshotError;
use crate::traits::SnapshotSource;

use super::collections::FxHashMap;
use super::entities::{DependencyLink, Module, Person};
use super::identifiers::{ModuleId, PersonId};

/// Read-only collection of entities produced by one scan.
///
/// Built once through [`Snapshot::new`] (which validates the data) and never
/// mutated afterwards. A new scan produces a new `Snapshot`.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    people: Vec<Person>,
    modules: Vec<Module>,
    links: Vec<DependencyLink>,
    person_index: FxHashMap<PersonId, usize>,
    module_index: FxHashMap<ModuleId, usize>,
    /// Module name → first module carrying that name.
    module_name_index: FxHashMap<String, usize>,
}

impl Snapshot {
    /// Build and validate a snapshot.
    ///
    /// Rejects duplicate ids and out-of-range scores. Knowledge areas that
    /// name no module and links with unknown endpoints are tolerated.
    pub fn new(
        people: Vec<Person>,
        modules: Vec<Module>,
        links: Vec<DependencyLink>,
    ) -> Result<Self, SnapshotError> {
        let mut person_index = FxHashMap::default();
        for (idx, person) in people.iter().enumerate() {
            if !(RISK_SCORE_MIN..=RISK_SCORE_MAX).contains(&person.risk_score) {
                return Err(SnapshotError::RiskScoreOutOfRange {
                    person_id: person.id.to_string(),
                    value: person.risk_score,
                });
            }
            if person_index.insert(person.id.clone(), idx).is_some() {
                return Err(SnapshotError::DuplicatePersonId {
                    id: person.id.to_string(),
                });
            }
        }

        let mut module_index = FxHashMap::default();
        let mut module_name_index = FxHashMap::default();
        for (idx, module) in modules.iter().enumerate() {
            if module.concentration > CONCENTRATION_MAX {
                return Err(SnapshotError::ConcentrationOutOfRange {
                    module_id: module.id.to_string(),
                    value: module.concentration,
                });
            }
            if module_index.insert(module.id.clone(), idx).is_some() {
                return Err(SnapshotError::DuplicateModuleId {
                    id: module.id.to_string(),
                });
            }
            module_name_index.entry(module.name.clone()).or_insert(idx);
        }

        for link in &links {
            if !(LINK_STRENGTH_MIN..=LINK_STRENGTH_MAX).contains(&link.strength) {
                return Err(SnapshotError::StrengthOutOfRange {
                    person_id: link.source.to_string(),
                    module_id: link.target.to_string(),
                    value: link.strength,
                });
            }
            if !person_index.contains_key(&link.source) || !module_index.contains_key(&link.target)
            {
                tracing::debug!(
                    source = %link.source,
                    target = %link.target,
                    link_type = %link.link_type,
                    "link references an unknown entity"
                );
            }
        }

        for person in &people {
            for area in &person.knowledge_areas {
                if !module_name_index.contains_key(&area.module) {
                    tracing::debug!(
                        person_id = %person.id,
                        module = %area.module,
                        level = %area.level,
                        "knowledge area names no module"
                    );
                }
            }
        }

        Ok(Self {
            people,
            modules,
            links,
            person_index,
            module_index,
            module_name_index,
        })
    }

    /// Build a snapshot from the ingestion collaborator.
    pub fn from_source(source: &dyn SnapshotSource) -> Result<Self, SnapshotError> {
        Self::new(
            source.list_people(),
            source.list_modules(),
            source.list_links(),
        )
    }

    /// A snapshot with no entities.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn links(&self) -> &[DependencyLink] {
        &self.links
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.person_index.get(id).map(|&idx| &self.people[idx])
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.module_index.get(id).map(|&idx| &self.modules[idx])
    }

    /// Resolve a module by its display name. When two modules share a name
    /// the first in snapshot order wins.
    pub fn module_by_name(&self, name: &str) -> Option<&Module> {
        self.module_name_index.get(name).map(|&idx| &self.modules[idx])
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.modules.is_empty() && self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::entities::{KnowledgeArea, KnowledgeLevel, LinkType, RiskLevel};

    fn person(id: &str, risk_score: u8) -> Person {
        Person {
            id: id.into(),
            name: format!("Person {id}"),
            role: "Engineer".to_string(),
            avatar: String::new(),
            risk_score,
            knowledge_areas: vec![KnowledgeArea {
                module: "Billing".to_string(),
                level: KnowledgeLevel::Primary,
                is_only_owner: true,
            }],
            last_active: "today".to_string(),
        }
    }

    fn module(id: &str, name: &str, concentration: u8) -> Module {
        Module {
            id: id.into(),
            name: name.to_string(),
            bus_factor: 1,
            risk_level: RiskLevel::Critical,
            owners: vec!["p1".into()],
            last_activity: "today".to_string(),
            concentration,
            description: String::new(),
        }
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let snapshot = Snapshot::new(
            vec![person("p1", 5)],
            vec![module("m1", "Billing", 90)],
            vec![],
        )
        .unwrap();

        assert_eq!(snapshot.person("p1").unwrap().risk_score, 5);
        assert_eq!(snapshot.module("m1").unwrap().name, "Billing");
        assert_eq!(snapshot.module_by_name("Billing").unwrap().id.as_str(), "m1");
        assert!(snapshot.person("p2").is_none());
        assert!(snapshot.module_by_name("billing").is_none());
    }

    #[test]
    fn test_duplicate_name_resolves_to_first() {
        let snapshot = Snapshot::new(
            vec![],
            vec![module("m1", "Billing", 10), module("m2", "Billing", 20)],
            vec![],
        )
        .unwrap();
        assert_eq!(snapshot.module_by_name("Billing").unwrap().id.as_str(), "m1");
    }

    #[test]
    fn test_rejects_duplicate_person() {
        let err = Snapshot::new(vec![person("p1", 3), person("p1", 2)], vec![], vec![])
            .unwrap_err();
        assert_eq!(err, SnapshotError::DuplicatePersonId { id: "p1".into() });
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(matches!(
            Snapshot::new(vec![person("p1", 0)], vec![], vec![]),
            Err(SnapshotError::RiskScoreOutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            Snapshot::new(vec![], vec![module("m1", "Billing", 101)], vec![]),
            Err(SnapshotError::ConcentrationOutOfRange { value: 101, .. })
        ));
        let link = DependencyLink {
            source: "p1".into(),
            target: "m1".into(),
            strength: 0,
            link_type: LinkType::Owns,
        };
        assert!(matches!(
            Snapshot::new(vec![], vec![], vec![link]),
            Err(SnapshotError::StrengthOutOfRange { value: 0, .. })
        ));
    }

    #[test]
    fn test_tolerates_dangling_references() {
        let link = DependencyLink {
            source: "ghost".into(),
            target: "m9".into(),
            strength: 40,
            link_type: LinkType::Reviews,
        };
        let snapshot = Snapshot::new(vec![person("p1", 2)], vec![], vec![link]).unwrap();
        assert_eq!(snapshot.links().len(), 1);
    }
}
