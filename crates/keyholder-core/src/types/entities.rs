//! Snapshot entities: people, modules, knowledge areas, dependency links.
//!
//! Field names serialize in camelCase so scan output from the ingestion
//! collaborator deserializes without a translation layer.

use serde::{Deserialize, Serialize};

use super::identifiers::{ModuleId, PersonId};

/// Snapshot-supplied module risk tier. Also the output scale of the
/// module classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    Warning,
    Healthy,
}

impl RiskLevel {
    pub const ALL: &'static [RiskLevel] = &[Self::Critical, Self::Warning, Self::Healthy];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Healthy => "healthy",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How deeply a person knows a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeLevel {
    Primary,
    Secondary,
    Reviewer,
}

impl KnowledgeLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Reviewer => "reviewer",
        }
    }
}

impl std::fmt::Display for KnowledgeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of relationship a dependency link represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Owns,
    Reviews,
    Contributes,
}

impl LinkType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Owns => "owns",
            Self::Reviews => "reviews",
            Self::Contributes => "contributes",
        }
    }
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A person's knowledge of one module, referenced by module name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeArea {
    /// Module name, matched against `Module::name`.
    pub module: String,
    pub level: KnowledgeLevel,
    /// True iff no other person currently owns the module.
    pub is_only_owner: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub role: String,
    /// Initials shown on graph nodes.
    #[serde(default)]
    pub avatar: String,
    /// 1-5, higher means more of the organization depends on this person.
    pub risk_score: u8,
    pub knowledge_areas: Vec<KnowledgeArea>,
    /// Opaque label supplied by the scan.
    pub last_active: String,
}

impl Person {
    /// Knowledge areas where this person is the only owner.
    pub fn sole_owned_areas(&self) -> impl Iterator<Item = &KnowledgeArea> {
        self.knowledge_areas.iter().filter(|a| a.is_only_owner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    /// Number of people who can maintain the module without outside help.
    pub bus_factor: u32,
    pub risk_level: RiskLevel,
    pub owners: Vec<PersonId>,
    pub last_activity: String,
    /// Percent of recent activity attributable to the top contributor.
    pub concentration: u8,
    pub description: String,
}

impl Module {
    pub fn has_owner(&self, person_id: &str) -> bool {
        self.owners.iter().any(|o| o.as_str() == person_id)
    }
}

/// A weighted person → module relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyLink {
    pub source: PersonId,
    pub target: ModuleId,
    /// 1-100.
    pub strength: u8,
    #[serde(rename = "type")]
    pub link_type: LinkType,
}
