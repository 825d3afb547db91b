//! Visible-set selection for the dependency graph.

use keyholder_core::types::{Module, Person, RiskLevel, Snapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskFilter {
    #[default]
    All,
    Critical,
    Warning,
    Healthy,
}

impl RiskFilter {
    pub fn matches(&self, level: RiskLevel) -> bool {
        match self {
            Self::All => true,
            Self::Critical => level == RiskLevel::Critical,
            Self::Warning => level == RiskLevel::Warning,
            Self::Healthy => level == RiskLevel::Healthy,
        }
    }
}

/// Risk-level filter on modules plus a case-insensitive name search on both
/// people and modules. The query is matched as typed; only an empty query
/// disables the search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityFilter {
    pub risk: RiskFilter,
    pub search: Option<String>,
}

/// Entities that survive a filter, in snapshot order.
#[derive(Debug, Clone, Default)]
pub struct VisibleSet<'a> {
    pub people: Vec<&'a Person>,
    pub modules: Vec<&'a Module>,
}

impl VisibleSet<'_> {
    pub fn contains_person(&self, id: &str) -> bool {
        self.people.iter().any(|p| p.id.as_str() == id)
    }

    pub fn contains_module(&self, id: &str) -> bool {
        self.modules.iter().any(|m| m.id.as_str() == id)
    }
}

impl VisibilityFilter {
    pub fn new(risk: RiskFilter, search: Option<&str>) -> Self {
        Self {
            risk,
            search: search.map(str::to_string),
        }
    }

    pub fn apply<'a>(&self, snapshot: &'a Snapshot) -> VisibleSet<'a> {
        let needle = self.needle();
        let matches = |text: &str| {
            needle
                .as_deref()
                .map_or(true, |n| text.to_lowercase().contains(n))
        };

        VisibleSet {
            people: snapshot.people().iter().filter(|p| matches(&p.name)).collect(),
            modules: snapshot
                .modules()
                .iter()
                .filter(|m| self.risk.matches(m.risk_level) && matches(&m.name))
                .collect(),
        }
    }

    /// Lowercased search text; `None` when empty.
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}
