//! Stable sorts and people search for list views.

use std::cmp::Ordering;

use keyholder_core::types::{Module, Person};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleSort {
    #[default]
    Name,
    BusFactor,
    Concentration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonSort {
    #[default]
    Name,
    RiskScore,
}

pub fn sort_modules(modules: &mut [&Module], key: ModuleSort, order: SortOrder) {
    modules.sort_by(|a, b| {
        let ordering = match key {
            ModuleSort::Name => a.name.cmp(&b.name),
            ModuleSort::BusFactor => a.bus_factor.cmp(&b.bus_factor),
            ModuleSort::Concentration => a.concentration.cmp(&b.concentration),
        };
        order.apply(ordering)
    });
}

pub fn sort_people(people: &mut [&Person], key: PersonSort, order: SortOrder) {
    people.sort_by(|a, b| {
        let ordering = match key {
            PersonSort::Name => a.name.cmp(&b.name),
            PersonSort::RiskScore => a.risk_score.cmp(&b.risk_score),
        };
        order.apply(ordering)
    });
}

/// People whose name or role contains `query`, case-insensitively.
/// An empty query returns everyone.
pub fn search_people<'a>(people: &'a [Person], query: &str) -> Vec<&'a Person> {
    if query.is_empty() {
        return people.iter().collect();
    }
    let needle = query.to_lowercase();
    people
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.role.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Modules whose name or description contains `query`, case-insensitively.
/// An empty query returns every module.
pub fn search_modules<'a>(modules: &'a [Module], query: &str) -> Vec<&'a Module> {
    if query.is_empty() {
        return modules.iter().collect();
    }
    let needle = query.to_lowercase();
    modules
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&needle)
                || m.description.to_lowercase().contains(&needle)
        })
        .collect()
}
