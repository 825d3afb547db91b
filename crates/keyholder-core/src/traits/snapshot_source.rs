//! Snapshot source: the read side of the data-ingestion collaborator.

use serde::{Deserialize, Serialize};

use crate::errors::SnapshotError;
use crate::types::{DependencyLink, Module, Person};

/// Supplies the entities of one scan. Implementations return owned,
/// immutable collections; the engine never writes back.
pub trait SnapshotSource {
    fn list_people(&self) -> Vec<Person>;
    fn list_modules(&self) -> Vec<Module>;
    fn list_links(&self) -> Vec<DependencyLink>;
}

/// JSON document with `people`, `modules` and `links` arrays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonSnapshotSource {
    pub people: Vec<Person>,
    pub modules: Vec<Module>,
    pub links: Vec<DependencyLink>,
}

impl JsonSnapshotSource {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::ParseError {
            message: e.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::ParseError {
            message: e.to_string(),
        })
    }
}

impl SnapshotSource for JsonSnapshotSource {
    fn list_people(&self) -> Vec<Person> {
        self.people.clone()
    }

    fn list_modules(&self) -> Vec<Module> {
        self.modules.clone()
    }

    fn list_links(&self) -> Vec<DependencyLink> {
        self.links.clone()
    }
}
