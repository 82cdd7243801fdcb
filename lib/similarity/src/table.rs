//! Relation tables: the known properties of ordered entity pairs.

use ahash::AHashMap;
use analogy_core::{Entity, Property};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Errors raised while loading relation tables and domain files
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Relation #{0} has an empty entity name")]
    EmptyEntity(usize),
}

/// One serialized relation: `from : to` described by `properties`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEntry {
    pub from: Entity,
    pub to: Entity,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Properties of ordered entity pairs.
///
/// Entity names are matched case-insensitively with surrounding whitespace
/// ignored. Properties keep their insertion order and are deduplicated per pair.
#[derive(Debug, Clone, Default)]
pub struct RelationTable {
    relations: AHashMap<(String, String), Vec<Property>>,
}

fn normalize(entity: &str) -> String {
    entity.trim().to_lowercase()
}

impl RelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add properties to the relation `from : to`
    pub fn insert<I, S>(&mut self, from: &str, to: &str, properties: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Property>,
    {
        let entry = self
            .relations
            .entry((normalize(from), normalize(to)))
            .or_default();
        for property in properties {
            let property: Property = property.into();
            let property = property.trim();
            if !property.is_empty() && !entry.iter().any(|p| p == property) {
                entry.push(property.to_string());
            }
        }
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with<I, S>(mut self, from: &str, to: &str, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Property>,
    {
        self.insert(from, to, properties);
        self
    }

    /// Properties of `from : to`; empty when unknown
    pub fn properties(&self, from: &str, to: &str) -> &[Property] {
        self.relations
            .get(&(normalize(from), normalize(to)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of entity pairs with at least one property
    pub fn len(&self) -> usize {
        self.relations.values().filter(|p| !p.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn from_entries(entries: Vec<RelationEntry>) -> Result<Self, TableError> {
        let mut table = Self::new();
        for (i, entry) in entries.into_iter().enumerate() {
            if entry.from.trim().is_empty() || entry.to.trim().is_empty() {
                return Err(TableError::EmptyEntity(i));
            }
            table.insert(&entry.from, &entry.to, entry.properties);
        }
        Ok(table)
    }

    /// Entries sorted by `(from, to)`
    pub fn to_entries(&self) -> Vec<RelationEntry> {
        let mut entries: Vec<RelationEntry> = self
            .relations
            .iter()
            .filter(|(_, props)| !props.is_empty())
            .map(|((from, to), props)| RelationEntry {
                from: from.clone(),
                to: to.clone(),
                properties: props.clone(),
            })
            .collect();
        entries.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        entries
    }

    /// Parse a JSON array of [`RelationEntry`]
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let entries: Vec<RelationEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        debug!("Loading relation table from {:?}", path.as_ref());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
