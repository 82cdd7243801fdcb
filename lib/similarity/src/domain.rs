//! Domain files: base and target entities plus the relations between them.

use analogy_core::{Entity, MappingConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::table::{RelationEntry, RelationTable, TableError};

const SOLAR_ATOM: &str = include_str!("../data/solar_atom.json");

/// A complete mapping problem as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub base: Vec<Entity>,
    pub target: Vec<Entity>,
    #[serde(default)]
    pub relations: Vec<RelationEntry>,
    /// Optional overrides of the mapping defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<MappingConfig>,
}

impl Domain {
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        debug!("Loading domain from {:?}", path.as_ref());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The solar system / atom analogy
    pub fn solar_atom() -> Result<Self, TableError> {
        Self::from_json_str(SOLAR_ATOM)
    }

    pub fn relation_table(&self) -> Result<RelationTable, TableError> {
        RelationTable::from_entries(self.relations.clone())
    }

    /// Domain config, or the defaults when the file has none
    pub fn mapping_config(&self) -> MappingConfig {
        self.config.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_domain() {
        let domain = Domain::from_json_str(r#"{"base": ["a", "b"], "target": ["x", "y"]}"#).unwrap();
        assert_eq!(domain.base, vec!["a", "b"]);
        assert!(domain.relations.is_empty());
        assert_eq!(domain.mapping_config(), MappingConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{
            "base": ["a", "b"],
            "target": ["x", "y"],
            "config": {"distance_threshold": 0.5}
        }"#;
        let config = Domain::from_json_str(json).unwrap().mapping_config();
        assert_eq!(config.distance_threshold, 0.5);
        assert_eq!(config.score_precision, analogy_core::DEFAULT_SCORE_PRECISION);
    }

    #[test]
    fn test_bundled_demo() {
        let domain = Domain::solar_atom().unwrap();
        assert_eq!(domain.base.len(), 4);
        assert_eq!(domain.target.len(), 4);

        let table = domain.relation_table().unwrap();
        assert_eq!(table.properties("faraday", "electricity"), ["discovered", "formulated the law of"]);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base": ["earth"], "target": ["electron"], "relations": [{{"from": "earth", "to": "sun", "properties": ["orbits"]}}]}}"#
        )
        .unwrap();

        let domain = Domain::from_path(file.path()).unwrap();
        assert_eq!(domain.relations.len(), 1);
        assert_eq!(domain.relation_table().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_lists_fail_to_parse() {
        assert!(matches!(
            Domain::from_json_str(r#"{"base": ["a"]}"#),
            Err(TableError::Parse(_))
        ));
    }
}
