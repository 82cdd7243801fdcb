//! Relation provider backed by a [`RelationTable`] and string similarity

use analogy_core::{Clusters, Property, RelationProvider};
use serde::{Deserialize, Serialize};

use crate::cluster::{agglomerative, Linkage};
use crate::distance::{text_similarity, SimilarityMethod};
use crate::table::RelationTable;

/// Options of a [`LexicalProvider`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalOptions {
    #[serde(default)]
    pub method: SimilarityMethod,
    #[serde(default)]
    pub linkage: Linkage,
}

/// Compares properties by their wording.
///
/// Properties come straight from the table, similarity is a
/// [`SimilarityMethod`] score and clusters are built agglomeratively with the
/// same similarity.
#[derive(Debug, Clone, Default)]
pub struct LexicalProvider {
    table: RelationTable,
    options: LexicalOptions,
}

impl LexicalProvider {
    pub fn new(table: RelationTable) -> Self {
        Self {
            table,
            options: LexicalOptions::default(),
        }
    }

    pub fn with_options(table: RelationTable, options: LexicalOptions) -> Self {
        Self { table, options }
    }

    #[must_use]
    pub fn with_method(mut self, method: SimilarityMethod) -> Self {
        self.options.method = method;
        self
    }

    #[must_use]
    pub fn with_linkage(mut self, linkage: Linkage) -> Self {
        self.options.linkage = linkage;
        self
    }

    pub fn table(&self) -> &RelationTable {
        &self.table
    }

    pub fn options(&self) -> LexicalOptions {
        self.options
    }
}

impl RelationProvider for LexicalProvider {
    fn similarity(&self, a: &str, b: &str) -> f32 {
        text_similarity(a, b, self.options.method)
    }

    fn edge_props(&self, from: &str, to: &str) -> Vec<Property> {
        self.table.properties(from, to).to_vec()
    }

    fn clustering(&self, properties: &[Property], distance_threshold: f32) -> Clusters {
        let method = self.options.method;
        agglomerative(properties, distance_threshold, self.options.linkage, |a, b| {
            text_similarity(a, b, method)
        })
    }
}
