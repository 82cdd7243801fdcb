//! # Analogy Similarity
//!
//! A lexical [`RelationProvider`](analogy_core::RelationProvider) for the
//! analogy mapper.
//!
//! Relations between entities are looked up in a [`RelationTable`], relation
//! properties are compared by wording and near-duplicate properties are
//! grouped by agglomerative clustering.
//!
//! ## Features
//!
//! - **Relation tables**: JSON-loadable `from : to -> properties` lookup
//! - **String similarity**: character trigrams, token Jaccard or exact match
//! - **Clustering**: average, single or complete linkage at a distance threshold
//! - **Domain files**: base, target, relations and config in one document
//! - **Memoization**: [`CachedProvider`] wraps any provider
//!
//! ## Example
//!
//! ```rust
//! use analogy_core::Mapper;
//! use analogy_similarity::{CachedProvider, LexicalProvider, RelationTable};
//!
//! let table = RelationTable::new()
//!     .with("earth", "sun", ["revolves around"])
//!     .with("electrons", "nucleus", ["revolve around"]);
//!
//! let mapper = Mapper::new(CachedProvider::new(LexicalProvider::new(table)));
//! let base = vec!["earth".to_string(), "sun".to_string()];
//! let target = vec!["electrons".to_string(), "nucleus".to_string()];
//!
//! let result = mapper.map(&base, &target).unwrap();
//! assert_eq!(result.target_of("earth"), Some("electrons"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Domain    │────>│    Table    │────>│   Lexical   │
//! │   (JSON)    │     │ (relations) │     │  Provider   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                     ┌─────────────┐            │
//!                     │  Distance   │<───────────┤
//!                     │  Cluster    │            │
//!                     └─────────────┘     ┌─────────────┐
//!                                         │   Cached    │
//!                                         │  Provider   │
//!                                         └─────────────┘
//! ```

pub mod cache;
pub mod cluster;
pub mod distance;
pub mod domain;
pub mod lexical;
pub mod table;

pub use cache::{CacheStats, CachedProvider};
pub use cluster::{agglomerative, Linkage};
pub use distance::{text_similarity, SimilarityMethod};
pub use domain::Domain;
pub use lexical::{LexicalOptions, LexicalProvider};
pub use table::{RelationEntry, RelationTable, TableError};
