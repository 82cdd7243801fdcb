//! # analogy
//!
//! Analogical structure mapping between two domains.
//!
//! Given a *base* list of entities (`sun`, `earth`, `gravity`, `newton`) and a
//! *target* list (`nucleus`, `electrons`, `electricity`, `faraday`), analogy
//! infers a one-to-one correspondence by comparing the relations that hold
//! between entity pairs on each side. Each step commits the two-entity
//! hypothesis whose relations line up best, as measured by a cluster-level
//! bipartite matching of relation properties.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! cargo install analogy
//! analogy                          # bundled solar system / atom demo
//! analogy --domain domain.json --json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use analogy::prelude::*;
//!
//! let domain = Domain::solar_atom().unwrap();
//! let provider = CachedProvider::new(LexicalProvider::new(domain.relation_table().unwrap()));
//! let mapper = Mapper::with_config(provider, domain.mapping_config()).unwrap();
//!
//! let result = mapper.map(&domain.base, &domain.target).unwrap();
//! assert_eq!(result.target_of("sun"), Some("nucleus"));
//! assert_eq!(result.target_of("newton"), Some("faraday"));
//! ```
//!
//! ## Crate Structure
//!
//! - [`analogy-core`](https://docs.rs/analogy-core) - Candidates, constraint filter, pair scorer, greedy mapper
//! - [`analogy-similarity`](https://docs.rs/analogy-similarity) - Relation tables, lexical similarity, clustering, caching

// Re-export core types
pub use analogy_core::{
    candidate_count, generate_candidates, filter_candidates, solve_assignment,
    CandidateMapping, CandidateScore, Clusters, Commitments, Correspondence, CostMatrix,
    Direction, DirectionScore, Entity, Error, Mapper, MappingConfig, MappingEvent,
    MappingResult, PairScorer, Property, PropertyEdge, RelationProvider, RelationRecord,
    Result, Side, StopReason,
};

// Re-export the lexical provider
pub use analogy_similarity::{
    CachedProvider, Domain, LexicalOptions, LexicalProvider, Linkage, RelationTable,
    SimilarityMethod, TableError,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CachedProvider, Domain, Entity, Error, LexicalProvider, Linkage, Mapper,
        MappingConfig, MappingEvent, MappingResult, RelationProvider, RelationTable, Result,
        SimilarityMethod, StopReason,
    };
}
