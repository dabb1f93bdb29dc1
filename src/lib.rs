//! # ScholarX
//!
//! Keyword search and skill compatibility ranking over an in-memory working
//! set of projects, study groups and student profiles.
//!
//! ## Quick Start
//!
//! ### From the Command Line
//!
//! ```bash
//! scholarx --data working_set.json search --kind projects --query "web rust"
//! scholarx --data working_set.json teammates --project 12
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use scholarx::prelude::*;
//! use serde_json::json;
//!
//! let set = WorkingSet::from_json(&json!({
//!     "projects": [
//!         {"project_id": 1, "title": "Campus Navigator", "skills": [{"skill_id": 1, "skill_name": "Rust"}]}
//!     ],
//!     "profiles": [
//!         {"usn": "1RV21CS001", "full_name": "Asha Rao", "skills": [{"skill_id": 1, "skill_name": "Rust"}]}
//!     ]
//! }))
//! .unwrap();
//!
//! // Keyword search keeps the working-set order
//! let results = search(set.entities(EntityKind::Project), "campus");
//! assert_eq!(results.len(), 1);
//!
//! // Teammates ranked by skill coverage
//! let project = set.project(&EntityId::from(1u64)).unwrap();
//! let ranked = TeammateQuery::for_project(project).rank(set.entities(EntityKind::Profile));
//! assert_eq!(ranked[0].compatibility, CompatibilityScore::Percent(100));
//! ```
//!
//! ## Crate Structure
//!
//! ScholarX is composed of several crates:
//!
//! - `scholarx-core` - Entity model, identifiers, tokenizer, ingestion adapters, working set
//! - `scholarx-search` - Field weights, field scorer, entity matcher, keyword search, explain output
//! - `scholarx-similarity` - Compatibility scorer, compatibility ranker, availability, teammate query
//!
//! ## Features
//!
//! - **Weighted Fields**: Label, secondary, topic and description fields carry different weights
//! - **Exact Beats Partial**: A keyword equal to a whole field scores twice a substring hit
//! - **Lenient Filtering**: Half of the query keywords must appear somewhere in the entity
//! - **Compatibility**: Whole-percent skill coverage with a stable descending rank

// Re-export core types
pub use scholarx_core::{
    tokenize, tokenize_value,
    AvailabilitySlot, EntityId, EntityKind, Keyword, Profile, Project,
    SearchableEntity, SkillId, SkillRef, StudyGroup, WorkingSet,
    Error, Result,
};

// Re-export search
pub use scholarx_search::{
    filter_matches, matches, score_field, search, search_value, try_search_value,
    ExplainedMatch, FieldRole, MatchResult, SearchResponse, SearchStats,
};

// Re-export similarity
pub use scholarx_similarity::{
    availability_overlap, compatibility, compatibility_from_values, mean_overlap,
    rank_by_compatibility, CompatibilityScore, RankedCandidate, TeammateQuery, DEFAULT_LIMIT,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        tokenize,
        EntityId, EntityKind, Keyword, SearchableEntity, SkillId, SkillRef, WorkingSet,
        search, matches, MatchResult, SearchResponse,
        compatibility, rank_by_compatibility, CompatibilityScore, TeammateQuery,
        Error, Result,
    };
}

/// Ingestion adapters for raw backend records
pub mod normalize {
    pub use scholarx_core::normalize::{entity, profile, project, skill, study_group};
}
