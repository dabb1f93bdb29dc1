//! # ScholarX Search
//!
//! Weighted multi-field keyword search over projects, study groups and
//! profiles that the page has already fetched.
//!
//! ## Scoring
//!
//! Each field plays a role with a fixed weight:
//!
//! | role | fields | weight |
//! |------|--------|--------|
//! | label | title, group name, full name | 3 |
//! | secondary | subject area, course code, department | 2 |
//! | topic | each topic or skill label | 1.5 |
//! | topic word | words (> 2 chars) of a multi-word topic | 1.05 |
//! | description | description, bio | 1 |
//!
//! A keyword equal to the whole field earns twice the weight, a keyword
//! contained in the field earns it once.
//!
//! ## Example
//!
//! ```rust
//! use scholarx_core::{EntityId, Project, SearchableEntity};
//! use scholarx_search::search;
//!
//! let entities: Vec<SearchableEntity> = vec![
//!     Project { id: EntityId::Integer(1), title: "DataBase Systems".into(), ..Default::default() }.into(),
//!     Project { id: EntityId::Integer(2), title: "Robotics".into(), ..Default::default() }.into(),
//! ];
//!
//! let results = search(&entities, "database");
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].matched_keywords, 1);
//! ```
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Tokenizer  │────>│   Matcher   │────>│   Filter    │
//! │  (query)    │     │ (per field) │     │ (in order)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌──────┴──────┐
//!                                         │  Explained  │
//!                                         │   Results   │
//!                                         └─────────────┘
//! ```

pub mod weights;
pub mod field;
pub mod matcher;
pub mod rank;
pub mod explain;

// Re-export main types
pub use weights::{FieldRole, required_keyword_count};
pub use field::score_field;
pub use matcher::{matches, MatchResult};
pub use rank::{filter_matches, search, search_value, try_search_value};
pub use explain::{ExplainedMatch, SearchResponse, SearchStats};
