//! # ScholarX Similarity
//!
//! Skill compatibility scoring and teammate ranking.
//!
//! This crate scores how well a profile covers the skills a project or
//! study group requires, and ranks candidate teammates by that score.
//!
//! ## Features
//!
//! - **Compatibility**: Whole-percent overlap of skill id sets, with a distinct
//!   "not applicable" value when nothing is required
//! - **Ranking**: Stable, descending by compatibility, unscored entries last
//! - **Teammate Query**: Member exclusion, optional keyword filter, selected
//!   skill subset, matched skills, availability overlap and a result cap
//!
//! ## Example
//!
//! ```rust
//! use scholarx_similarity::{compatibility, CompatibilityScore, TeammateQuery};
//! use scholarx_core::{Profile, SearchableEntity, SkillId, SkillRef};
//!
//! let required = vec![SkillId::from(1u64), SkillId::from(2u64), SkillId::from(3u64)];
//! let have = vec![SkillId::from(1u64), SkillId::from(2u64)];
//! assert_eq!(compatibility(&have, &required), CompatibilityScore::Percent(67));
//!
//! let pool: Vec<SearchableEntity> = vec![Profile {
//!     full_name: "Asha Rao".to_string(),
//!     skills: vec![SkillRef::new(1u64, "Rust")],
//!     ..Default::default()
//! }
//! .into()];
//!
//! let ranked = TeammateQuery::new(required).rank(&pool);
//! assert_eq!(ranked[0].compatibility.to_string(), "33%");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Profiles   │────>│  Keyword    │────>│   Compat.   │
//! │             │     │  filter     │     │   scorer    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                      ┌─────────────┐           │
//!                      │   Ranker    │<──────────┘
//!                      │  (stable)   │
//!                      └─────────────┘
//! ```

pub mod availability;
pub mod compatibility;
pub mod rank;
pub mod teammates;

// Re-export main types for convenience
pub use availability::{availability_overlap, mean_overlap, NEUTRAL_OVERLAP};
pub use compatibility::{
    compatibility,
    compatibility_from_values,
    compatibility_or_unscored,
    profile_compatibility,
    CompatibilityScore,
};
pub use rank::{rank_by_compatibility, Compatible};
pub use teammates::{RankedCandidate, TeammateQuery, DEFAULT_LIMIT, MAX_MATCHED_SKILLS};
