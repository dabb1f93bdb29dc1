//! # ScholarX Core
//!
//! Core library for the ScholarX search and teammate-matching engine.
//!
//! This crate provides the data structures every other crate builds on:
//!
//! - [`SearchableEntity`] - Tagged project / study group / profile record
//! - [`EntityId`], [`SkillId`] - Opaque backend identifiers
//! - [`Keyword`] and [`tokenize`] - Query tokenization
//! - [`normalize`] - One adapter per entity kind for raw backend JSON
//! - [`WorkingSet`] - The already-fetched in-memory collection
//!
//! ## Example
//!
//! ```rust
//! use scholarx_core::{tokenize, WorkingSet, EntityKind};
//! use serde_json::json;
//!
//! let set = WorkingSet::from_json(&json!({
//!     "projects": [{"project_id": 1, "title": "Campus Navigator"}]
//! })).unwrap();
//!
//! assert_eq!(set.entities(EntityKind::Project).len(), 1);
//! assert_eq!(tokenize("  Campus NAV ").len(), 2);
//! ```

pub mod entity;
pub mod error;
pub mod id;
pub mod normalize;
pub mod tokenizer;
pub mod working_set;

pub use entity::{AvailabilitySlot, EntityKind, Profile, Project, SearchableEntity, SkillRef, StudyGroup};
pub use error::{Error, Result};
pub use id::{EntityId, SkillId};
pub use tokenizer::{tokenize, tokenize_value, Keyword};
pub use working_set::WorkingSet;
