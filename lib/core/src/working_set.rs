//! The in-memory working set
//!
//! Holds whatever the page already fetched: projects, study groups and
//! profiles, each normalized once on the way in.

use crate::entity::{EntityKind, Profile, Project, SearchableEntity, StudyGroup};
use crate::id::EntityId;
use crate::normalize;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Already-fetched entities, grouped by kind, in backend order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkingSet {
    pub projects: Vec<SearchableEntity>,
    pub groups: Vec<SearchableEntity>,
    pub profiles: Vec<SearchableEntity>,
}

impl WorkingSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a working set from a backend dump.
    ///
    /// Expects an object with optional `projects`, `study_groups` (or
    /// `groups`) and `profiles` arrays. Records an adapter rejects are
    /// logged and skipped.
    pub fn from_json(document: &Value) -> Result<Self> {
        if !document.is_object() {
            return Err(Error::InvalidInput(
                "working set document must be a JSON object".to_string(),
            ));
        }

        let mut set = Self::new();
        set.projects = ingest(document, &["projects"], EntityKind::Project);
        set.groups = ingest(document, &["study_groups", "groups"], EntityKind::StudyGroup);
        set.profiles = ingest(document, &["profiles"], EntityKind::Profile);

        debug!(
            "Working set loaded: {} projects, {} groups, {} profiles",
            set.projects.len(),
            set.groups.len(),
            set.profiles.len()
        );
        Ok(set)
    }

    /// Read and normalize a JSON dump from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let document: Value = serde_json::from_str(&raw)?;
        Self::from_json(&document)
    }

    pub fn push(&mut self, entity: impl Into<SearchableEntity>) {
        let entity = entity.into();
        match entity.kind() {
            EntityKind::Project => self.projects.push(entity),
            EntityKind::StudyGroup => self.groups.push(entity),
            EntityKind::Profile => self.profiles.push(entity),
        }
    }

    /// All entities of one kind, in input order
    pub fn entities(&self, kind: EntityKind) -> &[SearchableEntity] {
        match kind {
            EntityKind::Project => &self.projects,
            EntityKind::StudyGroup => &self.groups,
            EntityKind::Profile => &self.profiles,
        }
    }

    pub fn project(&self, id: &EntityId) -> Option<&Project> {
        self.projects.iter().find_map(|e| match e {
            SearchableEntity::Project(p) if &p.id == id => Some(p),
            _ => None,
        })
    }

    pub fn group(&self, id: &EntityId) -> Option<&StudyGroup> {
        self.groups.iter().find_map(|e| match e {
            SearchableEntity::StudyGroup(g) if &g.id == id => Some(g),
            _ => None,
        })
    }

    pub fn profile(&self, id: &EntityId) -> Option<&Profile> {
        self.profiles.iter().find_map(|e| match e {
            SearchableEntity::Profile(p) if &p.id == id => Some(p),
            _ => None,
        })
    }

    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter().filter_map(SearchableEntity::as_profile)
    }

    pub fn len(&self) -> usize {
        self.projects.len() + self.groups.len() + self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn ingest(document: &Value, keys: &[&str], kind: EntityKind) -> Vec<SearchableEntity> {
    let Some(records) = keys.iter().find_map(|key| document.get(*key)) else {
        return Vec::new();
    };
    let Some(records) = records.as_array() else {
        warn!("Ignoring {} list: expected an array", kind);
        return Vec::new();
    };

    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match normalize::entity(kind, record) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!("Skipping {} record #{}: {}", kind, index, e);
                None
            }
        })
        .collect()
}
