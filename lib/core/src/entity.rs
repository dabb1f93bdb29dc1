//! Entity model for the search engine
//!
//! Entities are typed views over records the backend already returned.
//! The kind of every entity is fixed when it is ingested, so nothing
//! downstream needs to sniff field names to tell a project from a group.

use crate::id::{EntityId, SkillId};
use serde::{Deserialize, Serialize};

/// A skill attached to a profile, project or study group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRef {
    pub id: SkillId,
    pub name: String,
    /// Self-assessed level on a 1-5 scale, when the backend sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<u8>,
}

impl SkillRef {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<SkillId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            proficiency: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_proficiency(mut self, proficiency: u8) -> Self {
        self.proficiency = Some(proficiency);
        self
    }
}

/// A weekly time slot a user marked as available
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub day_of_week: String,
    pub start: String,
    pub end: String,
}

impl AvailabilitySlot {
    pub fn new(day_of_week: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day_of_week: day_of_week.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillRef>,
    #[serde(default)]
    pub members: Vec<EntityId>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudyGroup {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub subject_area: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Skills the group asks new members for
    #[serde(default)]
    pub skills: Vec<SkillRef>,
    #[serde(default)]
    pub members: Vec<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub id: EntityId,
    pub full_name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillRef>,
    #[serde(default)]
    pub availability: Vec<AvailabilitySlot>,
}

impl Default for EntityId {
    fn default() -> Self {
        EntityId::Integer(0)
    }
}

impl Project {
    pub fn required_skill_ids(&self) -> Vec<SkillId> {
        self.skills.iter().map(|s| s.id.clone()).collect()
    }
}

impl StudyGroup {
    pub fn required_skill_ids(&self) -> Vec<SkillId> {
        self.skills.iter().map(|s| s.id.clone()).collect()
    }
}

impl Profile {
    pub fn skill_ids(&self) -> Vec<SkillId> {
        self.skills.iter().map(|s| s.id.clone()).collect()
    }
}

/// Which kind of record an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Project,
    StudyGroup,
    Profile,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Project => write!(f, "project"),
            EntityKind::StudyGroup => write!(f, "study_group"),
            EntityKind::Profile => write!(f, "profile"),
        }
    }
}

/// Any record the keyword search runs over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchableEntity {
    Project(Project),
    StudyGroup(StudyGroup),
    Profile(Profile),
}

impl SearchableEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            SearchableEntity::Project(_) => EntityKind::Project,
            SearchableEntity::StudyGroup(_) => EntityKind::StudyGroup,
            SearchableEntity::Profile(_) => EntityKind::Profile,
        }
    }

    pub fn id(&self) -> &EntityId {
        match self {
            SearchableEntity::Project(p) => &p.id,
            SearchableEntity::StudyGroup(g) => &g.id,
            SearchableEntity::Profile(p) => &p.id,
        }
    }

    /// Title, group name or full name
    pub fn label(&self) -> &str {
        match self {
            SearchableEntity::Project(p) => &p.title,
            SearchableEntity::StudyGroup(g) => &g.name,
            SearchableEntity::Profile(p) => &p.full_name,
        }
    }

    /// Subject area and course code for groups, department for profiles
    pub fn secondary_fields(&self) -> Vec<&str> {
        match self {
            SearchableEntity::Project(_) => Vec::new(),
            SearchableEntity::StudyGroup(g) => [g.subject_area.as_deref(), g.course_code.as_deref()]
                .into_iter()
                .flatten()
                .collect(),
            SearchableEntity::Profile(p) => p.department.as_deref().into_iter().collect(),
        }
    }

    /// Topic labels for groups, skill names for projects and profiles
    pub fn topic_labels(&self) -> Vec<&str> {
        match self {
            SearchableEntity::Project(p) => p.skills.iter().map(|s| s.name.as_str()).collect(),
            SearchableEntity::StudyGroup(g) => g.topics.iter().map(String::as_str).collect(),
            SearchableEntity::Profile(p) => p.skills.iter().map(|s| s.name.as_str()).collect(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            SearchableEntity::Project(p) => p.description.as_deref(),
            SearchableEntity::StudyGroup(g) => g.description.as_deref(),
            SearchableEntity::Profile(p) => p.bio.as_deref(),
        }
    }

    /// Members for projects and groups; profiles have none
    pub fn members(&self) -> &[EntityId] {
        match self {
            SearchableEntity::Project(p) => &p.members,
            SearchableEntity::StudyGroup(g) => &g.members,
            SearchableEntity::Profile(_) => &[],
        }
    }

    pub fn as_profile(&self) -> Option<&Profile> {
        match self {
            SearchableEntity::Profile(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Project> for SearchableEntity {
    fn from(p: Project) -> Self {
        SearchableEntity::Project(p)
    }
}

impl From<StudyGroup> for SearchableEntity {
    fn from(g: StudyGroup) -> Self {
        SearchableEntity::StudyGroup(g)
    }
}

impl From<Profile> for SearchableEntity {
    fn from(p: Profile) -> Self {
        SearchableEntity::Profile(p)
    }
}
