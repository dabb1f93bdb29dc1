//! Teammate search
//!
//! Ranks profiles as potential teammates for a project or study group.
//! A query owns its snapshot of required skills and excluded members, so
//! nothing is read from shared state while ranking.

use crate::availability::mean_overlap;
use crate::compatibility::{profile_compatibility, CompatibilityScore};
use crate::rank::{rank_by_compatibility, Compatible};
use ahash::AHashSet;
use scholarx_core::{EntityId, Keyword, Profile, Project, SearchableEntity, SkillId, SkillRef, StudyGroup};
use scholarx_search::matches;
use serde::Serialize;
use tracing::debug;

/// Most matched skills reported per candidate
pub const MAX_MATCHED_SKILLS: usize = 5;

/// Result cap the CLI applies when none is given
pub const DEFAULT_LIMIT: usize = 20;

/// A profile scored against a teammate query
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate<'a> {
    pub profile: &'a Profile,
    pub compatibility: CompatibilityScore,
    /// Candidate's skills that the target requires, with proficiency
    pub matched_skills: Vec<&'a SkillRef>,
    /// Mean availability overlap with the current members, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_overlap: Option<f64>,
}

impl Compatible for RankedCandidate<'_> {
    fn compatibility(&self) -> CompatibilityScore {
        self.compatibility
    }
}

/// Teammate query builder
#[derive(Debug, Clone, Default)]
pub struct TeammateQuery<'a> {
    required: Vec<SkillId>,
    excluded: AHashSet<EntityId>,
    keywords: Vec<Keyword>,
    members: Option<Vec<&'a Profile>>,
    selected: Vec<SkillId>,
    limit: Option<usize>,
}

impl<'a> TeammateQuery<'a> {
    pub fn new(required: Vec<SkillId>) -> Self {
        Self {
            required,
            ..Default::default()
        }
    }

    /// Query for a project: its skills are required and its members excluded
    pub fn for_project(project: &Project) -> Self {
        Self::new(project.required_skill_ids()).exclude(project.members.iter().cloned())
    }

    /// Query for a study group: its skills are required and its members excluded
    pub fn for_group(group: &StudyGroup) -> Self {
        Self::new(group.required_skill_ids()).exclude(group.members.iter().cloned())
    }

    #[must_use]
    pub fn exclude(mut self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.excluded.extend(ids);
        self
    }

    /// Only keep candidates that pass the keyword filter
    #[must_use]
    pub fn with_keywords(mut self, keywords: Vec<Keyword>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Profiles of the current members, used for availability overlap
    #[must_use]
    pub fn with_members(mut self, members: impl IntoIterator<Item = &'a Profile>) -> Self {
        self.members = Some(members.into_iter().collect());
        self
    }

    /// Score against a subset of the required skills.
    ///
    /// Selected ids the target does not require are ignored; when none of
    /// them is required the full requirement list is used.
    #[must_use]
    pub fn with_selected_skills(mut self, ids: impl IntoIterator<Item = SkillId>) -> Self {
        self.selected = ids.into_iter().collect();
        self
    }

    /// Keep at most `n` candidates after ranking
    #[must_use]
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Skills candidates are scored against, in requirement order
    pub fn required(&self) -> Vec<SkillId> {
        if self.selected.is_empty() {
            return self.required.clone();
        }

        let selected: AHashSet<&SkillId> = self.selected.iter().collect();
        let narrowed: Vec<SkillId> = self
            .required
            .iter()
            .filter(|id| selected.contains(id))
            .cloned()
            .collect();

        if narrowed.is_empty() {
            debug!("No selected skill is required, scoring against all {}", self.required.len());
            self.required.clone()
        } else {
            narrowed
        }
    }

    /// Score and rank candidate profiles.
    ///
    /// Entities that are not profiles are ignored.
    pub fn rank<I>(&self, entities: I) -> Vec<RankedCandidate<'a>>
    where
        I: IntoIterator<Item = &'a SearchableEntity>,
    {
        let required_ids = self.required();
        let required: AHashSet<&SkillId> = required_ids.iter().collect();
        let mut considered = 0usize;

        let candidates: Vec<RankedCandidate<'a>> = entities
            .into_iter()
            .filter_map(|entity| entity.as_profile().map(|profile| (entity, profile)))
            .filter(|(_, profile)| !self.excluded.contains(&profile.id))
            .inspect(|_| considered += 1)
            .filter(|(entity, _)| self.keywords.is_empty() || matches(entity, &self.keywords).is_match())
            .map(|(_, profile)| RankedCandidate {
                profile,
                compatibility: profile_compatibility(profile, &required_ids),
                matched_skills: matched_skills(profile, &required),
                availability_overlap: self
                    .members
                    .as_ref()
                    .map(|members| mean_overlap(profile, members.iter().copied())),
            })
            .collect();

        debug!(
            "Teammate search: {} required skills, {} candidates, {} after keyword filter",
            required_ids.len(),
            considered,
            candidates.len()
        );

        let mut ranked = rank_by_compatibility(candidates);
        if let Some(limit) = self.limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

/// Required skills the profile has, one per skill id
fn matched_skills<'a>(profile: &'a Profile, required: &AHashSet<&SkillId>) -> Vec<&'a SkillRef> {
    let mut seen = AHashSet::new();
    profile
        .skills
        .iter()
        .filter(|skill| required.contains(&skill.id) && seen.insert(&skill.id))
        .take(MAX_MATCHED_SKILLS)
        .collect()
}
