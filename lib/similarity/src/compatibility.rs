//! Skill compatibility scorer
//!
//! Compatibility is the share of a target's required skills that a
//! candidate has, as a whole percentage. Skills are compared by id only;
//! names play no part.

use ahash::AHashSet;
use scholarx_core::{Error, Profile, Result, SkillId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::cmp::Ordering;

/// Percentage of required skills covered, or `NotApplicable` when the
/// target requires nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompatibilityScore {
    /// 0 to 100 inclusive
    Percent(u8),
    NotApplicable,
}

impl CompatibilityScore {
    #[inline]
    pub fn percent(self) -> Option<u8> {
        match self {
            CompatibilityScore::Percent(p) => Some(p),
            CompatibilityScore::NotApplicable => None,
        }
    }

    #[inline]
    pub fn is_applicable(self) -> bool {
        matches!(self, CompatibilityScore::Percent(_))
    }

    /// Sort key: the percentage, or -1 so that unscored entries go last
    #[inline]
    pub fn rank_value(self) -> i16 {
        match self {
            CompatibilityScore::Percent(p) => i16::from(p),
            CompatibilityScore::NotApplicable => -1,
        }
    }
}

impl PartialOrd for CompatibilityScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CompatibilityScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_value().cmp(&other.rank_value())
    }
}

impl std::fmt::Display for CompatibilityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompatibilityScore::Percent(p) => write!(f, "{}%", p),
            CompatibilityScore::NotApplicable => f.write_str("—"),
        }
    }
}

impl Serialize for CompatibilityScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.percent().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CompatibilityScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Option::<u8>::deserialize(deserializer)? {
            Some(p) if p <= 100 => Ok(CompatibilityScore::Percent(p)),
            Some(p) => Err(serde::de::Error::custom(format!("compatibility {} is above 100", p))),
            None => Ok(CompatibilityScore::NotApplicable),
        }
    }
}

/// Round `100 * overlap / total` half-up, using integers only
#[inline]
fn rounded_percent(overlap: usize, total: usize) -> u8 {
    debug_assert!(total > 0 && overlap <= total);
    ((200 * overlap + total) / (2 * total)) as u8
}

/// Score a candidate's skills against a target's required skills.
///
/// Both sides are treated as sets, so a skill assigned twice is counted
/// once.
pub fn compatibility(candidate: &[SkillId], required: &[SkillId]) -> CompatibilityScore {
    let required: AHashSet<&SkillId> = required.iter().collect();
    if required.is_empty() {
        return CompatibilityScore::NotApplicable;
    }
    if candidate.is_empty() {
        return CompatibilityScore::Percent(0);
    }

    let candidate: AHashSet<&SkillId> = candidate.iter().collect();
    let overlap = required.intersection(&candidate).count();
    CompatibilityScore::Percent(rounded_percent(overlap, required.len()))
}

/// Compatibility of a profile against required skill ids
pub fn profile_compatibility(profile: &Profile, required: &[SkillId]) -> CompatibilityScore {
    compatibility(&profile.skill_ids(), required)
}

/// Score untyped skill id lists.
///
/// Every id must be an unsigned integer or a string; anything else is
/// rejected with `InvalidInput` instead of being coerced.
pub fn compatibility_from_values(candidate: &[Value], required: &[Value]) -> Result<CompatibilityScore> {
    let parse = |values: &[Value]| -> Result<Vec<SkillId>> {
        values.iter().map(SkillId::try_from).collect()
    };
    Ok(compatibility(&parse(candidate)?, &parse(required)?))
}

/// Convenience for callers holding a [`Result`]: logs and degrades to
/// `NotApplicable` on invalid ids
pub fn compatibility_or_unscored(candidate: &[Value], required: &[Value]) -> CompatibilityScore {
    compatibility_from_values(candidate, required).unwrap_or_else(|e: Error| {
        tracing::warn!("Compatibility left unscored: {}", e);
        CompatibilityScore::NotApplicable
    })
}
