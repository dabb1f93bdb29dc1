//! Availability overlap
//!
//! Weekly availability slots are compared as exact `(day, start, end)`
//! triples. The overlap is informational and never affects ranking.

use ahash::AHashSet;
use scholarx_core::{AvailabilitySlot, Profile};

/// Overlap used when one side has no availability to compare
pub const NEUTRAL_OVERLAP: f64 = 0.5;

/// Shared slots divided by the size of the smaller schedule, in [0, 1]
pub fn availability_overlap(a: &[AvailabilitySlot], b: &[AvailabilitySlot]) -> f64 {
    let a: AHashSet<&AvailabilitySlot> = a.iter().collect();
    let b: AHashSet<&AvailabilitySlot> = b.iter().collect();
    if a.is_empty() || b.is_empty() {
        return NEUTRAL_OVERLAP;
    }

    let shared = a.intersection(&b).count();
    shared as f64 / a.len().min(b.len()) as f64
}

/// Mean overlap between `candidate` and every member other than itself
pub fn mean_overlap<'a, I>(candidate: &Profile, members: I) -> f64
where
    I: IntoIterator<Item = &'a Profile>,
{
    let overlaps: Vec<f64> = members
        .into_iter()
        .filter(|member| member.id != candidate.id)
        .map(|member| availability_overlap(&candidate.availability, &member.availability))
        .collect();

    if overlaps.is_empty() {
        NEUTRAL_OVERLAP
    } else {
        overlaps.iter().sum::<f64>() / overlaps.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarx_core::EntityId;

    fn slot(day: &str, start: &str) -> AvailabilitySlot {
        AvailabilitySlot::new(day, start, "18:00")
    }

    fn profile(id: &str, availability: Vec<AvailabilitySlot>) -> Profile {
        Profile {
            id: EntityId::from(id),
            full_name: id.to_string(),
            availability,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_side_is_neutral() {
        assert_eq!(availability_overlap(&[], &[slot("monday", "16:00")]), 0.5);
        assert_eq!(availability_overlap(&[slot("monday", "16:00")], &[]), 0.5);
        assert_eq!(availability_overlap(&[], &[]), 0.5);
    }

    #[test]
    fn test_overlap_against_smaller_schedule() {
        let a = vec![slot("monday", "16:00"), slot("tuesday", "16:00"), slot("friday", "10:00")];
        let b = vec![slot("monday", "16:00"), slot("friday", "11:00")];
        assert_eq!(availability_overlap(&a, &b), 0.5);
        assert_eq!(availability_overlap(&b, &a), 0.5);
        assert_eq!(availability_overlap(&a, &a), 1.0);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(availability_overlap(&[slot("monday", "16:00")], &[slot("sunday", "16:00")]), 0.0);
    }

    #[test]
    fn test_mean_overlap_skips_candidate() {
        let candidate = profile("u1", vec![slot("monday", "16:00")]);
        let same = profile("u2", vec![slot("monday", "16:00")]);
        let other = profile("u3", vec![slot("sunday", "09:00")]);

        assert_eq!(mean_overlap(&candidate, [&same, &other]), 0.5);
        assert_eq!(mean_overlap(&candidate, [&candidate, &same]), 1.0);
        assert_eq!(mean_overlap(&candidate, [&candidate]), 0.5);
        assert_eq!(mean_overlap(&candidate, std::iter::empty()), 0.5);
    }
}
