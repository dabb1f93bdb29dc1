//! Compatibility ranker
//!
//! Orders candidates by compatibility, highest first. Candidates without a
//! score rank below every scored one, and ties keep their input order.

use crate::compatibility::CompatibilityScore;

/// Anything carrying a compatibility score
pub trait Compatible {
    fn compatibility(&self) -> CompatibilityScore;
}

impl Compatible for CompatibilityScore {
    fn compatibility(&self) -> CompatibilityScore {
        *self
    }
}

impl<T> Compatible for (T, CompatibilityScore) {
    fn compatibility(&self) -> CompatibilityScore {
        self.1
    }
}

/// Sort `items` by compatibility descending.
///
/// The sort is stable, so equally scored items keep their relative order.
pub fn rank_by_compatibility<T: Compatible>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by(|a, b| b.compatibility().rank_value().cmp(&a.compatibility().rank_value()));
    items
}
