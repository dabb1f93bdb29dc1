//! Field weights for keyword search
//!
//! Every searchable field plays one role, and each role has a fixed weight.
//! Weights are constants: callers cannot tune them per search.

use serde::{Deserialize, Serialize};

/// Weight of the primary label (project title, group name, full name)
pub const LABEL_WEIGHT: f64 = 3.0;

/// Weight of secondary text fields (subject area, course code, department)
pub const SECONDARY_WEIGHT: f64 = 2.0;

/// Weight of each topic or skill label
pub const TOPIC_WEIGHT: f64 = 1.5;

/// Weight of the free-text description
pub const DESCRIPTION_WEIGHT: f64 = 1.0;

/// Scale applied to single words of a multi-word topic label
pub const TOPIC_WORD_FACTOR: f64 = 0.7;

/// Weight of a single word taken from a multi-word topic label
pub const TOPIC_WORD_WEIGHT: f64 = TOPIC_WEIGHT * TOPIC_WORD_FACTOR;

/// Words of a multi-word topic must be longer than this to be scored alone
pub const TOPIC_WORD_MIN_CHARS: usize = 2;

/// Share of query keywords an entity must contain to pass the filter
pub const MIN_KEYWORD_SHARE: f64 = 0.5;

/// Role a field plays in scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// Title, group name or full name
    Label,
    /// Subject area, course code or department
    Secondary,
    /// A whole topic or skill label
    Topic,
    /// One word of a multi-word topic label
    TopicWord,
    /// Description or bio
    Description,
}

impl FieldRole {
    pub const ALL: [FieldRole; 5] = [
        FieldRole::Label,
        FieldRole::Secondary,
        FieldRole::Topic,
        FieldRole::TopicWord,
        FieldRole::Description,
    ];

    #[inline]
    pub fn weight(self) -> f64 {
        match self {
            FieldRole::Label => LABEL_WEIGHT,
            FieldRole::Secondary => SECONDARY_WEIGHT,
            FieldRole::Topic => TOPIC_WEIGHT,
            FieldRole::TopicWord => TOPIC_WORD_WEIGHT,
            FieldRole::Description => DESCRIPTION_WEIGHT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldRole::Label => "label",
            FieldRole::Secondary => "secondary",
            FieldRole::Topic => "topic",
            FieldRole::TopicWord => "topic_word",
            FieldRole::Description => "description",
        }
    }
}

impl std::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords an entity must contain: half the query, rounded up, at least one
#[inline]
pub fn required_keyword_count(keyword_count: usize) -> usize {
    ((keyword_count as f64 * MIN_KEYWORD_SHARE).ceil() as usize).max(1)
}
