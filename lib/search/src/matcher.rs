//! Entity matcher
//!
//! Runs the field scorer over every searchable field of an entity, counts
//! how many query keywords the entity contains anywhere, and decides
//! whether the entity passes the keyword filter.

use crate::field::{score_field, score_lowercase};
use crate::weights::{required_keyword_count, FieldRole, TOPIC_WORD_MIN_CHARS};
use ahash::AHashSet;
use scholarx_core::{Keyword, SearchableEntity};
use serde::Serialize;
use std::collections::HashMap;

/// Outcome of matching one entity against a query
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    /// The matched entity
    pub entity: &'a SearchableEntity,
    /// Sum of all weighted field contributions
    pub score: f64,
    /// Distinct keywords found anywhere in the entity
    pub matched_keywords: usize,
    /// Number of keywords in the query, duplicates included
    pub keyword_count: usize,
    /// Per-role contributions, summing to `score`
    pub field_scores: HashMap<FieldRole, f64>,
}

impl<'a> MatchResult<'a> {
    /// Whether the entity belongs in the filtered list.
    ///
    /// An empty query lets everything through. Otherwise at least half the
    /// keywords (rounded up, minimum one) must occur and the score must be
    /// positive.
    pub fn is_match(&self) -> bool {
        if self.keyword_count == 0 {
            return true;
        }
        self.matched_keywords >= required_keyword_count(self.keyword_count) && self.score > 0.0
    }

    /// Role with the largest contribution, if any contributed at all
    pub fn top_field(&self) -> Option<FieldRole> {
        self.field_scores
            .iter()
            .filter(|(_, score)| **score > 0.0)
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal).then(b.0.cmp(a.0)))
            .map(|(role, _)| *role)
    }
}

/// Match a single entity against already tokenized keywords
pub fn matches<'a>(entity: &'a SearchableEntity, keywords: &[Keyword]) -> MatchResult<'a> {
    if keywords.is_empty() {
        return MatchResult {
            entity,
            score: 1.0,
            matched_keywords: 0,
            keyword_count: 0,
            field_scores: HashMap::new(),
        };
    }

    // summed in evaluation order so the total does not depend on map iteration
    let mut score = 0.0;
    let mut field_scores: HashMap<FieldRole, f64> = HashMap::new();
    let mut add = |role: FieldRole, contribution: f64| {
        score += contribution;
        *field_scores.entry(role).or_insert(0.0) += contribution;
    };

    add(FieldRole::Label, score_field(Some(entity.label()), keywords, FieldRole::Label.weight()));

    for secondary in entity.secondary_fields() {
        add(FieldRole::Secondary, score_field(Some(secondary), keywords, FieldRole::Secondary.weight()));
    }

    let topics = entity.topic_labels();
    for topic in &topics {
        let lowered = topic.to_lowercase();
        add(FieldRole::Topic, score_lowercase(&lowered, keywords, FieldRole::Topic.weight()));

        if lowered.contains(' ') {
            for word in lowered
                .split_whitespace()
                .filter(|w| w.chars().count() > TOPIC_WORD_MIN_CHARS)
            {
                add(FieldRole::TopicWord, score_lowercase(word, keywords, FieldRole::TopicWord.weight()));
            }
        }
    }

    add(FieldRole::Description, score_field(entity.description(), keywords, FieldRole::Description.weight()));

    let matched_keywords = count_matched_keywords(entity, &topics, keywords);

    MatchResult {
        entity,
        score,
        matched_keywords,
        keyword_count: keywords.len(),
        field_scores,
    }
}

/// Count distinct keywords occurring anywhere in the entity's searchable text
fn count_matched_keywords(entity: &SearchableEntity, topics: &[&str], keywords: &[Keyword]) -> usize {
    let mut parts: Vec<&str> = Vec::with_capacity(3 + topics.len());
    parts.push(entity.label());
    parts.extend(entity.secondary_fields());
    parts.extend(topics.iter().copied());
    parts.extend(entity.description());
    let haystack = parts.join(" ").to_lowercase();

    keywords
        .iter()
        .map(Keyword::as_str)
        .collect::<AHashSet<&str>>()
        .into_iter()
        .filter(|keyword| haystack.contains(keyword))
        .count()
}
