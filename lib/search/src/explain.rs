//! Explainability for keyword search results
//!
//! Provides output structures that show how each match was scored,
//! with per-field contributions for transparency.

use crate::matcher::MatchResult;
use crate::weights::FieldRole;
use scholarx_core::{EntityId, EntityKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// A match with its per-field score breakdown
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedMatch {
    pub id: EntityId,
    pub kind: EntityKind,
    pub label: String,
    /// Overall weighted score
    pub score: f64,
    pub matched_keywords: usize,
    /// Per-role contributions (already weighted), zero entries omitted
    pub explain: BTreeMap<FieldRole, f64>,
}

impl ExplainedMatch {
    pub fn from_match(result: &MatchResult<'_>) -> Self {
        Self {
            id: result.entity.id().clone(),
            kind: result.entity.kind(),
            label: result.entity.label().to_string(),
            score: result.score,
            matched_keywords: result.matched_keywords,
            explain: result
                .field_scores
                .iter()
                .filter(|(_, score)| **score > 0.0)
                .map(|(role, score)| (*role, *score))
                .collect(),
        }
    }
}

/// Response structure for a keyword search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Matches in filtering-pass order
    pub result: Vec<ExplainedMatch>,
    pub stats: SearchStats,
}

impl SearchResponse {
    pub fn from_matches(results: &[MatchResult<'_>], keyword_count: usize, candidates_count: usize) -> Self {
        Self {
            result: results.iter().map(ExplainedMatch::from_match).collect(),
            stats: SearchStats::compute(results, keyword_count, candidates_count),
        }
    }
}

/// Summary statistics for a search pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchStats {
    /// Number of entities considered
    pub candidates_count: usize,
    /// Number of entities that passed the filter
    pub results_count: usize,
    /// Query keywords, duplicates included
    pub keyword_count: usize,
    /// Highest score among the results
    pub best_score: f64,
    /// Field that contributed most to the best-scoring result
    pub top_contributing_field: Option<FieldRole>,
}

impl SearchStats {
    /// Compute stats from filtered results.
    ///
    /// Results are not sorted, so the best result is searched for; the
    /// first one wins a tie.
    pub fn compute(results: &[MatchResult<'_>], keyword_count: usize, candidates_count: usize) -> Self {
        let best = results.iter().fold(None::<&MatchResult<'_>>, |best, r| match best {
            Some(b) if b.score >= r.score => Some(b),
            _ => Some(r),
        });

        Self {
            candidates_count,
            results_count: results.len(),
            keyword_count,
            best_score: best.map(|r| r.score).unwrap_or(0.0),
            top_contributing_field: best.and_then(MatchResult::top_field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::{filter_matches, search};
    use scholarx_core::{tokenize, Project, SearchableEntity, StudyGroup};

    fn entities() -> Vec<SearchableEntity> {
        vec![
            Project {
                id: EntityId::Integer(1),
                title: "Chess Engine".to_string(),
                description: Some("A rust chess engine".to_string()),
                ..Default::default()
            }
            .into(),
            StudyGroup {
                id: EntityId::Integer(2),
                name: "Rust".to_string(),
                ..Default::default()
            }
            .into(),
        ]
    }

    #[test]
    fn test_explained_match_omits_zero_fields() {
        let entities = entities();
        let results = search(&entities, "rust");
        let explained = ExplainedMatch::from_match(&results[0]);

        assert_eq!(explained.kind, EntityKind::Project);
        assert_eq!(explained.explain.len(), 1);
        assert_eq!(explained.explain[&FieldRole::Description], 1.0);
    }

    #[test]
    fn test_stats_pick_best_result() {
        let entities = entities();
        let results = search(&entities, "rust");
        let stats = SearchStats::compute(&results, 1, entities.len());

        assert_eq!(stats.candidates_count, 2);
        assert_eq!(stats.results_count, 2);
        assert_eq!(stats.keyword_count, 1);
        assert_eq!(stats.best_score, 6.0);
        assert_eq!(stats.top_contributing_field, Some(FieldRole::Label));
    }

    #[test]
    fn test_empty_stats() {
        let stats = SearchStats::compute(&[], 0, 5);
        assert_eq!(stats.results_count, 0);
        assert_eq!(stats.best_score, 0.0);
        assert_eq!(stats.top_contributing_field, None);
    }

    #[test]
    fn test_stats_keep_keyword_count_without_results() {
        let entities = entities();
        let keywords = tokenize("quantum biology lab");
        let results = filter_matches(&entities, &keywords);
        let stats = SearchStats::compute(&results, keywords.len(), entities.len());

        assert!(results.is_empty());
        assert_eq!(stats.keyword_count, 3);
        assert_eq!(stats.results_count, 0);
    }

    #[test]
    fn test_response_serialization() {
        let entities = entities();
        let results = search(&entities, "chess");
        let json = serde_json::to_string(&SearchResponse::from_matches(&results, 1, 2)).unwrap();

        assert!(json.contains("\"result\""));
        assert!(json.contains("\"explain\""));
        assert!(json.contains("\"label\":\"Chess Engine\""));
        assert!(json.contains("\"top_contributing_field\":\"label\""));
    }
}
