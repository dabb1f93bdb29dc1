//! Keyword search pass
//!
//! Filters a working-set slice down to the entities that match the query.
//! Results keep the order the entities were supplied in: the computed
//! score is reported but never used to reorder the list.

use crate::matcher::{matches, MatchResult};
use scholarx_core::{tokenize, tokenize_value, Keyword, Result, SearchableEntity};
use serde_json::Value;
use tracing::{debug, warn};

/// Keep the entities that pass the keyword filter, in input order
pub fn filter_matches<'a, I>(entities: I, keywords: &[Keyword]) -> Vec<MatchResult<'a>>
where
    I: IntoIterator<Item = &'a SearchableEntity>,
{
    let mut candidates = 0usize;
    let results: Vec<MatchResult<'a>> = entities
        .into_iter()
        .inspect(|_| candidates += 1)
        .map(|entity| matches(entity, keywords))
        .filter(MatchResult::is_match)
        .collect();

    debug!(
        "Keyword search: {} keywords, {} candidates, {} results",
        keywords.len(),
        candidates,
        results.len()
    );
    results
}

/// Tokenize `query` and filter `entities` with it
pub fn search<'a, I>(entities: I, query: &str) -> Vec<MatchResult<'a>>
where
    I: IntoIterator<Item = &'a SearchableEntity>,
{
    filter_matches(entities, &tokenize(query))
}

/// Search with an untyped query, surfacing `InvalidInput` to the caller
pub fn try_search_value<'a, I>(entities: I, query: &Value) -> Result<Vec<MatchResult<'a>>>
where
    I: IntoIterator<Item = &'a SearchableEntity>,
{
    let keywords = tokenize_value(query)?;
    Ok(filter_matches(entities, &keywords))
}

/// Search with an untyped query.
///
/// A query that is not a string is logged and treated as an empty search
/// box, so the caller still gets the unfiltered list.
pub fn search_value<'a, I>(entities: I, query: &Value) -> Vec<MatchResult<'a>>
where
    I: IntoIterator<Item = &'a SearchableEntity>,
{
    match tokenize_value(query) {
        Ok(keywords) => filter_matches(entities, &keywords),
        Err(e) => {
            warn!("Falling back to unfiltered results: {}", e);
            filter_matches(entities, &[])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarx_core::{EntityId, Project};
    use serde_json::json;

    fn projects(titles: &[&str]) -> Vec<SearchableEntity> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                Project {
                    id: EntityId::Integer(i as u64),
                    title: title.to_string(),
                    ..Default::default()
                }
                .into()
            })
            .collect()
    }

    fn ids(results: &[MatchResult<'_>]) -> Vec<u64> {
        results
            .iter()
            .map(|r| match r.entity.id() {
                EntityId::Integer(i) => *i,
                EntityId::String(_) => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let entities = projects(&["B", "A", "C"]);
        let results = search(&entities, "   ");
        assert_eq!(ids(&results), vec![0, 1, 2]);
        assert!(results.iter().all(|r| r.score == 1.0));
    }

    #[test]
    fn test_results_keep_input_order() {
        // index 1 scores higher (exact) but stays behind index 0
        let entities = projects(&["Web Portal", "Web", "Chemistry"]);
        let results = search(&entities, "web");
        assert_eq!(ids(&results), vec![0, 1]);
        assert!(results[1].score > results[0].score);
    }

    #[test]
    fn test_non_matching_filtered_out() {
        let entities = projects(&["Biology", "Physics"]);
        assert!(search(&entities, "rust").is_empty());
    }

    #[test]
    fn test_try_search_value_rejects_non_string() {
        let entities = projects(&["Biology"]);
        let err = try_search_value(&entities, &json!(12)).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(try_search_value(&entities, &json!("bio")).unwrap().len(), 1);
    }

    #[test]
    fn test_search_value_falls_back_to_unfiltered() {
        let entities = projects(&["Biology", "Physics"]);
        let results = search_value(&entities, &json!({"q": "bio"}));
        assert_eq!(results.len(), 2);
        assert_eq!(search_value(&entities, &json!("phys")).len(), 1);
    }
}
