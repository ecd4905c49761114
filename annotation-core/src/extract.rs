use crate::document::{MatchKind, SearchResults};
use crate::error::AnnotationError;
use crate::hit::Hit;

/// Flattens the audio matches of `item_results[item_index]` into hits sorted by start.
pub fn extract_hits(
    results: &SearchResults,
    item_index: usize,
) -> Result<Vec<Hit>, AnnotationError> {
    let item = results
        .item_results
        .get(item_index)
        .ok_or(AnnotationError::ItemNotFound { index: item_index })?;

    if item.term_results.is_empty() {
        return Err(AnnotationError::NoTermResults { index: item_index });
    }

    let mut hits = Vec::new();
    for (term_index, result) in item.term_results.iter().enumerate() {
        let term = match results.term(term_index) {
            Some(term) => term,
            None => {
                log::warn!("No search term for term result {term_index}");
                ""
            }
        };

        hits.extend(
            result
                .matches
                .iter()
                .filter(|m| m.kind == MatchKind::Audio)
                .flat_map(|m| m.hits.iter())
                .map(|range| Hit {
                    start: range.start,
                    end: range.end,
                    term_index,
                    term: term.to_string(),
                }),
        );
    }

    // Stable, so equal starts keep term order.
    hits.sort_by(|a, b| a.start.total_cmp(&b.start));
    Ok(hits)
}
