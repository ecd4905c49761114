mod common;

use annotation_core::extract::extract_hits;
use annotation_core::{AnnotationError, Hit, SearchResults};
use common::{audio_match, single_term_document};
use serde_json::json;

fn document(value: serde_json::Value) -> SearchResults {
    SearchResults::from_value(value).expect("valid document")
}

#[test]
fn audio_hits_are_sorted_by_start() {
    let doc = document(single_term_document(
        "cat",
        json!([audio_match(&[(5.0, 6.0), (1.0, 2.0)])]),
    ));

    let hits = extract_hits(&doc, 0).unwrap();
    assert_eq!(
        hits,
        vec![
            Hit {
                start: 1.0,
                end: 2.0,
                term_index: 0,
                term: "cat".to_string()
            },
            Hit {
                start: 5.0,
                end: 6.0,
                term_index: 0,
                term: "cat".to_string()
            },
        ]
    );
}

#[test]
fn non_audio_matches_are_ignored() {
    let doc = document(single_term_document(
        "cat",
        json!([
            { "type": "video", "hits": [{ "start": 3.0, "end": 4.0 }] },
            { "type": "text", "hits": [{ "start": 1.0, "end": 1.5 }] },
            { "hits": [{ "start": 2.0, "end": 2.5 }] }
        ]),
    ));

    assert!(extract_hits(&doc, 0).unwrap().is_empty());
}

#[test]
fn hits_from_all_terms_are_merged_in_time_order() {
    let doc = document(json!({
        "search_terms": [{ "term": "cat" }, { "term": "dog" }],
        "item_results": [{
            "term_results": [
                { "matches": [audio_match(&[(8.0, 9.0), (2.0, 3.0)])] },
                { "matches": [
                    audio_match(&[(5.0, 5.5)]),
                    { "type": "video", "hits": [{ "start": 0.5, "end": 1.0 }] },
                    audio_match(&[(1.0, 1.2)])
                ] }
            ]
        }]
    }));

    let hits = extract_hits(&doc, 0).unwrap();
    let summary: Vec<(f64, &str, usize)> = hits
        .iter()
        .map(|h| (h.start, h.term.as_str(), h.term_index))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1.0, "dog", 1),
            (2.0, "cat", 0),
            (5.0, "dog", 1),
            (8.0, "cat", 0),
        ]
    );
}

#[test]
fn item_index_selects_the_item() {
    let doc = document(json!({
        "search_terms": [{ "term": "cat" }],
        "item_results": [
            { "term_results": [{ "matches": [audio_match(&[(1.0, 2.0)])] }] },
            { "term_results": [{ "matches": [audio_match(&[(7.0, 8.0), (3.0, 4.0)])] }] }
        ]
    }));

    let hits = extract_hits(&doc, 1).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].start, 3.0);
}

#[test]
fn missing_item_is_reported() {
    let doc = document(single_term_document("cat", json!([])));
    let err = extract_hits(&doc, 3).unwrap_err();
    assert!(matches!(err, AnnotationError::ItemNotFound { index: 3 }));
    assert_eq!(
        err.user_message(),
        "ClarifyAnnotations: Unable to locate search results."
    );
}

#[test]
fn empty_document_is_reported() {
    let err = extract_hits(&SearchResults::default(), 0).unwrap_err();
    assert!(matches!(err, AnnotationError::ItemNotFound { index: 0 }));
}

#[test]
fn item_without_term_results_is_reported() {
    let doc = document(json!({ "search_terms": [], "item_results": [{}] }));
    assert!(matches!(
        extract_hits(&doc, 0),
        Err(AnnotationError::NoTermResults { index: 0 })
    ));

    let doc = document(json!({ "item_results": [{ "term_results": [] }] }));
    assert!(matches!(
        extract_hits(&doc, 0),
        Err(AnnotationError::NoTermResults { index: 0 })
    ));
}

#[test]
fn matches_without_hits_contribute_nothing() {
    let doc = document(single_term_document(
        "cat",
        json!([{ "type": "audio", "hits": [] }, { "type": "audio" }]),
    ));
    assert!(extract_hits(&doc, 0).unwrap().is_empty());
}

#[test]
fn missing_search_term_falls_back_to_empty_text() {
    let doc = document(json!({
        "item_results": [{ "term_results": [{ "matches": [audio_match(&[(1.0, 2.0)])] }] }]
    }));
    let hits = extract_hits(&doc, 0).unwrap();
    assert_eq!(hits[0].term, "");
    assert_eq!(hits[0].term_index, 0);
}

#[test]
fn unreadable_document_is_an_error() {
    let err = SearchResults::from_json(r#"{ "item_results": 5 }"#).unwrap_err();
    assert!(matches!(err, AnnotationError::InvalidDocument(_)));
    assert_eq!(
        err.user_message(),
        "ClarifyAnnotations: Search results could not be read."
    );
}

#[test]
fn extra_fields_are_ignored() {
    let doc = SearchResults::from_json(
        r#"{
            "_links": { "self": { "href": "/v1/search" } },
            "total": 1,
            "search_terms": [{ "term": "cat", "weight": 1 }],
            "item_results": [{
                "score": 0.9,
                "term_results": [{
                    "score": 0.5,
                    "matches": [{ "type": "audio", "track": 0, "hits": [{ "start": 1.5, "end": 2.25 }] }]
                }]
            }]
        }"#,
    )
    .unwrap();

    let hits = extract_hits(&doc, 0).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].end, 2.25);
}
