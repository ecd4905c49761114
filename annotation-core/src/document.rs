//! Search result documents as delivered by the search API.
//!
//! Every collection defaults to empty so partially filled documents still
//! deserialize; extraction reports what is missing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AnnotationError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub search_terms: Vec<SearchTerm>,
    #[serde(default)]
    pub item_results: Vec<ItemResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchTerm {
    #[serde(default)]
    pub term: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemResult {
    #[serde(default)]
    pub term_results: Vec<TermResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermResult {
    #[serde(default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "type", default)]
    pub kind: MatchKind,
    #[serde(default)]
    pub hits: Vec<HitRange>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Audio,
    Video,
    Text,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRange {
    pub start: f64,
    pub end: f64,
}

impl SearchResults {
    pub fn from_value(value: Value) -> Result<Self, AnnotationError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(json: &str) -> Result<Self, AnnotationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn term(&self, term_index: usize) -> Option<&str> {
        self.search_terms.get(term_index).map(|t| t.term.as_str())
    }
}
