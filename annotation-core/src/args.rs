//! Normalizes the loosely typed plugin arguments `(resultsOrOptions,
//! indexOrOptions, options)` into one [`PluginCall`].

use serde_json::Value;

use crate::config::ConfigPatch;
use crate::document::SearchResults;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginCall {
    pub search_results: Option<SearchResults>,
    pub item_index: Option<usize>,
    pub options: Option<ConfigPatch>,
}

impl PluginCall {
    /// `None` stands for an argument that was not passed (`undefined`).
    pub fn parse(first: Option<Value>, second: Option<Value>, third: Option<Value>) -> Self {
        let (results, index, options) = match (first, second, third) {
            (Some(first), None, None) if is_object_like(&first) && !has_item_results(&first) => {
                (None, None, Some(first))
            }
            (first, Some(second), third)
                if is_object_like(&second) && !third.as_ref().is_some_and(is_truthy) =>
            {
                (first, Some(Value::from(0)), Some(second))
            }
            (first, second, third) => (first, second, third),
        };

        Self {
            search_results: results.filter(is_truthy).map(parse_results),
            item_index: index.and_then(parse_index),
            options: options.filter(is_truthy).and_then(parse_options),
        }
    }
}

fn is_object_like(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn has_item_results(value: &Value) -> bool {
    value.get("item_results").is_some_and(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn parse_results(value: Value) -> SearchResults {
    SearchResults::from_value(value).unwrap_or_else(|err| {
        log::warn!("{} {err}", err.user_message());
        SearchResults::default()
    })
}

fn parse_index(value: Value) -> Option<usize> {
    match &value {
        Value::Number(n) => {
            if let Some(index) = n.as_u64() {
                return usize::try_from(index).ok();
            }
            match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= usize::MAX as f64 => {
                    Some(f as usize)
                }
                _ => {
                    log::warn!("Ignoring item index {value}");
                    None
                }
            }
        }
        _ => None,
    }
}

fn parse_options(value: Value) -> Option<ConfigPatch> {
    match serde_json::from_value(value) {
        Ok(patch) => Some(patch),
        Err(err) => {
            log::warn!("Ignoring unreadable options: {err}");
            None
        }
    }
}
