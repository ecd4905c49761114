use std::str::FromStr;

use annotation_core::Direction;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

pub fn extract_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &"message".into())
                .ok()
                .and_then(|v| v.as_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Converts a plugin argument; `undefined` means it was not passed.
pub fn optional_arg(value: JsValue) -> Option<serde_json::Value> {
    if value.is_undefined() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Unsupported plugin argument: {err}");
            Some(serde_json::Value::Null)
        }
    }
}

/// Direction named by the `data-direction` attribute of the clicked button.
pub fn event_direction(ev: &leptos::ev::MouseEvent) -> Option<Direction> {
    ev.current_target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.get_attribute("data-direction"))
        .and_then(|dir| Direction::from_str(&dir).ok())
}

/// Attribute text for a time, as JS prints numbers (`5`, `1.5`).
pub fn format_time(value: f64) -> String {
    value.to_string()
}

pub fn marker_style(left: &str, width: &str) -> String {
    format!("left: {left}; width: {width};")
}
