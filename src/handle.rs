use std::rc::Rc;
use std::str::FromStr;

use annotation_core::{AnnotationController, Direction, Hit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::player::VideoJsPlayer;
use crate::renderer::DomRenderer;

pub type BrowserController = AnnotationController<VideoJsPlayer, DomRenderer>;

/// What the plugin call returns to JS: the player's annotation instance.
#[wasm_bindgen]
pub struct AnnotationsHandle {
    controller: Rc<BrowserController>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HitDto<'a> {
    start: f64,
    end: f64,
    term: &'a str,
    term_index: usize,
}

impl<'a> From<&'a Hit> for HitDto<'a> {
    fn from(hit: &'a Hit) -> Self {
        Self {
            start: hit.start,
            end: hit.end,
            term: &hit.term,
            term_index: hit.term_index,
        }
    }
}

impl AnnotationsHandle {
    pub fn new(controller: Rc<BrowserController>) -> Self {
        Self { controller }
    }
}

#[wasm_bindgen]
impl AnnotationsHandle {
    /// Jumps to the `"previous"` or `"next"` hit; anything else means next.
    #[wasm_bindgen(js_name = skipToAnnotation)]
    pub fn skip_to_annotation(&self, direction: Option<String>) {
        let direction = direction
            .as_deref()
            .and_then(|d| Direction::from_str(d).ok())
            .unwrap_or_default();
        self.controller.navigate_to_annotation(direction);
    }

    #[wasm_bindgen(js_name = checkAnnotations)]
    pub fn check_annotations(&self) {
        self.controller.refresh_active_set();
    }

    pub fn clear(&self) {
        self.controller.clear_markers();
    }

    pub fn hits(&self) -> Result<JsValue, JsValue> {
        let hits = self.controller.hits();
        let dtos: Vec<HitDto> = hits.iter().map(HitDto::from).collect();
        serde_wasm_bindgen::to_value(&dtos).map_err(JsValue::from)
    }

    pub fn options(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.controller.config()).map_err(JsValue::from)
    }

    #[wasm_bindgen(getter, js_name = itemIndex)]
    pub fn item_index(&self) -> usize {
        self.controller.item_index()
    }
}
