use js_sys::{Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::utils::extract_error;

#[wasm_bindgen]
extern "C" {
    /// A video.js player instance.
    #[derive(Clone, Debug)]
    pub type VjsPlayer;

    #[wasm_bindgen(method)]
    pub fn id(this: &VjsPlayer) -> String;

    #[wasm_bindgen(method)]
    pub fn el(this: &VjsPlayer) -> Element;

    #[wasm_bindgen(method, js_name = currentTime)]
    pub fn current_time(this: &VjsPlayer) -> f64;

    #[wasm_bindgen(method, js_name = currentTime)]
    pub fn set_current_time(this: &VjsPlayer, time: f64);

    #[wasm_bindgen(method)]
    pub fn duration(this: &VjsPlayer) -> f64;

    #[wasm_bindgen(method)]
    pub fn preload(this: &VjsPlayer, value: &JsValue);

    #[wasm_bindgen(method)]
    pub fn on(this: &VjsPlayer, event: &str, handler: &Closure<dyn FnMut()>);

    #[wasm_bindgen(method)]
    pub fn trigger(this: &VjsPlayer, event: &str);
}

#[wasm_bindgen(inline_js = "export function bind_this(handler) {
    return function (a, b, c) { return handler(this, a, b, c); };
}")]
extern "C" {
    /// Wraps `handler` in a plain JS function that passes its `this` first.
    pub fn bind_this(
        handler: &Closure<dyn FnMut(JsValue, JsValue, JsValue, JsValue) -> JsValue>,
    ) -> Function;
}

/// Registers `plugin` under `name` with the global `videojs`.
///
/// Prefers `registerPlugin` and falls back to the older `plugin`.
pub fn register_plugin(name: &str, plugin: &Function) -> Result<(), String> {
    let videojs = Reflect::get(&js_sys::global(), &"videojs".into()).map_err(extract_error)?;
    if videojs.is_undefined() || videojs.is_null() {
        return Err("videojs is not loaded".to_string());
    }

    let register = ["registerPlugin", "plugin"]
        .iter()
        .find_map(|method| {
            Reflect::get(&videojs, &JsValue::from_str(method))
                .ok()
                .and_then(|f| f.dyn_into::<Function>().ok())
        })
        .ok_or_else(|| "videojs has no plugin registration".to_string())?;

    register
        .call2(&videojs, &JsValue::from_str(name), plugin)
        .map(|_| ())
        .map_err(extract_error)
}
