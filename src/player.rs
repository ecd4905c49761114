use std::cell::RefCell;

use annotation_core::Player;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::videojs::VjsPlayer;

/// [`Player`] over a live video.js instance.
pub struct VideoJsPlayer {
    inner: VjsPlayer,
    // Kept alive for as long as video.js may call them.
    listeners: RefCell<Vec<Closure<dyn FnMut()>>>,
}

impl VideoJsPlayer {
    pub fn new(inner: VjsPlayer) -> Self {
        Self {
            inner,
            listeners: RefCell::new(Vec::new()),
        }
    }

    fn listen(&self, event: &str, callback: Box<dyn FnMut()>) {
        let closure = Closure::wrap(callback);
        self.inner.on(event, &closure);
        self.listeners.borrow_mut().push(closure);
    }
}

impl Player for VideoJsPlayer {
    fn on_metadata_ready(&self, callback: Box<dyn FnMut()>) {
        self.listen("loadedmetadata", callback);
    }

    fn on_time_update(&self, callback: Box<dyn FnMut()>) {
        self.listen("timeupdate", callback);
    }

    fn current_time(&self) -> f64 {
        self.inner.current_time()
    }

    fn set_current_time(&self, time: f64) {
        self.inner.set_current_time(time);
    }

    fn duration(&self) -> Option<f64> {
        Some(self.inner.duration()).filter(|d| d.is_finite())
    }

    fn emit_time_update(&self) {
        self.inner.trigger("timeupdate");
    }

    fn request_preload(&self) {
        self.inner.preload(&JsValue::TRUE);
    }
}
