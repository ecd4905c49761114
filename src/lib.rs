//! video.js plugin marking search hits on the progress bar.
//!
//! ```js
//! player.clarifyAnnotations(searchResults, itemIndex, { audioOffset: 0.6 });
//! ```

use wasm_bindgen::prelude::*;

mod components;
mod handle;
mod logging;
mod player;
mod plugin;
mod renderer;
mod utils;
mod videojs;

pub use handle::AnnotationsHandle;
pub use plugin::PLUGIN_NAME;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();

    if let Err(err) = plugin::register() {
        log::error!("Could not register {PLUGIN_NAME}: {err}");
    }
}
