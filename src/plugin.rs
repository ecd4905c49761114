use std::cell::RefCell;
use std::rc::{Rc, Weak};

use annotation_core::{PluginCall, Registry};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::handle::AnnotationsHandle;
use crate::player::VideoJsPlayer;
use crate::renderer::DomRenderer;
use crate::utils::optional_arg;
use crate::videojs::{bind_this, register_plugin, VjsPlayer};

pub const PLUGIN_NAME: &str = "clarifyAnnotations";

type BrowserRegistry = Registry<String, VideoJsPlayer, DomRenderer>;
type PluginFn = dyn FnMut(JsValue, JsValue, JsValue, JsValue) -> JsValue;

/// Registers the plugin with video.js. The registry lives in the plugin closure.
pub fn register() -> Result<(), String> {
    let registry = Rc::new(RefCell::new(BrowserRegistry::new()));

    let handler = Closure::wrap(Box::new(move |this: JsValue, a: JsValue, b: JsValue, c: JsValue| {
        invoke(&registry, this.unchecked_into(), a, b, c)
    }) as Box<PluginFn>);
    let plugin = bind_this(&handler);
    handler.forget();

    register_plugin(PLUGIN_NAME, &plugin)?;
    log::info!("Registered video.js plugin {PLUGIN_NAME}");
    Ok(())
}

fn invoke(
    registry: &Rc<RefCell<BrowserRegistry>>,
    player: VjsPlayer,
    first: JsValue,
    second: JsValue,
    third: JsValue,
) -> JsValue {
    let call = PluginCall::parse(optional_arg(first), optional_arg(second), optional_arg(third));
    let key = player.id();

    let is_new = registry.borrow().get(&key).is_none();
    let controller = registry.borrow_mut().invoke(key.clone(), call, || {
        let renderer = DomRenderer::new(player.el());
        (Rc::new(VideoJsPlayer::new(player.clone())), renderer)
    });

    if is_new {
        forget_on_dispose(&player, Rc::downgrade(registry), key);
    }

    AnnotationsHandle::new(controller).into()
}

fn forget_on_dispose(player: &VjsPlayer, registry: Weak<RefCell<BrowserRegistry>>, key: String) {
    let on_dispose = Closure::wrap(Box::new(move || {
        if let Some(registry) = registry.upgrade() {
            registry.borrow_mut().remove(&key);
            log::debug!("Released annotations for player {key}");
        }
    }) as Box<dyn FnMut()>);
    player.on("dispose", &on_dispose);
    on_dispose.forget();
}
