use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use crate::args::PluginCall;
use crate::config::Config;
use crate::controller::AnnotationController;
use crate::player::Player;
use crate::render::Renderer;

/// One controller per player, keyed by player identity.
pub struct Registry<K, P, R> {
    controllers: HashMap<K, Rc<AnnotationController<P, R>>>,
}

impl<K, P, R> Default for Registry<K, P, R> {
    fn default() -> Self {
        Self {
            controllers: HashMap::new(),
        }
    }
}

impl<K, P, R> Registry<K, P, R>
where
    K: Eq + Hash,
    P: Player + 'static,
    R: Renderer + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the controller for `key` on first use and reconfigures it on
    /// every later call. `make` only runs for the first call.
    pub fn invoke<F>(&mut self, key: K, call: PluginCall, make: F) -> Rc<AnnotationController<P, R>>
    where
        F: FnOnce() -> (Rc<P>, R),
    {
        if let Some(existing) = self.controllers.get(&key) {
            existing.reconfigure(call);
            return Rc::clone(existing);
        }

        let (player, renderer) = make();
        let config = match &call.options {
            Some(patch) => Config::default().merge(patch),
            None => Config::default(),
        };
        let controller = AnnotationController::new(
            player,
            renderer,
            call.search_results,
            call.item_index.unwrap_or(0),
            config,
        );
        self.controllers.insert(key, Rc::clone(&controller));
        controller
    }

    pub fn get(&self, key: &K) -> Option<Rc<AnnotationController<P, R>>> {
        self.controllers.get(key).cloned()
    }

    pub fn remove(&mut self, key: &K) -> Option<Rc<AnnotationController<P, R>>> {
        self.controllers.remove(key)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
