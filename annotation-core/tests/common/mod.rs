#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use annotation_core::render::NavigateFn;
use annotation_core::{Marker, MarkerId, Player, Renderer};
use serde_json::{json, Value};

pub struct FakePlayer {
    time: Cell<f64>,
    duration: Cell<Option<f64>>,
    metadata_callbacks: RefCell<Vec<Box<dyn FnMut()>>>,
    time_callbacks: RefCell<Vec<Box<dyn FnMut()>>>,
    pub preload_requested: Cell<bool>,
    pub time_updates_emitted: Cell<usize>,
    pub seeks: RefCell<Vec<f64>>,
}

impl FakePlayer {
    pub fn new(duration: Option<f64>) -> Rc<Self> {
        Rc::new(Self {
            time: Cell::new(0.0),
            duration: Cell::new(duration),
            metadata_callbacks: RefCell::new(Vec::new()),
            time_callbacks: RefCell::new(Vec::new()),
            preload_requested: Cell::new(false),
            time_updates_emitted: Cell::new(0),
            seeks: RefCell::new(Vec::new()),
        })
    }

    pub fn load_metadata(&self, duration: f64) {
        self.duration.set(Some(duration));
        for callback in self.metadata_callbacks.borrow_mut().iter_mut() {
            callback();
        }
    }

    pub fn play_to(&self, time: f64) {
        self.time.set(time);
        self.fire_time_update();
    }

    fn fire_time_update(&self) {
        for callback in self.time_callbacks.borrow_mut().iter_mut() {
            callback();
        }
    }

    pub fn listener_counts(&self) -> (usize, usize) {
        (
            self.metadata_callbacks.borrow().len(),
            self.time_callbacks.borrow().len(),
        )
    }
}

impl Player for FakePlayer {
    fn on_metadata_ready(&self, callback: Box<dyn FnMut()>) {
        self.metadata_callbacks.borrow_mut().push(callback);
    }

    fn on_time_update(&self, callback: Box<dyn FnMut()>) {
        self.time_callbacks.borrow_mut().push(callback);
    }

    fn current_time(&self) -> f64 {
        self.time.get()
    }

    fn set_current_time(&self, time: f64) {
        self.seeks.borrow_mut().push(time);
        self.time.set(time);
    }

    fn duration(&self) -> Option<f64> {
        self.duration.get()
    }

    fn emit_time_update(&self) {
        self.time_updates_emitted.set(self.time_updates_emitted.get() + 1);
        self.fire_time_update();
    }

    fn request_preload(&self) {
        self.preload_requested.set(true);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Activate(MarkerId),
    Deactivate(MarkerId),
    Clear,
}

pub struct FakeMarker {
    pub id: MarkerId,
    pub marker: Marker,
    pub classes: Vec<String>,
}

pub struct RecordingRenderer {
    pub has_progress_bar: bool,
    pub layer_attached: bool,
    pub navigate: Option<NavigateFn>,
    pub markers: Vec<FakeMarker>,
    pub mutations: Vec<Mutation>,
    next_id: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            has_progress_bar: true,
            layer_attached: false,
            navigate: None,
            markers: Vec::new(),
            mutations: Vec::new(),
            next_id: 0,
        }
    }

    pub fn without_progress_bar() -> Self {
        Self {
            has_progress_bar: false,
            ..Self::new()
        }
    }

    pub fn classes(&self, id: MarkerId) -> Vec<String> {
        self.markers
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.classes.clone())
            .unwrap_or_default()
    }
}

impl Renderer for RecordingRenderer {
    fn attach_layer(&mut self) -> bool {
        self.layer_attached = self.has_progress_bar;
        self.has_progress_bar
    }

    fn attach_actions(&mut self, navigate: NavigateFn) {
        self.navigate = Some(navigate);
    }

    fn add_marker(&mut self, marker: &Marker) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        self.markers.push(FakeMarker {
            id,
            marker: marker.clone(),
            classes: vec!["annotation".to_string()],
        });
        id
    }

    fn markers_matching(&self, start: f64, term: &str) -> Vec<MarkerId> {
        self.markers
            .iter()
            .filter(|m| m.marker.start.to_string() == start.to_string() && m.marker.term == term)
            .map(|m| m.id)
            .collect()
    }

    fn active_markers(&self) -> Vec<MarkerId> {
        self.markers
            .iter()
            .filter(|m| m.classes.iter().any(|c| c == "active"))
            .map(|m| m.id)
            .collect()
    }

    fn set_active(&mut self, id: MarkerId, active: bool) {
        let Some(marker) = self.markers.iter_mut().find(|m| m.id == id) else {
            return;
        };
        if active {
            if !marker.classes.iter().any(|c| c == "active") {
                marker.classes.push("active".to_string());
            }
            self.mutations.push(Mutation::Activate(id));
        } else {
            marker.classes.retain(|c| c != "active");
            self.mutations.push(Mutation::Deactivate(id));
        }
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
        self.mutations.push(Mutation::Clear);
    }
}

/// A one-item document with a single search term.
pub fn single_term_document(term: &str, matches: Value) -> Value {
    json!({
        "search_terms": [{ "term": term }],
        "item_results": [{ "term_results": [{ "matches": matches }] }]
    })
}

pub fn audio_match(hits: &[(f64, f64)]) -> Value {
    let hits: Vec<Value> = hits
        .iter()
        .map(|(start, end)| json!({ "start": start, "end": end }))
        .collect();
    json!({ "type": "audio", "hits": hits })
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
