use std::rc::Rc;

use crate::geometry::MarkerGeometry;
use crate::hit::Hit;
use crate::navigation::Direction;

/// Handle for a rendered marker, assigned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

/// Everything a renderer needs to draw one hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub start: f64,
    pub end: f64,
    pub term: String,
    pub term_index: usize,
    pub geometry: MarkerGeometry,
}

impl Marker {
    pub fn new(hit: &Hit, geometry: MarkerGeometry) -> Self {
        Self {
            start: hit.start,
            end: hit.end,
            term: hit.term.clone(),
            term_index: hit.term_index,
            geometry,
        }
    }
}

pub type NavigateFn = Rc<dyn Fn(Direction)>;

/// The drawing surface the controller mutates.
pub trait Renderer {
    /// Mounts the marker layer into the progress bar. Returns `false` when
    /// the player has no progress bar, in which case markers go nowhere.
    fn attach_layer(&mut self) -> bool;

    /// Mounts the previous/next button pair; clicks call `navigate`.
    fn attach_actions(&mut self, navigate: NavigateFn);

    fn add_marker(&mut self, marker: &Marker) -> MarkerId;

    /// Markers whose start and term attributes equal the given ones.
    fn markers_matching(&self, start: f64, term: &str) -> Vec<MarkerId>;

    /// Markers currently carrying the active class.
    fn active_markers(&self) -> Vec<MarkerId>;

    fn set_active(&mut self, id: MarkerId, active: bool);

    /// Removes every marker but keeps the layer and the buttons.
    fn clear_markers(&mut self);
}
