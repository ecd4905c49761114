use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::active::{active_hits, ActiveDiff};
use crate::args::PluginCall;
use crate::config::Config;
use crate::document::SearchResults;
use crate::extract::extract_hits;
use crate::geometry::MarkerGeometry;
use crate::hit::Hit;
use crate::navigation::{target_index, Direction};
use crate::player::Player;
use crate::render::{Marker, MarkerId, Renderer};

struct State<R> {
    renderer: R,
    config: Config,
    document: SearchResults,
    item_index: usize,
    hits: Vec<Hit>,
    active: Vec<MarkerId>,
}

/// Owns the hits of one player and keeps its markers in sync with playback.
///
/// Player callbacks hold a weak reference, so dropping the last `Rc`
/// silences them.
pub struct AnnotationController<P, R> {
    player: Rc<P>,
    state: RefCell<State<R>>,
}

impl<P, R> AnnotationController<P, R>
where
    P: Player + 'static,
    R: Renderer + 'static,
{
    pub fn new(
        player: Rc<P>,
        renderer: R,
        document: Option<SearchResults>,
        item_index: usize,
        config: Config,
    ) -> Rc<Self> {
        let controller = Rc::new(Self {
            player,
            state: RefCell::new(State {
                renderer,
                config,
                document: document.unwrap_or_default(),
                item_index,
                hits: Vec::new(),
                active: Vec::new(),
            }),
        });

        controller.player.request_preload();
        controller.draw();
        controller.subscribe();
        controller.reload();
        controller
    }

    fn draw(self: &Rc<Self>) {
        let mut state = self.state.borrow_mut();
        if !state.renderer.attach_layer() {
            log::debug!("No progress bar, markers will not be visible");
        }

        if state.config.show_buttons {
            let weak = Rc::downgrade(self);
            state.renderer.attach_actions(Rc::new(move |direction| {
                if let Some(controller) = weak.upgrade() {
                    controller.navigate_to_annotation(direction);
                }
            }));
        }
    }

    fn subscribe(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        self.player.on_metadata_ready(Box::new(move || {
            if let Some(controller) = weak.upgrade() {
                controller.load_annotations();
            }
        }));

        let weak: Weak<Self> = Rc::downgrade(self);
        self.player.on_time_update(Box::new(move || {
            if let Some(controller) = weak.upgrade() {
                controller.refresh_active_set();
            }
        }));
    }

    /// Applies a repeated plugin call to this instance.
    ///
    /// Options are merged over the current ones. A new document or item
    /// index drops the current markers and extracts again as soon as
    /// metadata is available.
    pub fn reconfigure(&self, call: PluginCall) {
        let reload = {
            let mut state = self.state.borrow_mut();
            if let Some(patch) = &call.options {
                state.config = state.config.merge(patch);
            }

            let mut reload = false;
            if let Some(document) = call.search_results {
                state.document = document;
                reload = true;
            }
            if let Some(index) = call.item_index {
                state.item_index = index;
                reload = true;
            }
            reload
        };

        if reload {
            self.reload();
        }
    }

    fn reload(&self) {
        self.clear_markers();
        self.state.borrow_mut().hits.clear();

        if self.player.has_metadata() {
            self.load_annotations();
        }
    }

    /// Rebuilds the hit list from the stored document and redraws every marker.
    pub fn load_annotations(&self) {
        let duration = self.player.duration();
        let mut state = self.state.borrow_mut();
        let state = &mut *state;

        state.active.clear();
        state.renderer.clear_markers();

        state.hits = match extract_hits(&state.document, state.item_index) {
            Ok(hits) => hits,
            Err(err) => {
                log::error!("{}", err.user_message());
                log::debug!("{err}");
                Vec::new()
            }
        };

        let mut skipped = 0;
        for hit in &state.hits {
            if render_marker(&mut state.renderer, hit, duration).is_none() {
                skipped += 1;
            }
        }
        if skipped > 0 {
            log::warn!("Skipped {skipped} markers, media duration is {duration:?}");
        }

        log::debug!("Loaded {} annotations", state.hits.len());
    }

    /// Draws one marker for `hit`. Returns `None` when the duration is not
    /// usable for positioning.
    pub fn add_marker(&self, hit: &Hit) -> Option<MarkerId> {
        let duration = self.player.duration();
        render_marker(&mut self.state.borrow_mut().renderer, hit, duration)
    }

    /// Seeks to the previous or next hit, `audio_offset` ahead of its start.
    pub fn navigate_to_annotation(&self, direction: Direction) {
        log::debug!("Skipping to {direction} annotation");
        let target = {
            let state = self.state.borrow();
            let offset = state.config.audio_offset;
            let current_time = self.player.current_time();
            target_index(&state.hits, current_time, offset, direction)
                .map(|index| (state.hits[index].start - offset).max(0.0))
        };

        // The state borrow is released here; the time update re-enters the controller.
        if let Some(time) = target {
            self.player.set_current_time(time);
            self.player.emit_time_update();
        }
    }

    /// Recomputes the markers under the playhead and fixes up their classes.
    pub fn refresh_active_set(&self) {
        let current_time = self.player.current_time();
        let mut state = self.state.borrow_mut();
        let State {
            renderer,
            config,
            hits,
            active,
            ..
        } = &mut *state;

        let mut next: Vec<MarkerId> = Vec::new();
        if config.show_active {
            for hit in active_hits(hits, current_time, config.audio_offset) {
                for id in renderer.markers_matching(hit.start, &hit.term) {
                    if !next.contains(&id) {
                        next.push(id);
                    }
                }
            }
        }

        let diff = ActiveDiff::between(&renderer.active_markers(), &next);
        if !diff.is_empty() {
            log::debug!(
                "t={current_time:.2}: +{} -{}",
                diff.activate.len(),
                diff.deactivate.len()
            );
            diff.apply(renderer);
        }
        *active = next;
    }

    /// Drops the active set and every marker. The layer and buttons stay.
    pub fn clear_markers(&self) {
        let mut state = self.state.borrow_mut();
        state.active.clear();
        state.renderer.clear_markers();
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.state.borrow().hits.clone()
    }

    pub fn active(&self) -> Vec<MarkerId> {
        self.state.borrow().active.clone()
    }

    pub fn config(&self) -> Config {
        self.state.borrow().config
    }

    pub fn item_index(&self) -> usize {
        self.state.borrow().item_index
    }

    /// Runs `f` against the renderer, mostly for inspection.
    pub fn with_renderer<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(&self.state.borrow().renderer)
    }
}

fn render_marker<R: Renderer>(renderer: &mut R, hit: &Hit, duration: Option<f64>) -> Option<MarkerId> {
    let geometry = MarkerGeometry::compute(hit.start, hit.end, duration)?;
    Some(renderer.add_marker(&Marker::new(hit, geometry)))
}
