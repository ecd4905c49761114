use crate::hit::Hit;
use crate::navigation::PLAYHEAD_TOLERANCE;
use crate::render::{MarkerId, Renderer};
use crate::search::sorted_last_index;

/// Hits whose offset window contains `time`.
///
/// Hits are sorted by start, so only those before the upper bound of
/// `time + offset` can qualify.
pub fn active_hits(hits: &[Hit], time: f64, offset: f64) -> impl Iterator<Item = &Hit> {
    let starts: Vec<f64> = hits.iter().map(|hit| hit.start).collect();
    let bound = sorted_last_index(&starts, &(time + offset + PLAYHEAD_TOLERANCE));
    hits[..bound]
        .iter()
        .filter(move |hit| hit.is_active_at(time, offset))
}

/// Class changes needed to go from one active set to another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveDiff {
    pub activate: Vec<MarkerId>,
    pub deactivate: Vec<MarkerId>,
}

impl ActiveDiff {
    /// Markers in both sets are left out entirely.
    pub fn between(current: &[MarkerId], next: &[MarkerId]) -> Self {
        let mut activate: Vec<MarkerId> = Vec::new();
        for id in next {
            if !current.contains(id) && !activate.contains(id) {
                activate.push(*id);
            }
        }
        let mut deactivate: Vec<MarkerId> = Vec::new();
        for id in current {
            if !next.contains(id) && !deactivate.contains(id) {
                deactivate.push(*id);
            }
        }
        Self {
            activate,
            deactivate,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.activate.is_empty() && self.deactivate.is_empty()
    }

    pub fn apply<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for id in &self.activate {
            renderer.set_active(*id, true);
        }
        for id in &self.deactivate {
            renderer.set_active(*id, false);
        }
    }
}
