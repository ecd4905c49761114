use serde::Serialize;

/// One occurrence of a search term in the audio track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub start: f64,
    pub end: f64,
    pub term_index: usize,
    pub term: String,
}

impl Hit {
    /// Whether `time` falls inside the hit once widened by `offset` on both sides.
    pub fn is_active_at(&self, time: f64, offset: f64) -> bool {
        self.start - offset <= time && time < self.end + offset
    }
}
