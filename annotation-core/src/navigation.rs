use std::fmt;
use std::str::FromStr;

use crate::hit::Hit;
use crate::search::sorted_index;

/// A playhead within this many seconds before a hit's start counts as sitting on it.
pub const PLAYHEAD_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Previous,
    #[default]
    Next,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Next => "next",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "previous" => Ok(Self::Previous),
            "next" => Ok(Self::Next),
            other => Err(format!("Unknown direction: {other}")),
        }
    }
}

/// Index of the hit to jump to from `current_time`, `None` without hits.
///
/// The search finds the first hit at or after the offset playhead; that is
/// the next hit, one before it is the current one and two before it the
/// previous one.
///
/// The playhead is nudged forward by [`PLAYHEAD_TOLERANCE`] so that sitting
/// exactly on hit `k` (as after a seek here) counts as being at `k`: next
/// goes to `k + 1` and previous to `k - 1`.
pub fn target_index(
    hits: &[Hit],
    current_time: f64,
    audio_offset: f64,
    direction: Direction,
) -> Option<usize> {
    if hits.is_empty() {
        return None;
    }

    let starts: Vec<f64> = hits.iter().map(|hit| hit.start).collect();
    let index = sorted_index(&starts, &(current_time + audio_offset + PLAYHEAD_TOLERANCE));
    let last = hits.len() - 1;

    Some(match direction {
        Direction::Next => index.min(last),
        Direction::Previous => index.saturating_sub(2).min(last),
    })
}
