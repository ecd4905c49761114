use serde::{Deserialize, Serialize};

pub const DEFAULT_AUDIO_OFFSET: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Draw the previous/next buttons into the control bar.
    pub show_buttons: bool,
    /// Mark the hits under the playhead as active.
    pub show_active: bool,
    /// Lead-in in seconds, applied when seeking to a hit and when testing activity.
    pub audio_offset: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_buttons: true,
            show_active: true,
            audio_offset: DEFAULT_AUDIO_OFFSET,
        }
    }
}

/// Partial options as passed to the plugin. Absent keys leave the current value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPatch {
    pub show_buttons: Option<bool>,
    pub show_active: Option<bool>,
    pub audio_offset: Option<f64>,
}

impl Config {
    pub fn merge(self, patch: &ConfigPatch) -> Self {
        Self {
            show_buttons: patch.show_buttons.unwrap_or(self.show_buttons),
            show_active: patch.show_active.unwrap_or(self.show_active),
            audio_offset: patch.audio_offset.unwrap_or(self.audio_offset),
        }
    }
}
