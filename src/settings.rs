//! Player settings and preferences
//!
//! Stored as one JSON blob in the profile store. Missing fields fall back to
//! their defaults so older blobs keep loading.

use serde::{Deserialize, Serialize};

/// Player settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Play sound effects
    pub sound_enabled: bool,
    /// Play haptic feedback
    pub haptics_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            haptics_enabled: true,
        }
    }
}

/// Partial settings update; `None` leaves the field as is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haptics_enabled: Option<bool>,
}

impl Settings {
    /// Apply a partial update
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(sound) = patch.sound_enabled {
            self.sound_enabled = sound;
        }
        if let Some(haptics) = patch.haptics_enabled {
            self.haptics_enabled = haptics;
        }
    }

    /// Copy with a partial update applied
    pub fn merged(mut self, patch: SettingsPatch) -> Self {
        self.apply(patch);
        self
    }
}
