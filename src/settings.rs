//! Runtime settings and preferences
//!
//! Stored as JSON. Simulation constants are not configurable; these only
//! shape how the run loop and views use them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_LOOKAHEAD, TRAIL_WINDOW};
use crate::sim::Orientation;

/// Run loop and view preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Orientation of the first run
    pub start_mode: Orientation,

    /// Cap on a single frame's dt (seconds). `None` passes stalls through
    /// unchanged, so a backgrounded tab resumes with one long step.
    pub max_frame_dt: Option<f64>,

    // === View ===
    /// Forward distance visible ahead of the camera
    pub camera_lookahead: f64,
    /// Most recent trail points considered for drawing
    pub trail_window: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_mode: Orientation::Horizontal,
            max_frame_dt: None,
            camera_lookahead: CAMERA_LOOKAHEAD,
            trail_window: TRAIL_WINDOW,
        }
    }
}

impl Settings {
    /// Frame dt after applying the configured cap
    pub fn frame_dt(&self, dt: f64) -> f64 {
        match self.max_frame_dt {
            Some(max) if dt > max => max,
            _ => dt,
        }
    }

    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Malformed settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not write settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}
