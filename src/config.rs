//! Configuration
//!
//! Window and patrol settings, either built in code or read from JSON:
//!
//! ```json
//! {
//!   "window": { "title": "Patrol", "width": 1280, "height": 720 },
//!   "camera_dolly": true,
//!   "patrols": [
//!     {
//!       "name": "panda",
//!       "waypoints": [[0, -1, 0], [0, 1, 0]],
//!       "durations": [3, 3],
//!       "turn_fraction": 0.2
//!     }
//!   ]
//! }
//! ```
//!
//! Paired settings (width/height, x/y) must be given together or not at all.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{PatrolError, Result};
use crate::path::{
    DEFAULT_HEADING_OFFSET, DEFAULT_TURN_FRACTION, DurationSpec, PatrolOptions, PatrolPlan,
    Validation, plan::DEFAULT_SEGMENT_DURATION,
};

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// Validated window settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    /// `(width, height)` in pixels; `None` lets the host choose.
    pub size: Option<(u32, u32)>,
    /// `(x, y)` of the top-left corner; `None` lets the host choose.
    pub origin: Option<(i32, i32)>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Patrol".into(),
            size: None,
            origin: None,
        }
    }
}

impl WindowConfig {
    /// Builds a window config from individually optional parts.
    ///
    /// Fails if only one half of the size or origin pair is given.
    pub fn from_parts(
        title: impl Into<String>,
        width: Option<u32>,
        height: Option<u32>,
        x: Option<i32>,
        y: Option<i32>,
    ) -> Result<Self> {
        Ok(Self {
            title: title.into(),
            size: paired("width", "height", width, height)?,
            origin: paired("x", "y", x, y)?,
        })
    }
}

fn paired<T>(first: &str, second: &str, a: Option<T>, b: Option<T>) -> Result<Option<(T, T)>> {
    match (a, b) {
        (Some(a), Some(b)) => Ok(Some((a, b))),
        (None, None) => Ok(None),
        (Some(_), None) => Err(PatrolError::Config(format!(
            "`{first}` was given without `{second}`"
        ))),
        (None, Some(_)) => Err(PatrolError::Config(format!(
            "`{second}` was given without `{first}`"
        ))),
    }
}

/// Window settings as they appear in a config file, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSection {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl WindowSection {
    pub fn to_window_config(&self) -> Result<WindowConfig> {
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| WindowConfig::default().title);
        WindowConfig::from_parts(title, self.width, self.height, self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Patrol
// ---------------------------------------------------------------------------

fn default_patrol_name() -> String {
    "patrol".into()
}

fn default_duration() -> f32 {
    DEFAULT_SEGMENT_DURATION
}

fn default_turn_fraction() -> f32 {
    DEFAULT_TURN_FRACTION
}

fn default_heading_offset() -> f32 {
    DEFAULT_HEADING_OFFSET
}

/// One patrolling actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatrolConfig {
    #[serde(default = "default_patrol_name")]
    pub name: String,
    pub waypoints: Vec<[f32; 3]>,
    /// A single duration for every segment, or a per-segment list.
    #[serde(default)]
    pub durations: Option<DurationSpec>,
    /// Used when `durations` is absent.
    #[serde(default = "default_duration")]
    pub default_duration: f32,
    #[serde(default = "default_turn_fraction")]
    pub turn_fraction: f32,
    #[serde(default = "default_heading_offset")]
    pub heading_offset: f32,
    /// Reject duplicate consecutive waypoints and non-positive durations.
    #[serde(default)]
    pub strict: bool,
}

impl PatrolConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, waypoints: &[Vec3]) -> Self {
        Self {
            name: name.into(),
            waypoints: waypoints.iter().map(|w| w.to_array()).collect(),
            durations: None,
            default_duration: DEFAULT_SEGMENT_DURATION,
            turn_fraction: DEFAULT_TURN_FRACTION,
            heading_offset: DEFAULT_HEADING_OFFSET,
            strict: false,
        }
    }

    #[must_use]
    pub fn with_durations(mut self, durations: impl Into<DurationSpec>) -> Self {
        self.durations = Some(durations.into());
        self
    }

    #[must_use]
    pub fn waypoints(&self) -> Vec<Vec3> {
        self.waypoints.iter().copied().map(Vec3::from_array).collect()
    }

    #[must_use]
    pub fn options(&self) -> PatrolOptions {
        PatrolOptions {
            turn_fraction: self.turn_fraction,
            heading_offset: self.heading_offset,
            default_duration: self.default_duration,
            validation: if self.strict {
                Validation::Strict
            } else {
                Validation::Lenient
            },
        }
    }

    pub fn build_plan(&self) -> Result<PatrolPlan> {
        PatrolPlan::build(&self.waypoints(), self.durations.clone(), &self.options())
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowSection,
    pub patrols: Vec<PatrolConfig>,
    /// Move the camera back and up over time.
    pub camera_dolly: bool,
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::info!(
            "Loaded config from {}: {} patrol(s)",
            path.display(),
            config.patrols.len()
        );
        Ok(config)
    }
}
