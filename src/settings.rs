// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Settings and configuration constants.
//!
//! Compile-time defaults live in the constants below. A `Settings` value
//! loaded from a TOML file can override the ones that make sense to tune
//! per installation.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// CROP SETTINGS
// ============================================================================
/// Distance (screen pixels) within which the pointer grabs an edge or corner
const GRAB_RADIUS: f64 = 6.0;

/// The default crop is inset from the visible image by 1/N of its size
/// on every side
const DEFAULT_INSET_DIVISOR: f64 = 6.0;

// ============================================================================
// VIEWPORT SETTINGS
// ============================================================================
/// Minimum zoom level (2% of original size)
const MIN_ZOOM: f64 = 0.02;

/// Maximum zoom level (50x original size)
const MAX_ZOOM: f64 = 50.0;

/// Largest zoom used when fitting an image to the screen.
/// Small images are shown at 1:1 instead of being blown up.
const MAX_FIT_ZOOM: f64 = 1.0;

// ============================================================================
// MOUSE SETTINGS
// ============================================================================
/// Pointer travel (screen pixels) before a press turns into a drag
const DRAG_THRESHOLD: f64 = 2.0;

// ============================================================================
// CLI SETTINGS
// ============================================================================
/// Virtual screen size used when replaying pointer scripts
const SCREEN_WIDTH: f64 = 1280.0;
const SCREEN_HEIGHT: f64 = 800.0;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Crop tool settings
pub mod crop {
    /// Grab radius around edges and corners (screen pixels)
    pub const GRAB_RADIUS: f64 = super::GRAB_RADIUS;

    /// Inset divisor for the default crop rectangle
    pub const DEFAULT_INSET_DIVISOR: f64 = super::DEFAULT_INSET_DIVISOR;
}

/// Viewport zoom limits
pub mod viewport {
    pub const MIN_ZOOM: f64 = super::MIN_ZOOM;
    pub const MAX_ZOOM: f64 = super::MAX_ZOOM;
    pub const MAX_FIT_ZOOM: f64 = super::MAX_FIT_ZOOM;
}

/// Mouse gesture settings
pub mod mouse {
    pub const DRAG_THRESHOLD: f64 = super::DRAG_THRESHOLD;
}

/// Command-line replay settings
pub mod cli {
    pub const SCREEN_WIDTH: f64 = super::SCREEN_WIDTH;
    pub const SCREEN_HEIGHT: f64 = super::SCREEN_HEIGHT;
}

// ============================================================================
// RUNTIME OVERRIDES
// ============================================================================

/// Errors from loading a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Tunable settings, usually read from `cropper.toml`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grab radius in screen pixels
    pub grab_radius: f64,
    /// Inset divisor for the default crop
    pub inset_divisor: f64,
    /// Press-to-drag threshold in screen pixels
    pub drag_threshold: f64,
    /// Largest zoom used by `ViewPort::fit`
    pub max_fit_zoom: f64,
    /// Screen size used when replaying scripts
    pub screen_width: f64,
    pub screen_height: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grab_radius: crop::GRAB_RADIUS,
            inset_divisor: crop::DEFAULT_INSET_DIVISOR,
            drag_threshold: mouse::DRAG_THRESHOLD,
            max_fit_zoom: viewport::MAX_FIT_ZOOM,
            screen_width: cli::SCREEN_WIDTH,
            screen_height: cli::SCREEN_HEIGHT,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a settings file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_toml(&text)?;
        tracing::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.grab_radius >= 0.0) {
            return Err(ConfigError::Invalid {
                key: "grab_radius",
                reason: format!("must be non-negative, got {}", self.grab_radius),
            });
        }
        // 2 or less leaves nothing between the insets
        if !(self.inset_divisor > 2.0) {
            return Err(ConfigError::Invalid {
                key: "inset_divisor",
                reason: format!("must be greater than 2, got {}", self.inset_divisor),
            });
        }
        if !(self.drag_threshold >= 0.0) {
            return Err(ConfigError::Invalid {
                key: "drag_threshold",
                reason: format!("must be non-negative, got {}", self.drag_threshold),
            });
        }
        if !(viewport::MIN_ZOOM..=viewport::MAX_ZOOM).contains(&self.max_fit_zoom) {
            return Err(ConfigError::Invalid {
                key: "max_fit_zoom",
                reason: format!(
                    "must be within {}..={}, got {}",
                    viewport::MIN_ZOOM,
                    viewport::MAX_ZOOM,
                    self.max_fit_zoom
                ),
            });
        }
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::Invalid {
                key: "screen_width/screen_height",
                reason: "screen size must be positive".to_string(),
            });
        }
        Ok(())
    }
}
