// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stage configuration.
//!
//! Options are plain data. Out‑of‑range values are never rejected: call
//! [`Options::sanitized`] (the stage does this for you) to clamp every field
//! into its supported range.

use vantage_event_state::intent::IntentConfig;
use vantage_event_state::wheel::WheelConfig;
use vantage_view2d::ClampMode;

use crate::minimap::MinimapPosition;

/// Lowest accepted `max_zoom` (zoom cannot be capped below the fit scale).
pub const ABSOLUTE_MIN_ZOOM: f64 = 1.0;
/// Highest accepted `max_zoom`.
pub const ABSOLUTE_MAX_ZOOM: f64 = 100.0;
/// Lowest accepted `zoom_speed`.
pub const ABSOLUTE_MIN_ZOOM_SPEED: f64 = 0.1;
/// Highest accepted `zoom_speed`.
pub const ABSOLUTE_MAX_ZOOM_SPEED: f64 = 10.0;
/// Lowest accepted `pan_speed`.
pub const ABSOLUTE_MIN_PAN_SPEED: f64 = 0.1;
/// Highest accepted `pan_speed`.
pub const ABSOLUTE_MAX_PAN_SPEED: f64 = 10.0;

/// Configuration for a [`Stage`](crate::Stage).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// Maximum zoom as a multiple of the fit scale, in `[1, 100]`.
    pub max_zoom: f64,
    /// Zoom per wheel tick, in `[0.1, 10]`.
    pub zoom_speed: f64,
    /// Pixels panned per wheel tick, in `[0.1, 10]`.
    pub pan_speed: f64,
    /// Duration of reset and zoom‑to‑element animations, in seconds.
    pub zoom_animation_duration: f64,
    /// Window (ms) after a zoom gesture in which ambiguous wheel input is not
    /// treated as panning.
    pub zoom_pan_transition_delay: u64,
    /// Whether camera positions are clamped to the content's fit extents.
    pub clamp_position: bool,
    /// Minimum interval (ms) between two deliveries of the same notification.
    pub callbacks_throttle_ms: u64,
    /// Expose the bounds outline through [`Stage::debug_overlay`](crate::Stage::debug_overlay).
    pub debug: bool,
    /// Minimap settings.
    pub minimap: MinimapOptions,
    /// Wheel intent detector tuning.
    pub scroll_intent: IntentConfig,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_zoom: ABSOLUTE_MAX_ZOOM,
            zoom_speed: 5.0,
            pan_speed: 1.0,
            zoom_animation_duration: 0.3,
            zoom_pan_transition_delay: 400,
            clamp_position: true,
            callbacks_throttle_ms: 25,
            debug: false,
            minimap: MinimapOptions::default(),
            scroll_intent: IntentConfig::default(),
        }
    }
}

impl Options {
    /// Returns a copy with every field clamped into its supported range.
    ///
    /// Non‑finite numbers fall back to the default for that field.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            max_zoom: clamp_or(
                self.max_zoom,
                ABSOLUTE_MIN_ZOOM,
                ABSOLUTE_MAX_ZOOM,
                defaults.max_zoom,
            ),
            zoom_speed: clamp_or(
                self.zoom_speed,
                ABSOLUTE_MIN_ZOOM_SPEED,
                ABSOLUTE_MAX_ZOOM_SPEED,
                defaults.zoom_speed,
            ),
            pan_speed: clamp_or(
                self.pan_speed,
                ABSOLUTE_MIN_PAN_SPEED,
                ABSOLUTE_MAX_PAN_SPEED,
                defaults.pan_speed,
            ),
            zoom_animation_duration: clamp_or(
                self.zoom_animation_duration,
                0.0,
                f64::MAX,
                defaults.zoom_animation_duration,
            ),
            minimap: self.minimap.sanitized(),
            ..self
        }
    }

    /// The clamping policy selected by [`Options::clamp_position`].
    pub fn clamp_mode(&self) -> ClampMode {
        ClampMode::from_flag(self.clamp_position)
    }

    /// Wheel router settings derived from these options.
    pub fn wheel_config(&self) -> WheelConfig {
        WheelConfig {
            pan_speed: self.pan_speed,
            zoom_pan_transition_delay_ms: self.zoom_pan_transition_delay,
            intent: self.scroll_intent,
        }
    }
}

/// Minimap settings.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MinimapOptions {
    /// Whether the minimap is shown (and accepts input).
    pub show: bool,
    /// Minimap size as a fraction of the container, in `[0, 1]`.
    pub size: f64,
    /// Corner the minimap starts in.
    pub position: MinimapPosition,
}

impl Default for MinimapOptions {
    fn default() -> Self {
        Self {
            show: false,
            size: 0.2,
            position: MinimapPosition::default(),
        }
    }
}

impl MinimapOptions {
    fn sanitized(self) -> Self {
        Self {
            size: clamp_or(self.size, 0.0, 1.0, Self::default().size),
            ..self
        }
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
