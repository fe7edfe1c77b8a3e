// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel routing: decide whether a wheel event zooms, pans, or is dropped.
//!
//! Browsers and most windowing systems report trackpad pinch gestures as wheel
//! events with the control (or command) modifier synthesized. [`WheelRouter`]
//! uses that to split one wheel stream into zoom and pan intents:
//!
//! - Control/meta held: [`WheelAction::Zoom`] anchored at the pointer.
//! - Otherwise: [`WheelAction::Pan`] by `-delta * sqrt(pan_speed)`, unless the
//!   event arrives within the zoom→pan transition window after a zoom *and*
//!   the per‑router [`ScrollIntent`] detector classifies it as inertial.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vantage_event_state::wheel::{Modifiers, WheelAction, WheelConfig, WheelEvent, WheelRouter, ZoomDirection};
//!
//! let mut router = WheelRouter::new(WheelConfig::default(), 0);
//! let pointer = Some(Point::new(100.0, 80.0));
//!
//! let zoom = router.route(WheelEvent::new(Vec2::new(0.0, -50.0), Modifiers::CTRL, pointer), 10);
//! assert_eq!(
//!     zoom,
//!     WheelAction::Zoom { anchor: Point::new(100.0, 80.0), direction: ZoomDirection::In, magnitude: 50.0 }
//! );
//!
//! // Long after the zoom, plain wheel input pans.
//! let pan = router.route(WheelEvent::new(Vec2::new(4.0, 8.0), Modifiers::empty(), pointer), 5_000);
//! assert_eq!(pan, WheelAction::Pan(Vec2::new(-4.0, -8.0)));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::{Point, Vec2};

use crate::intent::{IntentConfig, ScrollIntent};

bitflags::bitflags! {
    /// Keyboard modifiers held during a wheel event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control key (also synthesized for trackpad pinch gestures).
        const CTRL  = 0b0000_0001;
        /// Meta / command key.
        const META  = 0b0000_0010;
        /// Shift key.
        const SHIFT = 0b0000_0100;
        /// Alt / option key.
        const ALT   = 0b0000_1000;
    }
}

impl Modifiers {
    /// Modifiers that turn wheel input into zoom input.
    pub const ZOOM: Self = Self::CTRL.union(Self::META);

    /// Returns `true` if any zoom modifier is held.
    pub fn is_zoom(self) -> bool {
        self.intersects(Self::ZOOM)
    }
}

/// One wheel input event in container space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Scroll delta in pixels. Positive `y` scrolls down.
    pub delta: Vec2,
    /// Modifiers held while scrolling.
    pub modifiers: Modifiers,
    /// Pointer position in container space, if known.
    pub pointer: Option<Point>,
}

impl WheelEvent {
    /// Creates a wheel event.
    pub const fn new(delta: Vec2, modifiers: Modifiers, pointer: Option<Point>) -> Self {
        Self {
            delta,
            modifiers,
            pointer,
        }
    }
}

/// Zoom direction derived from the sign of a vertical wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Magnify (scale grows).
    In,
    /// Shrink (scale decreases).
    Out,
}

impl ZoomDirection {
    /// Scrolling down zooms out, anything else zooms in.
    pub fn from_delta(dy: f64) -> Self {
        if dy > 0.0 { Self::Out } else { Self::In }
    }
}

/// What the owner of the camera should do with a wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelAction {
    /// Zoom around `anchor` (container space) by a step of `magnitude`.
    Zoom {
        /// Pointer position that must stay fixed.
        anchor: Point,
        /// Whether to zoom in or out.
        direction: ZoomDirection,
        /// Absolute vertical delta of the event.
        magnitude: f64,
    },
    /// Translate the camera position by this delta (container space).
    Pan(Vec2),
    /// Drop the event.
    Ignore,
}

/// Tuning for [`WheelRouter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Pan speed multiplier in `[0.1, 10]`; pans scale by its square root.
    pub pan_speed: f64,
    /// Window (ms) after a zoom in which non‑intentional pans are dropped.
    pub zoom_pan_transition_delay_ms: u64,
    /// Intent detector tuning.
    pub intent: IntentConfig,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            pan_speed: 1.0,
            zoom_pan_transition_delay_ms: 400,
            intent: IntentConfig::default(),
        }
    }
}

/// Splits a wheel stream into zoom and pan actions.
#[derive(Clone, Debug)]
pub struct WheelRouter {
    config: WheelConfig,
    intent: ScrollIntent,
    last_zoom_ms: u64,
}

impl WheelRouter {
    /// Creates a router. `now_ms` seeds the zoom→pan window, so input right
    /// after creation is held to the same intent check as input after a zoom.
    pub fn new(config: WheelConfig, now_ms: u64) -> Self {
        Self {
            config,
            intent: ScrollIntent::new(config.intent),
            last_zoom_ms: now_ms,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> WheelConfig {
        self.config
    }

    /// Replaces the configuration. Intent history is reset if its tuning changed.
    pub fn set_config(&mut self, config: WheelConfig) {
        if config.intent != self.config.intent {
            self.intent = ScrollIntent::new(config.intent);
        }
        self.config = config;
    }

    /// Time of the last zoom gesture (or zoom modifier release).
    pub fn last_zoom_ms(&self) -> u64 {
        self.last_zoom_ms
    }

    /// Classifies `event`, observed at `now_ms`.
    pub fn route(&mut self, event: WheelEvent, now_ms: u64) -> WheelAction {
        let Some(anchor) = event.pointer else {
            return WheelAction::Ignore;
        };

        if event.modifiers.is_zoom() {
            self.last_zoom_ms = now_ms;
            return WheelAction::Zoom {
                anchor,
                direction: ZoomDirection::from_delta(event.delta.y),
                magnitude: event.delta.y.abs(),
            };
        }

        let dominant = if event.delta.x.abs() > event.delta.y.abs() {
            event.delta.x
        } else {
            event.delta.y
        };
        let intentional = self.intent.check(dominant, now_ms);
        let since_zoom = now_ms.saturating_sub(self.last_zoom_ms);
        if !intentional && since_zoom <= self.config.zoom_pan_transition_delay_ms {
            return WheelAction::Ignore;
        }

        WheelAction::Pan(-event.delta * self.config.pan_speed.max(0.0).sqrt())
    }

    /// Notes that `released` modifiers were let go at `now_ms`.
    ///
    /// Releasing a zoom modifier re‑anchors the zoom→pan window, so the tail of
    /// a pinch gesture is not read as a pan even without a final zoom event.
    pub fn modifier_released(&mut self, released: Modifiers, now_ms: u64) {
        if released.is_zoom() {
            self.last_zoom_ms = now_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTER: Option<Point> = Some(Point::new(50.0, 60.0));

    fn event(dx: f64, dy: f64, modifiers: Modifiers) -> WheelEvent {
        WheelEvent::new(Vec2::new(dx, dy), modifiers, POINTER)
    }

    #[test]
    fn missing_pointer_is_ignored() {
        let mut router = WheelRouter::new(WheelConfig::default(), 0);
        let ev = WheelEvent::new(Vec2::new(0.0, 10.0), Modifiers::CTRL, None);
        assert_eq!(router.route(ev, 10_000), WheelAction::Ignore);
        assert_eq!(router.last_zoom_ms(), 0);
    }

    #[test]
    fn ctrl_and_meta_route_to_zoom() {
        let mut router = WheelRouter::new(WheelConfig::default(), 0);
        assert_eq!(
            router.route(event(0.0, 30.0, Modifiers::CTRL), 100),
            WheelAction::Zoom {
                anchor: Point::new(50.0, 60.0),
                direction: ZoomDirection::Out,
                magnitude: 30.0
            }
        );
        assert_eq!(router.last_zoom_ms(), 100);

        let action = router.route(event(0.0, -12.0, Modifiers::META | Modifiers::SHIFT), 200);
        assert!(matches!(
            action,
            WheelAction::Zoom {
                direction: ZoomDirection::In,
                ..
            }
        ));
        assert_eq!(router.last_zoom_ms(), 200);
    }

    #[test]
    fn pan_scales_by_square_root_of_speed() {
        let config = WheelConfig {
            pan_speed: 4.0,
            ..WheelConfig::default()
        };
        let mut router = WheelRouter::new(config, 0);
        assert_eq!(
            router.route(event(3.0, -5.0, Modifiers::empty()), 10_000),
            WheelAction::Pan(Vec2::new(-6.0, 10.0))
        );
    }

    #[test]
    fn inertial_tail_after_zoom_is_suppressed() {
        let config = WheelConfig {
            intent: IntentConfig {
                stability: 2,
                ..IntentConfig::default()
            },
            ..WheelConfig::default()
        };
        let mut router = WheelRouter::new(config, 0);

        // Build a decaying history well away from any zoom.
        let mut t = 10_000;
        for dy in [40.0, 30.0, 20.0, 10.0] {
            router.route(event(0.0, dy, Modifiers::empty()), t);
            t += 16;
        }
        router.route(event(0.0, -10.0, Modifiers::CTRL), t);
        t += 16;

        assert_eq!(
            router.route(event(0.0, 5.0, Modifiers::empty()), t),
            WheelAction::Ignore
        );

        // Same decaying input outside the window still pans.
        let late = t + 1_000;
        assert!(matches!(
            router.route(event(0.0, 4.0, Modifiers::empty()), late),
            WheelAction::Pan(_)
        ));
    }

    #[test]
    fn intentional_input_pans_even_right_after_zoom() {
        let mut router = WheelRouter::new(WheelConfig::default(), 0);
        router.route(event(0.0, 10.0, Modifiers::CTRL), 1_000);
        // Fresh history: the detector accepts the event.
        assert_eq!(
            router.route(event(0.0, 7.0, Modifiers::empty()), 1_010),
            WheelAction::Pan(Vec2::new(0.0, -7.0))
        );
    }

    #[test]
    fn zoom_modifier_release_reanchors_window() {
        let mut router = WheelRouter::new(WheelConfig::default(), 0);
        router.modifier_released(Modifiers::SHIFT, 500);
        assert_eq!(router.last_zoom_ms(), 0);
        router.modifier_released(Modifiers::META, 700);
        assert_eq!(router.last_zoom_ms(), 700);
    }

    #[test]
    fn changing_intent_config_resets_history() {
        let mut router = WheelRouter::new(WheelConfig::default(), 0);
        let mut config = router.config();
        config.pan_speed = 9.0;
        router.set_config(config);
        assert_eq!(router.config().pan_speed, 9.0);

        config.intent.delay_ms = 5;
        router.set_config(config);
        assert_eq!(router.config().intent.delay_ms, 5);
    }
}
