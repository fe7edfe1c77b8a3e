// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_event_state --heading-base-level=0

//! Vantage Event State: input state machines for pan/zoom canvases.
//!
//! This crate provides small, focused state machines that turn raw pointer and
//! wheel input into camera intents. Each module handles one interaction:
//!
//! - [`drag`]: `Idle → Dragging → Idle` pointer gestures producing pan deltas
//! - [`wheel`]: split a wheel stream into zoom (modifier held) and pan intents
//! - [`intent`]: classify wheel deltas as deliberate or inertial
//!
//! None of these touch camera state directly. They return deltas and actions
//! for the owner of the camera (for example `vantage_stage::Stage`) to apply
//! through its own clamping policy.
//!
//! ## Drag
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use vantage_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 10.0));
//! let delta = drag.update(Point::new(15.0, 12.0));
//! // delta is Some((5.0, 2.0))
//! drag.end();
//! # }
//! ```
//!
//! ## Wheel
//!
//! ```rust
//! # #[cfg(feature = "wheel")]
//! # fn example() {
//! use kurbo::{Point, Vec2};
//! use vantage_event_state::wheel::{Modifiers, WheelAction, WheelConfig, WheelEvent, WheelRouter};
//!
//! let mut router = WheelRouter::new(WheelConfig::default(), 0);
//! let event = WheelEvent::new(Vec2::new(0.0, 40.0), Modifiers::CTRL, Some(Point::new(5.0, 5.0)));
//! assert!(matches!(router.route(event, 16), WheelAction::Zoom { .. }));
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: drag state tracking (requires `kurbo`)
//! - `wheel`: wheel routing (requires `kurbo` and `bitflags`)
//! - `serde`: `Serialize`/`Deserialize` for [`intent::IntentConfig`]
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

#[cfg(feature = "drag")]
pub mod drag;
pub mod intent;
#[cfg(feature = "wheel")]
pub mod wheel;
