// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_stage --heading-base-level=0

//! Vantage Stage: an interactive pan/zoom camera for 2D content.
//!
//! A [`Stage`] owns one camera (`scale` + `position`, see
//! [`CameraState`](vantage_view2d::CameraState)) over a tree of [`Drawable`]
//! nodes and turns host input into camera changes:
//!
//! - **Bounds**: the world‑space union of all nodes is tracked
//!   ([`bounds`]), re‑measured when nodes are added, removed, or change
//!   geometry ([`content`]), and shared through a [`SharedBounds`] handle.
//! - **Fit**: once both the container and the bounds are known, the content is
//!   scaled to fit and centered. Zoom is reported relative to that fit scale.
//! - **Resize**: container size changes keep the same world point centered at
//!   the same zoom ratio ([`resize`]).
//! - **Zoom**: wheel zoom anchored at the pointer, animated reset, and
//!   zoom‑to‑element, always clamped to `[fit, fit * max_zoom]` ([`zoom`]).
//! - **Pan**: pointer drags and wheel scrolling, with inertial scroll tails
//!   after a pinch suppressed.
//! - **Notifications**: throttled position, zoom, bounds, and visible‑rect
//!   callbacks ([`notify`]).
//! - **Minimap**: an overview panel with a draggable viewport indicator
//!   ([`minimap`]).
//!
//! Every camera write goes through one clamp path, so no input can pan the
//! content out of view when [`Options::clamp_position`] is set.
//!
//! The stage never reads a clock. Every time‑dependent entry point takes
//! `now_ms`, and animations and trailing notifications advance in
//! [`Stage::frame`], which the host calls on each refresh tick.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use vantage_stage::{Drawable, Options, Stage};
//!
//! struct Card {
//!     id: u32,
//!     rect: Rect,
//! }
//!
//! impl Drawable for Card {
//!     type Key = u32;
//!     fn key(&self) -> u32 {
//!         self.id
//!     }
//!     fn client_rect(&self) -> Rect {
//!         self.rect
//!     }
//! }
//!
//! let cards = vec![Card { id: 1, rect: Rect::new(0.0, 0.0, 200.0, 100.0) }];
//!
//! let mut stage = Stage::new(Options::default(), 0);
//! assert!(stage.is_loading());
//!
//! stage.set_container_size(Size::new(400.0, 400.0));
//! stage.frame(16, &cards);
//!
//! // 200x100 content fits a 400x400 container at scale 2, centered vertically.
//! assert_eq!(stage.scale(), 2.0);
//! assert_eq!(stage.position(), Vec2::new(0.0, 100.0));
//! assert_eq!(stage.zoom(), 1.0);
//!
//! // At the fit zoom there is nowhere to pan.
//! stage.pointer_down(Point::new(100.0, 100.0));
//! stage.pointer_move(Point::new(140.0, 60.0));
//! stage.pointer_up();
//! assert_eq!(stage.position(), Vec2::new(0.0, 100.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library.
//! - `libm`: `no_std` float math through `libm`.
//! - `serde`: `Serialize`/`Deserialize` for [`Options`] with camelCase keys;
//!   missing keys take their defaults.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod content;
pub mod minimap;
pub mod notify;
pub mod options;
pub mod resize;
mod stage;
pub mod zoom;

pub use bounds::{BoundsTracker, SharedBounds};
pub use content::{ContentChanges, ContentTree, ContentWatcher, Drawable};
pub use minimap::{Minimap, MinimapLayout, MinimapPosition};
pub use notify::{ChangeNotifier, SubscriptionId};
pub use options::{MinimapOptions, Options};
pub use stage::{Stage, StageDebugInfo};
pub use zoom::ZoomOptions;

pub use vantage_event_state::wheel::{Modifiers, WheelAction, WheelEvent, ZoomDirection};
pub use vantage_view2d::{CameraState, ClampMode};
