// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_view2d --heading-base-level=0

//! Vantage View 2D: camera geometry for pan/zoom canvases.
//!
//! This crate provides the stateless half of a 2D canvas camera. It focuses on:
//! - A small [`CameraState`] value (uniform scale + screen‑space translation).
//! - Fitting content bounds into a container and centering them.
//! - Deriving the world‑space rectangle visible through the container.
//! - Clamping a camera position so content cannot be panned out of view.
//!
//! It does **not** own any scene graph, input handling, or animation. Callers
//! are expected to:
//! - Keep the authoritative [`CameraState`] somewhere (for example in
//!   `vantage_stage::Stage`).
//! - Measure content bounds in world space and the container in pixels.
//! - Route every camera write through [`ClampMode::apply`] so that the
//!   clamping policy is applied uniformly.
//!
//! ## Fitting content
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use vantage_view2d::reset_transform;
//!
//! let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
//! let container = Size::new(400.0, 400.0);
//!
//! let camera = reset_transform(bounds, container);
//! assert_eq!(camera.scale, 2.0);
//! assert_eq!(camera.position, Vec2::new(0.0, 100.0));
//! ```
//!
//! ## Visible region
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use vantage_view2d::visible_rect;
//!
//! // Content is translated 100px right and drawn at 2x.
//! let visible = visible_rect(Vec2::new(100.0, 0.0), 2.0, Size::new(800.0, 600.0));
//! assert_eq!(visible.x0, -50.0);
//! assert_eq!(visible.x1, 350.0);
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis‑aligned with a **uniform** scale: `screen = world * scale + position`.
//! - Every function treats zero‑area bounds or containers as "nothing to fit"
//!   and returns safe defaults (scale `1`, position zero) instead of NaN.
//! - Clamping is relative to the *reset‑fit* extents of the content, scaled to
//!   the current zoom, so overscroll is prevented at any zoom level.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod fit;
mod modes;

pub use camera::CameraState;
pub use fit::{
    centered_position, clamp_position, fit_scale, has_area, reset_transform, visible_rect,
};
pub use modes::ClampMode;
