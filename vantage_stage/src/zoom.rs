// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom math: wheel steps, pointer‑anchored zoom, and zoom‑to‑element targets.
//!
//! All functions here are pure. The [`Stage`](crate::Stage) feeds them its
//! current camera and writes the result back through its clamp path.

use kurbo::{Point, Rect, Size, Vec2};
use vantage_event_state::wheel::ZoomDirection;
use vantage_view2d::{CameraState, has_area};

/// Options for [`Stage::zoom_to_element`](crate::Stage::zoom_to_element).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomOptions {
    /// Padding around the element as a fraction of its binding dimension.
    pub padding_percent: f64,
    /// Animation duration in seconds. Defaults to the stage's
    /// `zoom_animation_duration`.
    pub duration: Option<f64>,
}

/// Multiplicative zoom factor for one wheel step of `magnitude` pixels.
///
/// `zoom_speed` in `[0.1, 10]` maps linearly onto a per‑100px base step in
/// `[0.108, 0.9]`.
#[must_use]
pub fn wheel_zoom_factor(zoom_speed: f64, magnitude: f64) -> f64 {
    let base = 0.1 + (zoom_speed / 10.0) * 0.8;
    1.0 + (magnitude.abs() / 100.0) * base
}

/// Clamps `scale` into `[fit, fit * max_zoom]`.
#[must_use]
pub fn clamp_scale(scale: f64, fit: f64, max_zoom: f64) -> f64 {
    scale.max(fit).min(fit * max_zoom)
}

/// Zooms `camera` by one wheel step, keeping the world point under `anchor`
/// fixed on screen.
#[must_use]
pub fn zoom_at(
    camera: CameraState,
    anchor: Point,
    direction: ZoomDirection,
    magnitude: f64,
    zoom_speed: f64,
    fit: f64,
    max_zoom: f64,
) -> CameraState {
    let factor = wheel_zoom_factor(zoom_speed, magnitude);
    let scale = match direction {
        ZoomDirection::Out => camera.scale / factor,
        ZoomDirection::In => camera.scale * factor,
    };
    anchored(camera, anchor, clamp_scale(scale, fit, max_zoom))
}

/// Changes the scale of `camera` to `scale` around the screen point `anchor`.
#[must_use]
pub fn anchored(camera: CameraState, anchor: Point, scale: f64) -> CameraState {
    let world = camera.screen_to_world(anchor);
    CameraState::new(scale, anchor.to_vec2() - world.to_vec2() * scale)
}

/// Camera that frames the world‑space rectangle `target` inside `container`.
///
/// Padding of `padding_percent / 2` times the binding dimension is added on
/// each side before fitting; the scale is clamped to `[fit, fit * max_zoom]`
/// and the unpadded target is centered.
///
/// Returns `None` if the container has no area or `target` is not a finite,
/// well‑formed rectangle.
#[must_use]
pub fn element_target(
    target: Rect,
    container: Size,
    padding_percent: f64,
    fit: f64,
    max_zoom: f64,
) -> Option<CameraState> {
    let (w, h) = (target.width(), target.height());
    let finite = [target.x0, target.y0, w, h].iter().all(|v| v.is_finite());
    if !has_area(container) || !finite || w < 0.0 || h < 0.0 {
        return None;
    }

    let width_binds = container.width / w <= container.height / h;
    let padding = if padding_percent.is_finite() {
        padding_percent.max(0.0)
    } else {
        0.0
    };
    let pad = if width_binds { w } else { h } * padding / 2.0;
    let scale = (container.width / (w + 2.0 * pad)).min(container.height / (h + 2.0 * pad));
    let scale = clamp_scale(scale, fit, max_zoom);

    let position = Vec2::new(
        -target.x0 * scale + (container.width - w * scale) / 2.0,
        -target.y0 * scale + (container.height - h * scale) / 2.0,
    );
    Some(CameraState::new(scale, position))
}
