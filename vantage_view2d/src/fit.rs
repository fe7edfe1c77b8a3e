// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless fit, centering, visibility, and clamping math.

use kurbo::{Rect, Size, Vec2};

use crate::CameraState;

/// Returns `true` if `size` has a finite, strictly positive area.
#[must_use]
pub fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.width.is_finite() && size.height.is_finite()
}

/// Largest uniform scale at which `bounds` fits entirely inside `container`.
///
/// Returns `1.0` when either the bounds or the container has no area.
#[must_use]
pub fn fit_scale(bounds: Rect, container: Size) -> f64 {
    if !has_area(bounds.size()) || !has_area(container) {
        return 1.0;
    }
    let sx = container.width / bounds.width();
    let sy = container.height / bounds.height();
    let scale = sx.min(sy);
    if scale > 0.0 && scale.is_finite() {
        scale
    } else {
        1.0
    }
}

/// Screen position that centers `bounds`, drawn at `scale`, inside `container`.
///
/// Returns zero when either the bounds or the container has no area.
#[must_use]
pub fn centered_position(bounds: Rect, container: Size, scale: f64) -> Vec2 {
    if !has_area(bounds.size()) || !has_area(container) {
        return Vec2::ZERO;
    }
    Vec2::new(
        (container.width - bounds.width() * scale) / 2.0 - bounds.x0 * scale,
        (container.height - bounds.height() * scale) / 2.0 - bounds.y0 * scale,
    )
}

/// The canonical "fit and center" camera for `bounds` inside `container`.
///
/// This is the baseline every zoom ratio is measured against.
#[must_use]
pub fn reset_transform(bounds: Rect, container: Size) -> CameraState {
    let scale = fit_scale(bounds, container);
    CameraState::new(scale, centered_position(bounds, container, scale))
}

/// World‑space rectangle visible through `container` for the given camera.
///
/// A non‑positive scale is treated as `1.0`.
#[must_use]
pub fn visible_rect(position: Vec2, scale: f64, container: Size) -> Rect {
    let scale = if scale > 0.0 && scale.is_finite() {
        scale
    } else {
        1.0
    };
    let left = -position.x / scale;
    let top = -position.y / scale;
    Rect::new(
        left,
        top,
        left + container.width / scale,
        top + container.height / scale,
    )
}

/// Restricts `position` so the view cannot pan past the content's reset‑fit
/// extents, scaled to the current `scale`.
///
/// The allowed range is derived from the rectangle visible at the reset
/// transform; its edges are multiplied by `scale`, which keeps the limits
/// meaningful while zoomed in past the fit scale. At the fit scale the range
/// collapses to the centered position.
///
/// If the container has no area the position is returned unchanged.
#[must_use]
pub fn clamp_position(position: Vec2, scale: f64, container: Size, bounds: Rect) -> Vec2 {
    if !has_area(container) {
        return position;
    }
    let reset = reset_transform(bounds, container);
    let extents = visible_rect(reset.position, reset.scale, container);

    let max_x = -extents.x0 * scale;
    let min_x = -extents.x1 * scale + container.width;
    let max_y = -extents.y0 * scale;
    let min_y = -extents.y1 * scale + container.height;

    // `min` first, then `max`: if the range is inverted (scale below fit),
    // the lower limit wins, which keeps this idempotent.
    Vec2::new(
        min_x.max(max_x.min(position.x)),
        min_y.max(max_y.min(position.y)),
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{centered_position, clamp_position, fit_scale, reset_transform, visible_rect};

    const EPS: f64 = 1e-9;

    #[test]
    fn fit_scenario_wide_content_in_square_container() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
        let container = Size::new(400.0, 400.0);
        let camera = reset_transform(bounds, container);
        assert_eq!(camera.scale, 2.0);
        assert_eq!(camera.position, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn fitted_bounds_are_contained_and_touch_binding_axis() {
        let cases = [
            (Rect::new(-50.0, 10.0, 150.0, 60.0), Size::new(800.0, 600.0)),
            (Rect::new(3.0, 4.0, 7.0, 104.0), Size::new(320.0, 240.0)),
            (Rect::new(0.0, 0.0, 1.0, 1.0), Size::new(1024.0, 768.0)),
            (Rect::new(-1e4, -2e4, 3e4, 1e3), Size::new(640.0, 1280.0)),
        ];
        for (bounds, container) in cases {
            let camera = reset_transform(bounds, container);
            let screen = camera.world_rect_to_screen(bounds);
            assert!(screen.x0 >= -EPS && screen.y0 >= -EPS, "{screen:?} in {container:?}");
            assert!(screen.x1 <= container.width + 1e-6);
            assert!(screen.y1 <= container.height + 1e-6);
            let touches_x = (screen.width() - container.width).abs() < 1e-6;
            let touches_y = (screen.height() - container.height).abs() < 1e-6;
            assert!(touches_x || touches_y, "binding axis must be filled");
        }
    }

    #[test]
    fn zero_area_inputs_use_safe_defaults() {
        let empty = Rect::new(5.0, 5.0, 5.0, 9.0);
        let container = Size::new(400.0, 300.0);
        assert_eq!(fit_scale(empty, container), 1.0);
        assert_eq!(centered_position(empty, container, 1.0), Vec2::ZERO);

        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(fit_scale(bounds, Size::ZERO), 1.0);
        assert_eq!(centered_position(bounds, Size::ZERO, 1.0), Vec2::ZERO);

        let camera = reset_transform(empty, Size::ZERO);
        assert!(camera.scale.is_finite() && camera.position.x.is_finite());
    }

    #[test]
    fn visible_rect_maps_back_to_container_corners() {
        let position = Vec2::new(-120.0, 35.0);
        let scale = 1.75;
        let container = Size::new(640.0, 480.0);
        let visible = visible_rect(position, scale, container);

        let camera = crate::CameraState::new(scale, position);
        let top_left = camera.world_to_screen(visible.origin());
        let bottom_right = camera.world_to_screen(Point::new(visible.x1, visible.y1));
        assert!(top_left.distance(Point::ZERO) < EPS);
        assert!(bottom_right.distance(Point::new(640.0, 480.0)) < 1e-6);
    }

    #[test]
    fn clamp_at_fit_scale_pins_to_center() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
        let container = Size::new(400.0, 400.0);
        let reset = reset_transform(bounds, container);

        let moved = reset.position + Vec2::new(75.0, -40.0);
        let clamped = clamp_position(moved, reset.scale, container, bounds);
        assert!((clamped - reset.position).hypot() < EPS);
    }

    #[test]
    fn clamp_allows_panning_within_zoomed_extents() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let container = Size::new(100.0, 100.0);
        // Fit scale is 1; at scale 2 the content spans 200px so positions
        // in [-100, 0] are reachable.
        let inside = clamp_position(Vec2::new(-40.0, -60.0), 2.0, container, bounds);
        assert_eq!(inside, Vec2::new(-40.0, -60.0));

        let outside = clamp_position(Vec2::new(30.0, -500.0), 2.0, container, bounds);
        assert_eq!(outside, Vec2::new(0.0, -100.0));
    }

    #[test]
    fn clamp_is_idempotent() {
        let bounds = Rect::new(-20.0, 15.0, 180.0, 95.0);
        let container = Size::new(500.0, 350.0);
        let fit = fit_scale(bounds, container);
        for scale in [fit * 0.5, fit, fit * 1.3, fit * 7.0] {
            for (x, y) in [(-1e4, 3.0), (0.0, 0.0), (250.0, -80.0), (9e3, 9e3)] {
                let once = clamp_position(Vec2::new(x, y), scale, container, bounds);
                let twice = clamp_position(once, scale, container, bounds);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn clamp_passes_through_without_container() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let position = Vec2::new(123.0, -456.0);
        assert_eq!(clamp_position(position, 1.0, Size::ZERO, bounds), position);
    }
}
