// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep the view stable when the container is resized.

use kurbo::{Point, Rect, Size, Vec2};
use vantage_view2d::{CameraState, fit_scale, has_area, reset_transform};

/// Adapts `camera` from the `old` container size to the `new` one.
///
/// The world point at the center of the old container ends up at the center
/// of the new one, and the zoom ratio relative to the fit scale is preserved.
///
/// If the old container had no area nothing meaningful was on screen, so the
/// result is the reset transform for the new size. If the new container has no
/// area the camera is returned unchanged.
#[must_use]
pub fn reconcile_resize(camera: CameraState, bounds: Rect, old: Size, new: Size) -> CameraState {
    if !has_area(new) {
        return camera;
    }
    if !has_area(old) {
        return reset_transform(bounds, new);
    }

    let center = camera.screen_to_world(Point::new(old.width / 2.0, old.height / 2.0));
    let relative = camera.scale / fit_scale(bounds, old);
    let scale = fit_scale(bounds, new) * relative;
    let position = Vec2::new(new.width / 2.0, new.height / 2.0) - center.to_vec2() * scale;
    CameraState::new(scale, position)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn center_and_ratio_survive_resize() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
        let old = Size::new(400.0, 400.0);
        let new = Size::new(800.0, 300.0);
        // Zoomed to 3x fit (fit = 2), looking at world (60, 40).
        let camera = CameraState::new(6.0, Vec2::new(200.0 - 60.0 * 6.0, 200.0 - 40.0 * 6.0));

        let next = reconcile_resize(camera, bounds, old, new);

        assert!((next.scale / fit_scale(bounds, new) - 3.0).abs() < EPS);
        let center = next.screen_to_world(Point::new(400.0, 150.0));
        assert!((center.x - 60.0).abs() < EPS);
        assert!((center.y - 40.0).abs() < EPS);
    }

    #[test]
    fn fit_stays_fit() {
        let bounds = Rect::new(10.0, 10.0, 110.0, 60.0);
        let old = Size::new(300.0, 300.0);
        let new = Size::new(500.0, 200.0);
        let next = reconcile_resize(reset_transform(bounds, old), bounds, old, new);
        let expected = reset_transform(bounds, new);
        assert!((next.scale - expected.scale).abs() < EPS);
        assert!((next.position - expected.position).hypot() < EPS);
    }

    #[test]
    fn degenerate_sizes() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let camera = CameraState::new(3.0, Vec2::new(-7.0, 4.0));

        assert_eq!(
            reconcile_resize(camera, bounds, Size::new(200.0, 200.0), Size::ZERO),
            camera
        );
        assert_eq!(
            reconcile_resize(camera, bounds, Size::ZERO, Size::new(200.0, 100.0)),
            reset_transform(bounds, Size::new(200.0, 100.0))
        );
    }
}
