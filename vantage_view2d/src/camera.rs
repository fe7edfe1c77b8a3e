// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Uniform pan+zoom camera over a world‑space plane.
///
/// `scale` maps world units to screen pixels and `position` is the screen
/// translation applied after scaling, so a world point `w` is drawn at
/// `w * scale + position`.
///
/// Scale and position always travel together: a consumer never observes a new
/// scale paired with a stale position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Uniform world → screen scale. Always positive for a valid camera.
    pub scale: f64,
    /// Screen‑space translation, in pixels.
    pub position: Vec2,
}

impl CameraState {
    /// Unit scale, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        position: Vec2::ZERO,
    };

    /// Creates a camera from a scale and a screen‑space position.
    #[must_use]
    pub const fn new(scale: f64, position: Vec2) -> Self {
        Self { scale, position }
    }

    /// Returns a copy of this camera with a different position.
    #[must_use]
    pub const fn with_position(self, position: Vec2) -> Self {
        Self {
            scale: self.scale,
            position,
        }
    }

    /// The world → screen transform for this camera.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.position) * Affine::scale(self.safe_scale())
    }

    /// Converts a world‑space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(self, pt: Point) -> Point {
        (pt.to_vec2() * self.safe_scale() + self.position).to_point()
    }

    /// Converts a screen‑space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(self, pt: Point) -> Point {
        ((pt.to_vec2() - self.position) / self.safe_scale()).to_point()
    }

    /// Converts a screen‑space rectangle into world coordinates.
    ///
    /// This is how a node's on‑screen bounding box is turned back into content
    /// coordinates.
    #[must_use]
    pub fn screen_rect_to_world(self, rect: Rect) -> Rect {
        Rect::from_points(
            self.screen_to_world(rect.origin()),
            self.screen_to_world(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Converts a world‑space rectangle into screen coordinates.
    #[must_use]
    pub fn world_rect_to_screen(self, rect: Rect) -> Rect {
        Rect::from_points(
            self.world_to_screen(rect.origin()),
            self.world_to_screen(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Zoom ratio relative to `fit_scale`; `1.0` means "fitted".
    #[must_use]
    pub fn zoom_ratio(self, fit_scale: f64) -> f64 {
        if fit_scale > 0.0 {
            self.scale / fit_scale
        } else {
            self.scale
        }
    }

    /// Linear interpolation of scale and position towards `target`.
    ///
    /// `t == 0` yields `self`, `t == 1` yields `target`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self {
            scale: self.scale + (target.scale - self.scale) * t,
            position: self.position.lerp(target.position, t),
        }
    }

    fn safe_scale(self) -> f64 {
        if self.scale > 0.0 && self.scale.is_finite() {
            self.scale
        } else {
            1.0
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::CameraState;

    #[test]
    fn world_screen_roundtrip() {
        let camera = CameraState::new(2.5, Vec2::new(-40.0, 12.0));

        let world = Point::new(10.0, -5.0);
        let screen = camera.world_to_screen(world);
        let back = camera.screen_to_world(screen);
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn affine_matches_point_conversion() {
        let camera = CameraState::new(3.0, Vec2::new(7.0, -2.0));
        let world = Point::new(4.0, 9.0);
        assert_eq!(camera.to_affine() * world, camera.world_to_screen(world));
    }

    #[test]
    fn screen_rect_to_world_undoes_camera() {
        let camera = CameraState::new(2.0, Vec2::new(100.0, 50.0));
        let world = Rect::new(10.0, 20.0, 30.0, 60.0);
        let screen = camera.world_rect_to_screen(world);
        assert_eq!(screen, Rect::new(120.0, 90.0, 160.0, 170.0));
        assert_eq!(camera.screen_rect_to_world(screen), world);
    }

    #[test]
    fn degenerate_scale_does_not_produce_nan() {
        let camera = CameraState::new(0.0, Vec2::new(5.0, 5.0));
        let world = camera.screen_to_world(Point::new(10.0, 10.0));
        assert!(world.x.is_finite() && world.y.is_finite());
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = CameraState::new(1.0, Vec2::new(0.0, 0.0));
        let b = CameraState::new(3.0, Vec2::new(10.0, -10.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), CameraState::new(2.0, Vec2::new(5.0, -5.0)));
    }

    #[test]
    fn zoom_ratio_relative_to_fit() {
        let camera = CameraState::new(6.0, Vec2::ZERO);
        assert_eq!(camera.zoom_ratio(2.0), 3.0);
    }
}
