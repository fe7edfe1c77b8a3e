// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::{CameraState, clamp_position};

/// Clamp behavior applied to every camera write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not apply any clamping; the view may pan and zoom freely.
    None,
    /// Keep the position inside the content's reset‑fit extents, scaled to the
    /// current zoom. See [`clamp_position`].
    #[default]
    FitExtents,
}

impl ClampMode {
    /// Maps a boolean "clamp position" setting to a mode.
    #[must_use]
    pub const fn from_flag(clamp: bool) -> Self {
        if clamp { Self::FitExtents } else { Self::None }
    }

    /// Applies this mode to a candidate camera.
    ///
    /// The scale is never altered; only the position is constrained.
    #[must_use]
    pub fn apply(self, camera: CameraState, container: Size, bounds: Rect) -> CameraState {
        match self {
            Self::None => camera,
            Self::FitExtents => camera.with_position(clamp_position(
                camera.position,
                camera.scale,
                container,
                bounds,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::ClampMode;
    use crate::CameraState;

    #[test]
    fn none_passes_through() {
        let camera = CameraState::new(1.0, Vec2::new(1e6, -1e6));
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            ClampMode::None.apply(camera, Size::new(10.0, 10.0), bounds),
            camera
        );
    }

    #[test]
    fn fit_extents_keeps_scale() {
        let camera = CameraState::new(4.0, Vec2::new(1e6, -1e6));
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let clamped = ClampMode::FitExtents.apply(camera, Size::new(10.0, 10.0), bounds);
        assert_eq!(clamped.scale, 4.0);
        assert_eq!(clamped.position, Vec2::new(0.0, -30.0));
    }

    #[test]
    fn from_flag() {
        assert_eq!(ClampMode::from_flag(true), ClampMode::FitExtents);
        assert_eq!(ClampMode::from_flag(false), ClampMode::None);
    }
}
