// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World‑space content bounds.
//!
//! [`BoundsTracker`] measures the union of all nodes' bounding boxes in world
//! space. Each node reports its box in screen space under the current camera,
//! so measuring undoes the camera transform first. Fixed dimensions supplied
//! by the host override the measured extent on their axis.
//!
//! Updates smaller than [`BOUNDS_TOLERANCE`] on every field are discarded to
//! avoid feedback loops from sub‑pixel layout jitter.

use alloc::rc::Rc;
use core::cell::Cell;

use kurbo::Rect;
use vantage_view2d::CameraState;

use crate::content::{ContentTree, Drawable};

/// Bounds used until content has been measured.
pub const PLACEHOLDER_BOUNDS: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

/// Largest per‑field change (in world units) that is treated as no change.
pub const BOUNDS_TOLERANCE: f64 = 1.0;

/// Read‑only view of the latest bounds, shared outside the update cycle.
///
/// Cloning is cheap; all clones observe the same value.
#[derive(Clone, Debug)]
pub struct SharedBounds(Rc<Cell<Rect>>);

impl SharedBounds {
    /// The most recently applied bounds.
    pub fn get(&self) -> Rect {
        self.0.get()
    }

    fn set(&self, bounds: Rect) {
        self.0.set(bounds);
    }
}

impl Default for SharedBounds {
    fn default() -> Self {
        Self(Rc::new(Cell::new(PLACEHOLDER_BOUNDS)))
    }
}

/// Tracks the world‑space bounds of the content.
#[derive(Clone, Debug, Default)]
pub struct BoundsTracker {
    bounds: Option<Rect>,
    fixed_width: Option<f64>,
    fixed_height: Option<f64>,
    shared: SharedBounds,
}

impl BoundsTracker {
    /// Creates a tracker holding [`PLACEHOLDER_BOUNDS`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bounds ([`PLACEHOLDER_BOUNDS`] until the first update).
    pub fn bounds(&self) -> Rect {
        self.bounds.unwrap_or(PLACEHOLDER_BOUNDS)
    }

    /// Returns `true` until real bounds have been applied.
    pub fn is_placeholder(&self) -> bool {
        self.bounds.is_none()
    }

    /// A handle that always reflects the latest applied bounds.
    pub fn shared(&self) -> SharedBounds {
        self.shared.clone()
    }

    /// Fixed content dimensions, if any.
    pub fn fixed_size(&self) -> (Option<f64>, Option<f64>) {
        (self.fixed_width, self.fixed_height)
    }

    /// Sets fixed content dimensions.
    ///
    /// A fixed dimension replaces the measured extent on its axis and anchors
    /// that axis at `0`. Non‑finite or non‑positive values are ignored.
    pub fn set_fixed_size(&mut self, width: Option<f64>, height: Option<f64>) {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        self.fixed_width = width.filter(|w| valid(*w));
        self.fixed_height = height.filter(|h| valid(*h));
    }

    /// Measures the world‑space bounds of `tree` viewed through `camera`.
    ///
    /// Returns `None` if there is nothing to measure: the tree is empty and
    /// not both dimensions are fixed.
    pub fn measure<C>(&self, tree: &C, camera: CameraState) -> Option<Rect>
    where
        C: ContentTree + ?Sized,
    {
        let union = tree
            .nodes()
            .map(|node| camera.screen_rect_to_world(node.client_rect()))
            .reduce(|acc, rect| acc.union(rect));

        let (x0, x1) = match (self.fixed_width, union) {
            (Some(w), _) => (0.0, w),
            (None, Some(u)) => (u.x0, u.x1),
            (None, None) => return None,
        };
        let (y0, y1) = match (self.fixed_height, union) {
            (Some(h), _) => (0.0, h),
            (None, Some(u)) => (u.y0, u.y1),
            (None, None) => return None,
        };

        // Keep at least one unit of extent so fitting never divides by zero.
        Some(Rect::new(x0, y0, x1.max(x0 + 1.0), y1.max(y0 + 1.0)))
    }

    /// Offers measured bounds. Returns `true` if they were applied.
    ///
    /// The first real bounds are always applied; later ones only when some
    /// field moved by more than [`BOUNDS_TOLERANCE`].
    pub fn apply(&mut self, candidate: Rect) -> bool {
        let finite = [candidate.x0, candidate.y0, candidate.x1, candidate.y1]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return false;
        }
        if let Some(current) = self.bounds
            && !exceeds_tolerance(current, candidate)
        {
            return false;
        }
        self.bounds = Some(candidate);
        self.shared.set(candidate);
        true
    }

    /// Measures `tree` and applies the result. Returns the new bounds if they
    /// were applied.
    pub fn update<C>(&mut self, tree: &C, camera: CameraState) -> Option<Rect>
    where
        C: ContentTree + ?Sized,
    {
        let measured = self.measure(tree, camera)?;
        self.apply(measured).then_some(measured)
    }
}

fn exceeds_tolerance(a: Rect, b: Rect) -> bool {
    [
        (a.x0, b.x0),
        (a.y0, b.y0),
        (a.width(), b.width()),
        (a.height(), b.height()),
    ]
    .iter()
    .any(|(x, y)| (x - y).abs() > BOUNDS_TOLERANCE)
}
