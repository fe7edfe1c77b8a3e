// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimap: an overview of the whole content with a viewport indicator.
//!
//! The minimap shows the stage at its reset (fit) transform, scaled down by
//! [`MinimapOptions::size`](crate::MinimapOptions::size). It is anchored in a
//! corner of the container and can be dragged around by the user.
//!
//! Pressing inside the viewport indicator drags the main camera. Pressing
//! elsewhere on the panel first centers the camera on that point and then
//! drags. All camera writes go through the stage, so they are clamped like
//! any other input.

use core::hash::Hash;

use kurbo::{Point, Rect, Size, Vec2};
use vantage_event_state::drag::DragState;
use vantage_view2d::CameraState;

use crate::Stage;

/// Corner of the container the minimap panel starts in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MinimapPosition {
    /// Top left corner.
    #[default]
    TopLeft,
    /// Top right corner.
    TopRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom right corner.
    BottomRight,
}

impl MinimapPosition {
    fn origin(self, container: Size, panel: Size) -> Point {
        let right = container.width - panel.width;
        let bottom = container.height - panel.height;
        match self {
            Self::TopLeft => Point::ZERO,
            Self::TopRight => Point::new(right, 0.0),
            Self::BottomLeft => Point::new(0.0, bottom),
            Self::BottomRight => Point::new(right, bottom),
        }
    }
}

/// Geometry of the minimap for one stage state, in container space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapLayout {
    /// The minimap panel.
    pub panel: Rect,
    /// The content bounds as drawn on the minimap.
    pub content: Rect,
    /// The main camera's visible rectangle as drawn on the minimap.
    pub viewport: Rect,
    transform: CameraState,
}

impl MinimapLayout {
    /// Maps a world point onto the minimap.
    pub fn world_to_minimap(&self, world: Point) -> Point {
        self.transform.world_to_screen(world)
    }

    /// Maps a minimap point back to the world.
    pub fn minimap_to_world(&self, point: Point) -> Point {
        self.transform.screen_to_world(point)
    }

    /// Minimap pixels per world unit.
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragTarget {
    Camera,
    Panel,
}

/// Interaction state of a minimap.
#[derive(Clone, Debug, Default)]
pub struct Minimap {
    offset: Option<Point>,
    drag: DragState,
    target: Option<DragTarget>,
}

impl Minimap {
    /// Creates a minimap in its configured corner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the layout, or `None` if the minimap is hidden or the stage
    /// is still loading.
    pub fn layout<K: Copy + Eq + Hash>(&self, stage: &Stage<K>) -> Option<MinimapLayout> {
        let options = stage.options().minimap;
        let container = stage.container_size()?;
        if !options.show || options.size <= 0.0 {
            return None;
        }

        let size = Size::new(
            container.width * options.size,
            container.height * options.size,
        );
        let origin = self
            .offset
            .unwrap_or_else(|| options.position.origin(container, size));
        let origin = clamp_origin(origin, container, size);

        let reset = stage.reset_camera();
        let transform = CameraState::new(
            reset.scale * options.size,
            origin.to_vec2() + reset.position * options.size,
        );
        Some(MinimapLayout {
            panel: Rect::from_origin_size(origin, size),
            content: transform.world_rect_to_screen(stage.bounds()),
            viewport: transform.world_rect_to_screen(stage.visible_rect()),
            transform,
        })
    }

    /// Handles a press at `pos`. Returns `true` if the minimap took it.
    pub fn pointer_down<K: Copy + Eq + Hash>(&mut self, stage: &mut Stage<K>, pos: Point) -> bool {
        let Some(layout) = self.layout(stage) else {
            return false;
        };
        if !layout.panel.contains(pos) {
            return false;
        }
        if !layout.viewport.contains(pos) {
            stage.center_on(layout.minimap_to_world(pos));
        }
        self.drag.start(pos);
        self.target = Some(DragTarget::Camera);
        true
    }

    /// Starts moving the panel itself (for example from a drag handle).
    /// Returns `true` if `pos` is on the panel.
    pub fn begin_panel_drag<K: Copy + Eq + Hash>(&mut self, stage: &Stage<K>, pos: Point) -> bool {
        let Some(layout) = self.layout(stage) else {
            return false;
        };
        if !layout.panel.contains(pos) {
            return false;
        }
        self.drag.start(pos);
        self.target = Some(DragTarget::Panel);
        true
    }

    /// Continues a camera or panel drag. Returns `true` if anything moved.
    pub fn pointer_move<K: Copy + Eq + Hash>(&mut self, stage: &mut Stage<K>, pos: Point) -> bool {
        let Some(layout) = self.layout(stage) else {
            self.pointer_up();
            return false;
        };
        let Some(delta) = self.drag.update(pos) else {
            return false;
        };
        match self.target {
            Some(DragTarget::Camera) => {
                let world_delta = delta / layout.scale();
                stage.pan_by(-world_delta * stage.scale());
            }
            Some(DragTarget::Panel) => {
                let container = stage.container_size().unwrap_or(Size::ZERO);
                self.offset = Some(clamp_origin(
                    layout.panel.origin() + delta,
                    container,
                    layout.panel.size(),
                ));
            }
            None => return false,
        }
        true
    }

    /// Ends any minimap drag. Returns `true` if one was in progress.
    pub fn pointer_up(&mut self) -> bool {
        self.target = None;
        self.drag.end()
    }

    /// Returns `true` while a camera or panel drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Moves the panel back to its configured corner.
    pub fn reset_position(&mut self) {
        self.offset = None;
    }

    /// Current panel offset set by dragging, if any.
    pub fn offset(&self) -> Option<Vec2> {
        self.offset.map(Point::to_vec2)
    }
}

/// Keeps a panel of size `panel` inside `container`.
fn clamp_origin(origin: Point, container: Size, panel: Size) -> Point {
    Point::new(
        origin.x.min(container.width - panel.width).max(0.0),
        origin.y.min(container.height - panel.height).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Drawable, MinimapOptions, Options, ZoomOptions};
    use alloc::vec::Vec;

    struct Node;

    impl Drawable for Node {
        type Key = u8;

        fn key(&self) -> u8 {
            0
        }

        fn client_rect(&self) -> Rect {
            Rect::ZERO
        }
    }

    fn stage_with_minimap(position: MinimapPosition) -> Stage<u8> {
        let options = Options {
            minimap: MinimapOptions {
                show: true,
                size: 0.25,
                position,
            },
            ..Options::default()
        };
        let mut stage = Stage::new(options, 0);
        stage.set_container_size(Size::new(400.0, 400.0));
        stage.set_fixed_size(Some(200.0), Some(100.0));
        stage.frame(0, &Vec::<Node>::new());
        stage
    }

    #[test]
    fn hidden_minimap_has_no_layout() {
        let mut stage: Stage<u8> = Stage::new(Options::default(), 0);
        stage.set_container_size(Size::new(400.0, 400.0));
        let mut minimap = Minimap::new();
        assert_eq!(minimap.layout(&stage), None);
        assert!(!minimap.pointer_down(&mut stage, Point::new(10.0, 10.0)));
    }

    #[test]
    fn layout_at_fit() {
        let stage = stage_with_minimap(MinimapPosition::TopLeft);
        let layout = Minimap::new().layout(&stage).unwrap();
        assert_eq!(layout.panel, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(layout.content, Rect::new(0.0, 25.0, 100.0, 75.0));
        assert_eq!(layout.viewport, layout.panel);

        let stage = stage_with_minimap(MinimapPosition::BottomRight);
        let layout = Minimap::new().layout(&stage).unwrap();
        assert_eq!(layout.panel, Rect::new(300.0, 300.0, 400.0, 400.0));
    }

    #[test]
    fn click_centers_then_drag_pans() {
        let mut stage = stage_with_minimap(MinimapPosition::TopLeft);
        let zoom = ZoomOptions {
            duration: Some(0.0),
            ..ZoomOptions::default()
        };
        assert!(stage.zoom_to_rect(Rect::new(0.0, 0.0, 50.0, 50.0), zoom, 0));
        assert_eq!(stage.scale(), 8.0);

        let mut minimap = Minimap::new();
        assert!(minimap.pointer_down(&mut stage, Point::new(75.0, 50.0)));
        assert_eq!(stage.position(), Vec2::new(-1000.0, -200.0));
        assert_eq!(stage.visible_rect().center(), Point::new(150.0, 50.0));

        assert!(minimap.pointer_move(&mut stage, Point::new(80.0, 50.0)));
        assert_eq!(stage.position(), Vec2::new(-1080.0, -200.0));
        assert!(minimap.pointer_up());
        assert!(!minimap.pointer_move(&mut stage, Point::new(90.0, 50.0)));
    }

    #[test]
    fn panel_drag_stays_inside_container() {
        let stage = stage_with_minimap(MinimapPosition::TopLeft);
        let mut minimap = Minimap::new();
        assert!(!minimap.begin_panel_drag(&stage, Point::new(200.0, 200.0)));
        assert!(minimap.begin_panel_drag(&stage, Point::new(10.0, 10.0)));

        let mut stage = stage;
        let before = stage.camera();
        assert!(minimap.pointer_move(&mut stage, Point::new(500.0, 20.0)));
        assert_eq!(stage.camera(), before);
        assert_eq!(
            minimap.layout(&stage).unwrap().panel,
            Rect::new(300.0, 10.0, 400.0, 110.0)
        );

        assert_eq!(minimap.offset(), Some(Vec2::new(300.0, 10.0)));
        minimap.reset_position();
        assert_eq!(minimap.layout(&stage).unwrap().panel.origin(), Point::ZERO);
    }
}
