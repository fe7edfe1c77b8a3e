// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Stage`]: owner of the camera and entry point for all input.

use core::hash::Hash;

use kurbo::{Point, Rect, Size, Vec2};
use log::{debug, trace};
use vantage_event_state::drag::DragState;
use vantage_event_state::wheel::{Modifiers, WheelAction, WheelEvent, WheelRouter, ZoomDirection};
use vantage_timing::tween::Tween;
use vantage_view2d::{CameraState, ClampMode, fit_scale, has_area, reset_transform, visible_rect};

use crate::bounds::{BoundsTracker, SharedBounds};
use crate::content::{ContentTree, ContentWatcher, Drawable};
use crate::notify::{CameraSnapshot, ChangeNotifier, SubscriptionId};
use crate::options::Options;
use crate::resize::reconcile_resize;
use crate::zoom::{ZoomOptions, element_target, zoom_at};

/// Zoom ratios this close to `1` count as "at the fit zoom".
const FIT_EPSILON: f64 = 1e-6;

/// Snapshot of a stage's internal state, for inspection and debugging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageDebugInfo {
    /// Container size, once measured.
    pub container: Option<Size>,
    /// Current content bounds.
    pub bounds: Rect,
    /// Whether `bounds` is still the placeholder.
    pub placeholder_bounds: bool,
    /// Current camera.
    pub camera: CameraState,
    /// Fit scale for the current bounds and container.
    pub fit_scale: f64,
    /// Zoom relative to the fit scale.
    pub zoom: f64,
    /// World‑space rectangle currently visible.
    pub visible_rect: Rect,
    /// Active clamp policy.
    pub clamp_mode: ClampMode,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Whether a camera animation is running.
    pub animating: bool,
}

/// An interactive pan/zoom camera over a tree of [`Drawable`] nodes.
///
/// `K` is the node key type of the content tree.
///
/// The stage is driven entirely by the host: sizes, input events, and refresh
/// ticks ([`Stage::frame`]) are pushed in, each with the current time in
/// milliseconds. Every camera write goes through the clamp policy selected by
/// [`Options::clamp_position`].
///
/// Until the container has been measured the stage is *loading*: camera
/// operations are ignored and no notifications are published.
#[derive(Debug)]
pub struct Stage<K> {
    options: Options,
    container: Option<Size>,
    camera: CameraState,
    /// Camera in effect when the host last rendered, i.e. at the end of the
    /// last [`Stage::frame`]. Client rects are laid out under this camera.
    rendered: CameraState,
    /// Set when the camera or bounds changed since the last publish.
    dirty: bool,
    bounds: BoundsTracker,
    watcher: ContentWatcher<K>,
    drag: DragState,
    wheel: WheelRouter,
    animation: Option<Tween<(f64, Vec2)>>,
    animation_steps: u64,
    notifier: ChangeNotifier,
    needs_initial_fit: bool,
}

impl<K: Copy + Eq + Hash> Stage<K> {
    /// Creates a loading stage. Options are [sanitized](Options::sanitized).
    pub fn new(options: Options, now_ms: u64) -> Self {
        let options = options.sanitized();
        Self {
            options,
            container: None,
            camera: CameraState::IDENTITY,
            rendered: CameraState::IDENTITY,
            dirty: false,
            bounds: BoundsTracker::new(),
            watcher: ContentWatcher::new(),
            drag: DragState::default(),
            wheel: WheelRouter::new(options.wheel_config(), now_ms),
            animation: None,
            animation_steps: 0,
            notifier: ChangeNotifier::new(options.callbacks_throttle_ms),
            needs_initial_fit: true,
        }
    }

    // --- Options -------------------------------------------------------------

    /// The active (sanitized) options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options and re‑applies the clamp policy.
    pub fn set_options(&mut self, options: Options) {
        let options = options.sanitized();
        self.wheel.set_config(options.wheel_config());
        self.notifier.set_throttle_ms(options.callbacks_throttle_ms);
        self.options = options;
        self.commit(self.camera);
    }

    // --- Getters -------------------------------------------------------------

    /// Returns `true` until a container size with non‑zero area is known.
    pub fn is_loading(&self) -> bool {
        self.container.is_none()
    }

    /// The measured container size, if any.
    pub fn container_size(&self) -> Option<Size> {
        self.container
    }

    /// The current camera.
    pub fn camera(&self) -> CameraState {
        self.camera
    }

    /// World → screen scale.
    pub fn scale(&self) -> f64 {
        self.camera.scale
    }

    /// Screen translation of the world origin.
    pub fn position(&self) -> Vec2 {
        self.camera.position
    }

    /// Scale relative to the fit scale; `1` means the content exactly fits.
    pub fn zoom(&self) -> f64 {
        let fit = self.fit_scale();
        if self.camera.scale == fit * self.options.max_zoom {
            return self.options.max_zoom;
        }
        self.camera.zoom_ratio(fit)
    }

    /// Scale at which the content bounds fit the container.
    pub fn fit_scale(&self) -> f64 {
        fit_scale(self.bounds.bounds(), self.container.unwrap_or(Size::ZERO))
    }

    /// The fit‑and‑center camera for the current bounds and container.
    pub fn reset_camera(&self) -> CameraState {
        reset_transform(self.bounds.bounds(), self.container.unwrap_or(Size::ZERO))
    }

    /// World‑space content bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds.bounds()
    }

    /// A handle observing the latest bounds outside the update cycle.
    pub fn bounds_handle(&self) -> SharedBounds {
        self.bounds.shared()
    }

    /// World‑space rectangle currently visible in the container.
    pub fn visible_rect(&self) -> Rect {
        visible_rect(
            self.camera.position,
            self.camera.scale,
            self.container.unwrap_or(Size::ZERO),
        )
    }

    /// The camera client rects are measured against: the camera as of the
    /// end of the last [`Stage::frame`], which is what the host rendered.
    pub fn rendered_camera(&self) -> CameraState {
        self.rendered
    }

    /// Returns `true` while a pointer drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while a camera animation is running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Number of animation steps applied so far.
    pub fn animation_steps(&self) -> u64 {
        self.animation_steps
    }

    /// Whether the host should keep delivering [`Stage::frame`] ticks.
    ///
    /// This includes camera or bounds changes that have not been published
    /// yet, since notifications only go out from [`Stage::frame`].
    pub fn needs_frame(&self) -> bool {
        self.dirty
            || self.animation.is_some()
            || self.notifier.has_pending()
            || self.watcher.is_scan_requested()
    }

    // --- Container and content ----------------------------------------------

    /// Reports the container size.
    ///
    /// The first size with non‑zero area ends loading and, once bounds are
    /// known, fits the content. Later changes keep the view centered on the
    /// same world point at the same zoom ratio.
    pub fn set_container_size(&mut self, size: Size) {
        match self.container {
            None => {
                if !has_area(size) {
                    return;
                }
                debug!("container measured at {}x{}", size.width, size.height);
                self.container = Some(size);
                self.dirty = true;
                self.try_initial_fit();
            }
            Some(old) if old == size => {}
            Some(old) => {
                let next = reconcile_resize(self.camera, self.bounds.bounds(), old, size);
                debug!(
                    "container resized from {}x{} to {}x{}",
                    old.width, old.height, size.width, size.height
                );
                self.container = Some(size);
                self.animation = None;
                self.commit(next);
            }
        }
    }

    /// Sets fixed content dimensions that override measurement on their axis.
    ///
    /// Takes effect at the next bounds update.
    pub fn set_fixed_size(&mut self, width: Option<f64>, height: Option<f64>) {
        self.bounds.set_fixed_size(width, height);
        self.watcher.request_scan();
    }

    /// Reports a change to node `key` and requests a bounds update.
    pub fn mark_modified(&mut self, key: K) {
        self.watcher.mark_modified(key);
    }

    /// Requests a bounds update on the next [`Stage::frame`].
    pub fn request_bounds_update(&mut self) {
        self.watcher.request_scan();
    }

    /// Re‑measures the bounds of `tree` now. Returns `true` if they changed.
    ///
    /// Client rects are read as laid out under [`Stage::rendered_camera`].
    pub fn update_bounds<C>(&mut self, tree: &C, now_ms: u64) -> bool
    where
        C: ContentTree + ?Sized,
        C::Node: Drawable<Key = K>,
    {
        self.watcher.scan(tree);
        self.refresh_bounds(tree, now_ms)
    }

    /// Refresh tick.
    ///
    /// Detects content changes, re‑measures bounds when needed, advances the
    /// running animation, and publishes notifications. Returns
    /// [`Stage::needs_frame`].
    ///
    /// The host is expected to render right after this call; the resulting
    /// camera becomes the [rendered camera](Stage::rendered_camera) that the
    /// next measurement reads client rects against.
    pub fn frame<C>(&mut self, now_ms: u64, tree: &C) -> bool
    where
        C: ContentTree + ?Sized,
        C::Node: Drawable<Key = K>,
    {
        let requested = self.watcher.is_scan_requested();
        let changes = self.watcher.scan(tree);
        if requested || !changes.is_empty() {
            trace!(
                "content changed: {} added, {} removed, {} modified",
                changes.added.len(),
                changes.removed.len(),
                changes.modified.len()
            );
            self.refresh_bounds(tree, now_ms);
        }
        self.advance_animation(now_ms);
        self.publish(now_ms);
        self.rendered = self.camera;
        self.needs_frame()
    }

    // --- Camera operations ----------------------------------------------------

    /// Writes `camera` through the clamp policy. Cancels any animation.
    pub fn set_camera(&mut self, camera: CameraState) {
        if self.is_loading() {
            return;
        }
        self.animation = None;
        self.commit(camera);
    }

    /// Translates the camera by `delta` screen pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.set_camera(self.camera.with_position(self.camera.position + delta));
    }

    /// Moves the camera so `world` is at the container center, keeping scale.
    pub fn center_on(&mut self, world: Point) {
        let Some(container) = self.container else {
            return;
        };
        let center = Vec2::new(container.width / 2.0, container.height / 2.0);
        self.set_camera(
            self.camera
                .with_position(center - world.to_vec2() * self.camera.scale),
        );
    }

    /// Zooms one wheel step around `anchor`, clamped to `[fit, fit * max_zoom]`.
    pub fn handle_zoom(&mut self, anchor: Point, direction: ZoomDirection, magnitude: f64) {
        if self.is_loading() {
            return;
        }
        let next = zoom_at(
            self.camera,
            anchor,
            direction,
            magnitude,
            self.options.zoom_speed,
            self.fit_scale(),
            self.options.max_zoom,
        );
        trace!("zoom {direction:?} to scale {}", next.scale);
        self.set_camera(next);
    }

    /// Returns to the fit‑and‑center camera, animated if `animate` is set and
    /// the configured duration is positive.
    pub fn reset_zoom(&mut self, animate: bool, now_ms: u64) {
        if self.is_loading() {
            return;
        }
        let duration = if animate {
            self.options.zoom_animation_duration
        } else {
            0.0
        };
        self.animate_to(self.reset_camera(), duration, now_ms);
    }

    /// Frames `node` in the container. Returns `false` if nothing was done.
    ///
    /// The node's client rect is read under [`Stage::rendered_camera`].
    pub fn zoom_to_element<N>(&mut self, node: &N, options: ZoomOptions, now_ms: u64) -> bool
    where
        N: Drawable + ?Sized,
    {
        let world = self.rendered.screen_rect_to_world(node.client_rect());
        self.zoom_to_rect(world, options, now_ms)
    }

    /// Frames the world‑space rectangle `target`. Returns `false` if nothing
    /// was done.
    pub fn zoom_to_rect(&mut self, target: Rect, options: ZoomOptions, now_ms: u64) -> bool {
        let Some(container) = self.container else {
            return false;
        };
        let Some(camera) = element_target(
            target,
            container,
            options.padding_percent,
            self.fit_scale(),
            self.options.max_zoom,
        ) else {
            return false;
        };
        let duration = options
            .duration
            .unwrap_or(self.options.zoom_animation_duration);
        self.animate_to(camera, duration, now_ms);
        true
    }

    // --- Input ----------------------------------------------------------------

    /// Starts a drag at `pos` (container space).
    pub fn pointer_down(&mut self, pos: Point) {
        if self.is_loading() {
            return;
        }
        self.drag.start(pos);
    }

    /// Pans by the pointer movement while dragging. Returns `true` if the
    /// move was applied.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        if self.is_loading() {
            return false;
        }
        let Some(delta) = self.drag.update(pos) else {
            return false;
        };
        self.pan_by(delta);
        true
    }

    /// Ends a drag. Returns `true` if one was in progress.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.end()
    }

    /// Double click resets the zoom (animated).
    pub fn double_click(&mut self, now_ms: u64) {
        self.reset_zoom(true, now_ms);
    }

    /// Routes a wheel event to zoom or pan and returns what was done.
    pub fn wheel(&mut self, event: WheelEvent, now_ms: u64) -> WheelAction {
        if self.is_loading() {
            return WheelAction::Ignore;
        }
        let action = self.wheel.route(event, now_ms);
        match action {
            WheelAction::Zoom {
                anchor,
                direction,
                magnitude,
            } => self.handle_zoom(anchor, direction, magnitude),
            WheelAction::Pan(delta) => self.pan_by(delta),
            WheelAction::Ignore => trace!("wheel event dropped"),
        }
        action
    }

    /// Reports released keyboard modifiers.
    pub fn modifier_released(&mut self, released: Modifiers, now_ms: u64) {
        self.wheel.modifier_released(released, now_ms);
    }

    // --- Notifications ----------------------------------------------------------

    /// Calls `listener` with the (throttled) camera position.
    pub fn subscribe_position(&mut self, listener: impl FnMut(&Vec2) + 'static) -> SubscriptionId {
        self.notifier.on_position(listener)
    }

    /// Calls `listener` with the (throttled) zoom ratio.
    pub fn subscribe_zoom(&mut self, listener: impl FnMut(&f64) + 'static) -> SubscriptionId {
        self.notifier.on_zoom(listener)
    }

    /// Calls `listener` with the (throttled) content bounds.
    pub fn subscribe_bounds(&mut self, listener: impl FnMut(&Rect) + 'static) -> SubscriptionId {
        self.notifier.on_bounds(listener)
    }

    /// Calls `listener` with the (throttled) visible rectangle.
    pub fn subscribe_visible_rect(
        &mut self,
        listener: impl FnMut(&Rect) + 'static,
    ) -> SubscriptionId {
        self.notifier.on_visible_rect(listener)
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Delivers pending trailing notifications immediately.
    pub fn flush_notifications(&mut self, now_ms: u64) {
        self.notifier.flush(now_ms);
    }

    /// Stops all activity: pending notifications are dropped, the animation
    /// and drag are cancelled, and all content subscriptions are released.
    pub fn teardown(&mut self) {
        debug!("stage teardown");
        self.notifier.cancel();
        self.dirty = false;
        self.animation = None;
        self.drag.end();
        self.watcher.clear();
    }

    // --- Debugging ------------------------------------------------------------

    /// The bounds outline to draw, when `debug` is enabled.
    pub fn debug_overlay(&self) -> Option<Rect> {
        self.options.debug.then_some(self.bounds())
    }

    /// A snapshot of the stage's internal state.
    pub fn debug_info(&self) -> StageDebugInfo {
        StageDebugInfo {
            container: self.container,
            bounds: self.bounds(),
            placeholder_bounds: self.bounds.is_placeholder(),
            camera: self.camera,
            fit_scale: self.fit_scale(),
            zoom: self.zoom(),
            visible_rect: self.visible_rect(),
            clamp_mode: self.options.clamp_mode(),
            dragging: self.is_dragging(),
            animating: self.is_animating(),
        }
    }

    // --- Internals ------------------------------------------------------------

    /// The single camera write path.
    fn commit(&mut self, candidate: CameraState) {
        let Some(container) = self.container else {
            return;
        };
        let valid = candidate.scale > 0.0
            && candidate.scale.is_finite()
            && candidate.position.is_finite();
        if !valid {
            trace!("rejected invalid camera {candidate:?}");
            return;
        }
        let next = self
            .options
            .clamp_mode()
            .apply(candidate, container, self.bounds.bounds());
        if next != self.camera {
            self.dirty = true;
            self.camera = next;
        }
    }

    fn animate_to(&mut self, target: CameraState, duration_secs: f64, now_ms: u64) {
        let duration_ms = duration_secs * 1000.0;
        if duration_ms.is_nan() || duration_ms <= 0.0 {
            self.animation = None;
            self.commit(target);
            return;
        }
        debug!("animating to scale {} over {duration_ms}ms", target.scale);
        self.animation = Some(Tween::new(
            (self.camera.scale, self.camera.position),
            (target.scale, target.position),
            now_ms,
            duration_ms,
        ));
    }

    fn advance_animation(&mut self, now_ms: u64) {
        let Some(step) = self.animation.as_ref().map(|tween| tween.step(now_ms)) else {
            return;
        };
        if step.is_finished() {
            self.animation = None;
        }
        let (scale, position) = step.value();
        self.commit(CameraState::new(scale, position));
        self.animation_steps += 1;
    }

    fn refresh_bounds<C>(&mut self, tree: &C, now_ms: u64) -> bool
    where
        C: ContentTree + ?Sized,
    {
        let was_placeholder = self.bounds.is_placeholder();
        let was_at_fit = (self.zoom() - 1.0).abs() < FIT_EPSILON;
        let Some(bounds) = self.bounds.update(tree, self.rendered) else {
            return false;
        };
        self.dirty = true;
        debug!(
            "content bounds now ({}, {}) {}x{}",
            bounds.x0,
            bounds.y0,
            bounds.width(),
            bounds.height()
        );
        if was_placeholder {
            self.try_initial_fit();
        } else if was_at_fit {
            self.reset_zoom(true, now_ms);
        } else {
            self.commit(self.camera);
        }
        true
    }

    fn try_initial_fit(&mut self) {
        if !self.needs_initial_fit || self.is_loading() || self.bounds.is_placeholder() {
            return;
        }
        self.needs_initial_fit = false;
        self.animation = None;
        let camera = self.reset_camera();
        debug!("initial fit at scale {}", camera.scale);
        self.commit(camera);
    }

    fn publish(&mut self, now_ms: u64) {
        if self.is_loading() {
            return;
        }
        let snapshot = CameraSnapshot {
            position: self.camera.position,
            zoom: self.zoom(),
            bounds: self.bounds(),
            visible_rect: self.visible_rect(),
        };
        self.notifier.publish(now_ms, &snapshot);
        self.notifier.poll(now_ms);
        self.dirty = false;
    }
}
