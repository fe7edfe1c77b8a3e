// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throttled change notifications.
//!
//! A [`ChangeNotifier`] has one channel per observable value (position, zoom,
//! bounds, visible rect). Each channel remembers the last value it was offered
//! and forwards changes through its own leading + trailing [`Throttle`], so a
//! burst of camera updates reaches listeners as at most one call per window
//! plus a final call with the settled value.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Rect, Vec2};
use vantage_timing::throttle::Throttle;

/// Handle returned by the `subscribe_*` methods, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// The observable values of a camera at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSnapshot {
    /// Camera position (screen translation).
    pub position: Vec2,
    /// Zoom relative to the fit scale.
    pub zoom: f64,
    /// World‑space content bounds.
    pub bounds: Rect,
    /// World‑space rectangle currently visible.
    pub visible_rect: Rect,
}

type Listener<T> = Box<dyn FnMut(&T)>;

struct Channel<T> {
    throttle: Throttle<T>,
    last: Option<T>,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T: Copy + PartialEq> Channel<T> {
    fn new(interval_ms: u64) -> Self {
        Self {
            throttle: Throttle::new(interval_ms),
            last: None,
            listeners: Vec::new(),
        }
    }

    fn publish(&mut self, now_ms: u64, value: T) {
        if self.last == Some(value) {
            return;
        }
        self.last = Some(value);
        if let Some(value) = self.throttle.offer(now_ms, value) {
            self.emit(&value);
        }
    }

    fn poll(&mut self, now_ms: u64) {
        if let Some(value) = self.throttle.poll(now_ms) {
            self.emit(&value);
        }
    }

    fn flush(&mut self, now_ms: u64) {
        if let Some(value) = self.throttle.flush(now_ms) {
            self.emit(&value);
        }
    }

    fn emit(&mut self, value: &T) {
        for (_, listener) in &mut self.listeners {
            listener(value);
        }
    }

    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }
}

/// Delivers throttled position, zoom, bounds, and visible‑rect changes.
pub struct ChangeNotifier {
    next_id: u64,
    position: Channel<Vec2>,
    zoom: Channel<f64>,
    bounds: Channel<Rect>,
    visible_rect: Channel<Rect>,
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("throttle_ms", &self.throttle_ms())
            .field("listeners", &self.listener_count())
            .field("pending", &self.has_pending())
            .finish_non_exhaustive()
    }
}

impl ChangeNotifier {
    /// Creates a notifier with no listeners.
    pub fn new(throttle_ms: u64) -> Self {
        Self {
            next_id: 0,
            position: Channel::new(throttle_ms),
            zoom: Channel::new(throttle_ms),
            bounds: Channel::new(throttle_ms),
            visible_rect: Channel::new(throttle_ms),
        }
    }

    /// The throttle window in milliseconds.
    pub fn throttle_ms(&self) -> u64 {
        self.position.throttle.interval_ms()
    }

    /// Changes the throttle window of every channel.
    pub fn set_throttle_ms(&mut self, throttle_ms: u64) {
        self.position.throttle.set_interval_ms(throttle_ms);
        self.zoom.throttle.set_interval_ms(throttle_ms);
        self.bounds.throttle.set_interval_ms(throttle_ms);
        self.visible_rect.throttle.set_interval_ms(throttle_ms);
    }

    /// Registers a position listener.
    pub fn on_position(&mut self, listener: impl FnMut(&Vec2) + 'static) -> SubscriptionId {
        let id = self.allocate_id();
        self.position.listeners.push((id, Box::new(listener)));
        id
    }

    /// Registers a zoom listener.
    pub fn on_zoom(&mut self, listener: impl FnMut(&f64) + 'static) -> SubscriptionId {
        let id = self.allocate_id();
        self.zoom.listeners.push((id, Box::new(listener)));
        id
    }

    /// Registers a bounds listener.
    pub fn on_bounds(&mut self, listener: impl FnMut(&Rect) + 'static) -> SubscriptionId {
        let id = self.allocate_id();
        self.bounds.listeners.push((id, Box::new(listener)));
        id
    }

    /// Registers a visible‑rect listener.
    pub fn on_visible_rect(&mut self, listener: impl FnMut(&Rect) + 'static) -> SubscriptionId {
        let id = self.allocate_id();
        self.visible_rect.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.position.remove(id)
            || self.zoom.remove(id)
            || self.bounds.remove(id)
            || self.visible_rect.remove(id)
    }

    /// Total number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.position.listeners.len()
            + self.zoom.listeners.len()
            + self.bounds.listeners.len()
            + self.visible_rect.listeners.len()
    }

    /// Offers the current values. Changed values go out now or become the
    /// pending trailing value of their channel.
    pub fn publish(&mut self, now_ms: u64, snapshot: &CameraSnapshot) {
        self.position.publish(now_ms, snapshot.position);
        self.zoom.publish(now_ms, snapshot.zoom);
        self.bounds.publish(now_ms, snapshot.bounds);
        self.visible_rect.publish(now_ms, snapshot.visible_rect);
    }

    /// Releases trailing values whose window has elapsed.
    pub fn poll(&mut self, now_ms: u64) {
        self.position.poll(now_ms);
        self.zoom.poll(now_ms);
        self.bounds.poll(now_ms);
        self.visible_rect.poll(now_ms);
    }

    /// Releases every trailing value immediately.
    pub fn flush(&mut self, now_ms: u64) {
        self.position.flush(now_ms);
        self.zoom.flush(now_ms);
        self.bounds.flush(now_ms);
        self.visible_rect.flush(now_ms);
    }

    /// Drops every trailing value without delivering it.
    pub fn cancel(&mut self) {
        self.position.throttle.cancel();
        self.zoom.throttle.cancel();
        self.bounds.throttle.cancel();
        self.visible_rect.throttle.cancel();
    }

    /// Returns `true` if any channel holds a trailing value.
    pub fn has_pending(&self) -> bool {
        self.position.throttle.has_pending()
            || self.zoom.throttle.has_pending()
            || self.bounds.throttle.has_pending()
            || self.visible_rect.throttle.has_pending()
    }

    fn allocate_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }
}
