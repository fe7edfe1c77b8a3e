// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time‑driven interpolation tasks.
//!
//! A [`Tween`] is a plain record: where it started, when, for how long, and
//! where it is going. It is advanced by sampling it with the current time on
//! each refresh tick, so its speed is independent of the refresh rate.
//! There is no cancellation API; callers cancel or redirect an animation by
//! replacing the record (typically with a new tween starting from the value
//! last sampled).

use crate::easing::Easing;

/// Values that can be linearly interpolated.
pub trait Interpolate: Copy {
    /// Returns `self` moved towards `target` by fraction `t`.
    #[must_use]
    fn interpolate(self, target: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(self, target: Self, t: f64) -> Self {
        self + (target - self) * t
    }
}

impl<A: Interpolate, B: Interpolate> Interpolate for (A, B) {
    fn interpolate(self, target: Self, t: f64) -> Self {
        (self.0.interpolate(target.0, t), self.1.interpolate(target.1, t))
    }
}

#[cfg(feature = "kurbo")]
impl Interpolate for kurbo::Vec2 {
    fn interpolate(self, target: Self, t: f64) -> Self {
        self.lerp(target, t)
    }
}

#[cfg(feature = "kurbo")]
impl Interpolate for kurbo::Point {
    fn interpolate(self, target: Self, t: f64) -> Self {
        self.lerp(target, t)
    }
}

/// Result of advancing a [`Tween`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenStep<T> {
    /// The tween is still running; apply this value and sample again next tick.
    Running(T),
    /// The tween reached its end; apply this (final) value and drop the tween.
    Finished(T),
}

impl<T> TweenStep<T> {
    /// The value to apply for this step.
    pub fn value(self) -> T {
        match self {
            Self::Running(v) | Self::Finished(v) => v,
        }
    }

    /// Returns `true` for [`TweenStep::Finished`].
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// An interpolation task from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    start_ms: u64,
    duration_ms: f64,
    easing: Easing,
}

impl<T: Interpolate> Tween<T> {
    /// Creates a tween starting at `start_ms` and lasting `duration_ms`.
    ///
    /// Uses [`Easing::EaseInOut`]. A non‑positive duration produces a tween
    /// that is finished from its first sample.
    pub fn new(from: T, to: T, start_ms: u64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing: Easing::default(),
        }
    }

    /// Replaces the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The value this tween starts from.
    pub fn start_value(&self) -> T {
        self.from
    }

    /// The value this tween ends at.
    pub fn target(&self) -> T {
        self.to
    }

    /// Start time in milliseconds.
    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Linear progress at `now_ms`, clamped to `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        (elapsed / self.duration_ms).min(1.0)
    }

    /// Returns `true` once `now_ms` is at or past the end of the tween.
    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Eased value at `now_ms`.
    ///
    /// The final sample is exactly the target, with no interpolation error.
    pub fn sample(&self, now_ms: u64) -> T {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.interpolate(self.to, self.easing.apply(progress))
    }

    /// Samples the tween and reports whether it has finished.
    pub fn step(&self, now_ms: u64) -> TweenStep<T> {
        if self.is_finished(now_ms) {
            TweenStep::Finished(self.to)
        } else {
            TweenStep::Running(self.sample(now_ms))
        }
    }
}
