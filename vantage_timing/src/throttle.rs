// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading + trailing throttling.
//!
//! [`Throttle`] bounds how often a value is passed on to a consumer. The
//! first value after a quiet period goes out immediately (leading edge);
//! values arriving inside the window are held, each replacing the previous,
//! and the latest one goes out once the window has elapsed (trailing edge).
//!
//! The throttle never fires on its own: hosts call [`Throttle::poll`] from
//! their refresh tick to release trailing values.

/// Rate limiter that emits at most one value per `interval_ms` window.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    interval_ms: u64,
    last_emit_ms: Option<u64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    /// Creates a throttle with the given window. A zero window passes every
    /// value through immediately.
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_emit_ms: None,
            pending: None,
        }
    }

    /// The window length in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Changes the window length. Pending values are kept.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    /// Offers a value at `now_ms`.
    ///
    /// Returns the value if it should be delivered right away. Otherwise the
    /// value becomes the pending trailing value (replacing any older one) and
    /// `None` is returned.
    pub fn offer(&mut self, now_ms: u64, value: T) -> Option<T> {
        if self.window_open(now_ms) {
            self.pending = None;
            self.last_emit_ms = Some(now_ms);
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Releases the pending trailing value if its window has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if self.pending.is_some() && self.window_open(now_ms) {
            self.last_emit_ms = Some(now_ms);
            self.pending.take()
        } else {
            None
        }
    }

    /// Releases the pending trailing value immediately, regardless of the window.
    pub fn flush(&mut self, now_ms: u64) -> Option<T> {
        let value = self.pending.take()?;
        self.last_emit_ms = Some(now_ms);
        Some(value)
    }

    /// Drops any pending value and forgets the last emission time.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_emit_ms = None;
    }

    /// Returns `true` if a trailing value is waiting to be released.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Earliest time at which [`Throttle::poll`] will release the pending value.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.pending.as_ref()?;
        Some(
            self.last_emit_ms
                .map_or(0, |last| last.saturating_add(self.interval_ms)),
        )
    }

    fn window_open(&self, now_ms: u64) -> bool {
        match self.last_emit_ms {
            None => true,
            Some(last) => now_ms >= last.saturating_add(self.interval_ms),
        }
    }
}
