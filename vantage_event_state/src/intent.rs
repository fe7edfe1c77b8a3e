// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll intent detection: tell deliberate wheel input from inertial tails.
//!
//! Trackpads and some mice keep emitting decaying wheel events after the user
//! lifts their fingers. When the previous gesture was a pinch‑zoom, that tail
//! would otherwise be read as a pan. [`ScrollIntent`] looks at the recent
//! history of wheel deltas and classifies the newest one.
//!
//! An event is considered intentional when the newer half of the recent
//! history is, on average, larger than `sensitivity` and not decaying
//! relative to the older half (within `tolerance`). A run of identical deltas
//! arriving faster than `delay_ms` is considered inertial.
//!
//! Each camera owns its own detector; there is no shared global instance.
//!
//! ```
//! use vantage_event_state::intent::{IntentConfig, ScrollIntent};
//!
//! let mut intent = ScrollIntent::new(IntentConfig::default());
//! // A fresh detector has no history and accepts input.
//! assert!(intent.check(12.0, 0));
//! ```

use alloc::collections::VecDeque;

/// Tuning for [`ScrollIntent`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct IntentConfig {
    /// Number of samples in each half of the comparison window.
    pub stability: usize,
    /// Minimum average delta magnitude of the newer half.
    pub sensitivity: f64,
    /// How much larger the older half may be before input counts as decaying.
    pub tolerance: f64,
    /// Identical deltas closer together than this (ms) are inertial.
    pub delay_ms: u64,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            stability: 8,
            sensitivity: 2.0,
            tolerance: 1.1,
            delay_ms: 100,
        }
    }
}

/// Per‑instance wheel intentionality detector.
#[derive(Clone, Debug)]
pub struct ScrollIntent {
    config: IntentConfig,
    positive: VecDeque<f64>,
    negative: VecDeque<f64>,
    timestamps: VecDeque<u64>,
}

impl ScrollIntent {
    /// Creates a detector with empty history.
    pub fn new(config: IntentConfig) -> Self {
        let config = IntentConfig {
            stability: config.stability.max(1),
            ..config
        };
        let window = config.stability * 2;
        Self {
            config,
            positive: VecDeque::with_capacity(window),
            negative: VecDeque::with_capacity(window),
            timestamps: VecDeque::with_capacity(window),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> IntentConfig {
        self.config
    }

    /// Records a wheel delta observed at `now_ms` and reports whether it looks
    /// intentional.
    ///
    /// Deltas are tracked separately per direction. A zero delta carries no
    /// intent.
    pub fn check(&mut self, delta: f64, now_ms: u64) -> bool {
        let window = self.window();
        push_bounded(&mut self.timestamps, now_ms, window);
        if delta == 0.0 || delta.is_nan() {
            return false;
        }
        let history = if delta > 0.0 {
            &mut self.positive
        } else {
            &mut self.negative
        };
        push_bounded(history, delta.abs(), window);
        let history = if delta > 0.0 {
            &self.positive
        } else {
            &self.negative
        };
        self.is_intentional(history, now_ms)
    }

    /// Forgets all recorded history.
    pub fn reset(&mut self) {
        self.positive.clear();
        self.negative.clear();
        self.timestamps.clear();
    }

    fn window(&self) -> usize {
        self.config.stability * 2
    }

    fn is_intentional(&self, history: &VecDeque<f64>, now_ms: u64) -> bool {
        let window = self.window();
        if history.len() < window {
            // Not enough history to judge.
            return true;
        }

        // A burst of identical deltas in quick succession is a synthetic
        // inertia tail.
        if self.timestamps.len() >= 2 {
            let previous = self.timestamps[self.timestamps.len() - 2];
            if previous.saturating_add(self.config.delay_ms) > now_ms
                && history.front() == history.back()
            {
                return false;
            }
        }

        let half = self.config.stability;
        let old_avg = history.iter().take(half).sum::<f64>() / half as f64;
        let new_avg = history.iter().skip(half).sum::<f64>() / half as f64;

        old_avg < new_avg * self.config.tolerance && self.config.sensitivity < new_avg
    }
}

impl Default for ScrollIntent {
    fn default() -> Self {
        Self::new(IntentConfig::default())
    }
}

fn push_bounded<T>(queue: &mut VecDeque<T>, value: T, capacity: usize) {
    queue.push_back(value);
    while queue.len() > capacity {
        queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::{IntentConfig, ScrollIntent};

    fn small() -> ScrollIntent {
        ScrollIntent::new(IntentConfig {
            stability: 2,
            sensitivity: 2.0,
            tolerance: 1.1,
            delay_ms: 100,
        })
    }

    #[test]
    fn accepts_until_history_is_full() {
        let mut intent = small();
        assert!(intent.check(1.0, 0));
        assert!(intent.check(1.0, 200));
        assert!(intent.check(1.0, 400));
    }

    #[test]
    fn zero_delta_is_not_intentional() {
        let mut intent = small();
        assert!(!intent.check(0.0, 0));
    }

    #[test]
    fn decaying_tail_is_rejected() {
        let mut intent = small();
        let mut t = 0;
        for delta in [40.0, 30.0, 20.0, 10.0] {
            intent.check(delta, t);
            t += 16;
        }
        assert!(!intent.check(5.0, t));
    }

    #[test]
    fn accelerating_input_is_accepted() {
        let mut intent = small();
        let mut t = 0;
        for delta in [3.0, 4.0, 6.0, 9.0] {
            intent.check(delta, t);
            t += 200;
        }
        assert!(intent.check(14.0, t));
    }

    #[test]
    fn rapid_identical_deltas_are_inertial() {
        let mut intent = small();
        for i in 0..4 {
            intent.check(10.0, i * 10);
        }
        assert!(!intent.check(10.0, 40));
    }

    #[test]
    fn tiny_deltas_fall_below_sensitivity() {
        let mut intent = small();
        let mut t = 0;
        for delta in [0.5, 0.6, 0.8, 1.0] {
            intent.check(delta, t);
            t += 200;
        }
        assert!(!intent.check(1.2, t));
    }

    #[test]
    fn directions_are_tracked_separately() {
        let mut intent = small();
        let mut t = 0;
        for delta in [40.0, 30.0, 20.0, 10.0] {
            intent.check(delta, t);
            t += 16;
        }
        // The negative history is empty, so a reversal is accepted.
        assert!(intent.check(-5.0, t));

        intent.reset();
        assert!(intent.check(5.0, t + 16));
    }

    #[test]
    fn stability_is_at_least_one() {
        let intent = ScrollIntent::new(IntentConfig {
            stability: 0,
            ..IntentConfig::default()
        });
        assert_eq!(intent.config().stability, 1);
    }
}
