// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves.

/// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Identity curve.
    Linear,
    /// Symmetric quadratic ease‑in‑out.
    ///
    /// `2p²` for the first half, `-1 + (4 - 2p)p` for the second half.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Applies the curve. Input outside `[0, 1]` is clamped first.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => p,
            Self::EaseInOut => ease_in_out(p),
        }
    }
}

/// Symmetric quadratic ease‑in‑out for `progress` in `[0, 1]`.
#[must_use]
pub fn ease_in_out(progress: f64) -> f64 {
    if progress < 0.5 {
        2.0 * progress * progress
    } else {
        -1.0 + (4.0 - 2.0 * progress) * progress
    }
}

#[cfg(test)]
mod tests {
    use super::{Easing, ease_in_out};

    #[test]
    fn ease_in_out_endpoints_and_symmetry() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
        for p in [0.1, 0.2, 0.3, 0.45] {
            let lhs = ease_in_out(p);
            let rhs = 1.0 - ease_in_out(1.0 - p);
            assert!((lhs - rhs).abs() < 1e-12, "curve is point-symmetric at 0.5");
        }
    }

    #[test]
    fn ease_in_out_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(f64::from(i) / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn apply_clamps_progress() {
        assert_eq!(Easing::EaseInOut.apply(-3.0), 0.0);
        assert_eq!(Easing::EaseInOut.apply(7.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
    }
}
