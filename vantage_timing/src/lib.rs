// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_timing --heading-base-level=0

//! Vantage Timing: host‑clocked animation and rate‑limiting primitives.
//!
//! Nothing in this crate reads a clock. Every time‑aware operation takes a
//! `now` timestamp in milliseconds supplied by the host (for example from a
//! display‑refresh callback), which keeps behavior deterministic and makes the
//! primitives trivial to test.
//!
//! - [`easing`]: easing curves mapping linear progress to eased progress.
//! - [`tween`]: an explicit interpolation task `{start, duration, from, to}`
//!   that is sampled on each refresh tick and replaced to cancel.
//! - [`throttle`]: a leading + trailing rate limiter for outbound
//!   notifications.
//!
//! ## Tweening
//!
//! ```rust
//! use vantage_timing::tween::Tween;
//!
//! // Animate from 0 to 10 over 300ms starting at t=1000.
//! let tween = Tween::new(0.0_f64, 10.0, 1_000, 300.0);
//! assert_eq!(tween.sample(1_000), 0.0);
//! assert_eq!(tween.sample(1_150), 5.0);
//! assert!(tween.is_finished(1_300));
//! assert_eq!(tween.sample(5_000), 10.0);
//! ```
//!
//! ## Throttling
//!
//! ```rust
//! use vantage_timing::throttle::Throttle;
//!
//! let mut throttle = Throttle::new(25);
//! assert_eq!(throttle.offer(0, "a"), Some("a")); // leading edge
//! assert_eq!(throttle.offer(10, "b"), None); // held back
//! assert_eq!(throttle.offer(20, "c"), None); // replaces "b"
//! assert_eq!(throttle.poll(25), Some("c")); // trailing edge
//! ```
//!
//! ## Features
//!
//! - `kurbo` (default): [`tween::Interpolate`] implementations for Kurbo's
//!   `Point` and `Vec2`.
//!
//! This crate is `no_std`.

#![no_std]

pub mod easing;
pub mod throttle;
pub mod tween;
