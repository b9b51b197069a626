// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reveal Parameters

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default playback length in seconds.
pub const DEFAULT_DURATION: f64 = 1.0;
/// Default vertical travel of the entrance.
pub const DEFAULT_DISTANCE: f64 = 50.0;
/// Default per-index delay multiplier in seconds.
pub const DEFAULT_STAGGER: f64 = 0.3;

/// Configuration of a single reveal playback.
///
/// All durations are in seconds. `index` orders sibling reveals: the
/// effective start delay is `round(index * stagger, 1) + delay`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealParams {
    pub duration: f64,
    pub delay: f64,
    pub distance: f64,
    pub index: u32,
    pub stagger: f64,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            delay: 0.0,
            distance: DEFAULT_DISTANCE,
            index: 1,
            stagger: DEFAULT_STAGGER,
        }
    }
}

impl RevealParams {
    /// Creates default parameters at the given ordinal index.
    pub fn at_index(index: u32) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    /// Delay contributed by the index, rounded to one decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_core::reveal::RevealParams;
    ///
    /// assert_eq!(RevealParams::at_index(3).staggered_delay(), 0.9);
    /// assert_eq!(RevealParams::at_index(4).with_stagger(0.25).staggered_delay(), 1.0);
    /// ```
    pub fn staggered_delay(&self) -> f64 {
        round_tenth(self.index as f64 * self.stagger)
    }

    /// Staggered delay plus the explicit `delay`.
    pub fn start_delay(&self) -> f64 {
        self.staggered_delay() + self.delay
    }

    pub fn start_delay_duration(&self) -> Duration {
        secs(self.start_delay())
    }

    pub fn duration_as_duration(&self) -> Duration {
        secs(self.duration)
    }

    /// True when a change from `other` to `self` requires a replay.
    ///
    /// `delay` is deliberately not part of the identity.
    pub fn replays_from(&self, other: &RevealParams) -> bool {
        self.index != other.index
            || self.duration != other.duration
            || self.distance != other.distance
            || self.stagger != other.stagger
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Converts seconds to a `Duration`. Negative or NaN input is zero, values
/// beyond the representable range saturate at `Duration::MAX`.
pub(crate) fn secs(value: f64) -> Duration {
    if value.is_nan() || value <= 0.0 {
        Duration::ZERO
    } else {
        Duration::try_from_secs_f64(value).unwrap_or(Duration::MAX)
    }
}
