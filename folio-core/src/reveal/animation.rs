// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reveal Playback
//!
//! A `Reveal` is owned by the element it animates. It plays once after
//! `mount`, is sampled by the front end on every frame and stops mutating
//! as soon as it is cancelled or dropped.

use std::time::{Duration, Instant};

use super::easing::Ease;
use super::params::RevealParams;

/// Visual state of a revealed element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    /// Downward offset from the resting position.
    pub offset_y: f64,
    /// 0.0 is fully transparent, 1.0 fully opaque.
    pub opacity: f64,
}

impl RevealFrame {
    /// Starting frame: pushed down by `distance`, invisible.
    pub fn hidden(distance: f64) -> Self {
        Self {
            offset_y: distance,
            opacity: 0.0,
        }
    }

    /// Final frame: in place, fully opaque.
    pub fn resting() -> Self {
        Self {
            offset_y: 0.0,
            opacity: 1.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Lifecycle of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Created but not mounted yet.
    Pending,
    /// Mounted; waiting for its delay or moving.
    Running,
    /// Reached the resting frame.
    Settled,
    /// Stopped by its owner before settling.
    Cancelled,
}

/// One-shot entrance transition from `hidden(distance)` to `resting()`.
#[derive(Debug, Clone)]
pub struct Reveal {
    params: RevealParams,
    ease: Ease,
    phase: RevealPhase,
    mounted_at: Option<Instant>,
    /// Start delay fixed when playback started.
    start_delay: Duration,
    last: RevealFrame,
}

impl Reveal {
    pub fn new(params: RevealParams) -> Self {
        Self {
            params,
            ease: Ease::default(),
            phase: RevealPhase::Pending,
            mounted_at: None,
            start_delay: params.start_delay_duration(),
            last: RevealFrame::hidden(params.distance),
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn params(&self) -> &RevealParams {
        &self.params
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == RevealPhase::Settled
    }

    /// Starts playback. Only the first mount has an effect.
    pub fn mount(&mut self, now: Instant) {
        if self.phase != RevealPhase::Pending {
            return;
        }
        tracing::trace!(
            index = self.params.index,
            delay = self.params.start_delay(),
            "reveal mounted"
        );
        self.start(now);
    }

    /// Replaces the parameters, replaying if the animation identity changed.
    ///
    /// Returns true when a replay was started. A running reveal keeps the
    /// start delay it was mounted with.
    pub fn update(&mut self, params: RevealParams, now: Instant) -> bool {
        let replay = params.replays_from(&self.params);
        self.params = params;

        if !replay || self.phase == RevealPhase::Pending {
            return false;
        }

        tracing::debug!(index = params.index, "reveal parameters changed, replaying");
        self.start(now);
        true
    }

    /// Stops playback, freezing the element at the last sampled frame.
    pub fn cancel(&mut self) {
        if matches!(self.phase, RevealPhase::Pending | RevealPhase::Running) {
            self.phase = RevealPhase::Cancelled;
        }
    }

    /// Jumps straight to the resting frame.
    pub fn finish(&mut self) {
        if self.phase != RevealPhase::Cancelled {
            self.phase = RevealPhase::Settled;
            self.last = RevealFrame::resting();
        }
    }

    /// Samples the frame to display at `now`.
    pub fn sample(&mut self, now: Instant) -> RevealFrame {
        let mounted_at = match (self.phase, self.mounted_at) {
            (RevealPhase::Running, Some(at)) => at,
            (RevealPhase::Pending, _) => return RevealFrame::hidden(self.params.distance),
            _ => return self.last,
        };

        let elapsed = now.saturating_duration_since(mounted_at);
        let delay = self.start_delay;
        if elapsed < delay {
            self.last = RevealFrame::hidden(self.params.distance);
            return self.last;
        }

        let duration = self.params.duration_as_duration();
        let playing = elapsed - delay;
        if duration.is_zero() || playing >= duration {
            self.phase = RevealPhase::Settled;
            self.last = RevealFrame::resting();
            return self.last;
        }

        let progress = self
            .ease
            .apply(playing.as_secs_f64() / duration.as_secs_f64());
        self.last = RevealFrame {
            offset_y: self.params.distance * (1.0 - progress),
            opacity: progress,
        };
        self.last
    }

    fn start(&mut self, now: Instant) {
        self.phase = RevealPhase::Running;
        self.mounted_at = Some(now);
        self.start_delay = self.params.start_delay_duration();
        self.last = RevealFrame::hidden(self.params.distance);
    }
}
