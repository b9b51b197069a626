// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Owned Reveal Task
//!
//! Drives a `Reveal` on the tokio runtime and publishes each sampled frame on
//! a watch channel. The task lives exactly as long as its `RevealTask`
//! handle: dropping or cancelling the handle aborts it.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};

use super::animation::{Reveal, RevealFrame, RevealPhase};

/// Handle to a running reveal task.
pub struct RevealTask {
    frames: watch::Receiver<RevealFrame>,
    handle: JoinHandle<()>,
}

impl RevealTask {
    /// Mounts `reveal` now and samples it every `tick` until it settles.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(mut reveal: Reveal, tick: Duration) -> Self {
        let (tx, frames) = watch::channel(RevealFrame::hidden(reveal.params().distance));

        let handle = tokio::spawn(async move {
            reveal.mount(Instant::now().into_std());

            let mut ticker = interval(tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let frame = reveal.sample(Instant::now().into_std());
                if tx.send(frame).is_err() {
                    break;
                }
                if reveal.phase() != RevealPhase::Running {
                    break;
                }
            }
        });

        Self { frames, handle }
    }

    /// Latest published frame.
    pub fn current(&self) -> RevealFrame {
        *self.frames.borrow()
    }

    /// A receiver that observes every new frame.
    pub fn frames(&self) -> watch::Receiver<RevealFrame> {
        self.frames.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stops the task, leaving the last published frame in place.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for RevealTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
