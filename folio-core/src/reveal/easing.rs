// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Easing Curves

use serde::{Deserialize, Serialize};

/// Ease-out curves mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    Power1Out,
    Power2Out,
    #[default]
    Power3Out,
    Power4Out,
}

impl Ease {
    /// Applies the curve. Input is clamped to `0.0..=1.0`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Linear => t,
            Ease::Power1Out => out(t, 2),
            Ease::Power2Out => out(t, 3),
            Ease::Power3Out => out(t, 4),
            Ease::Power4Out => out(t, 5),
        }
    }
}

// PowerN names count from quadratic, so power3 is the quartic ease-out.
fn out(t: f64, exponent: i32) -> f64 {
    1.0 - (1.0 - t).powi(exponent)
}
