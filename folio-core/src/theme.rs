// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Accent Colors
//!
//! Social entries carry a `#rrggbb` accent. Front ends blend accents toward
//! the background to fade elements in while a reveal is playing.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accent {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Accent {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` string.
    pub fn parse(color: &str) -> FolioResult<Self> {
        let invalid = || FolioError::InvalidColor(color.to_string());
        if !color.starts_with('#') || color.len() != 7 || !color.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&color[range], 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: channel(1..3)?,
            g: channel(3..5)?,
            b: channel(5..7)?,
        })
    }

    /// Linear blend: `t = 0.0` yields `self`, `t = 1.0` yields `other`.
    pub fn mix(self, other: Accent, t: f64) -> Accent {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Accent {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors of the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Accent,
    pub text: Accent,
    pub muted: Accent,
    pub highlight: Accent,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Accent::rgb(0x1a, 0x1a, 0x2e),
            text: Accent::rgb(0xee, 0xee, 0xee),
            muted: Accent::rgb(0xa0, 0xa0, 0xa0),
            highlight: Accent::rgb(0x4f, 0xc3, 0xf7),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
