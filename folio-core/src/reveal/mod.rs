// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reveal Animations
//!
//! This module provides:
//! - Reveal parameters with staggered start delays
//! - Easing curves for the entrance transition
//! - A sampled, cancellable reveal bound to its owner
//! - An optional tokio task publishing frames (`animation-runtime`)

mod animation;
mod easing;
mod params;
#[cfg(feature = "animation-runtime")]
mod task;

pub use animation::{Reveal, RevealFrame, RevealPhase};
pub use easing::Ease;
pub use params::RevealParams;
#[cfg(feature = "animation-runtime")]
pub use task::RevealTask;
