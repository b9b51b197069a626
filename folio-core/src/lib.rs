// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Folio Core Library
//!
//! Landing page building blocks for a personal site: staggered reveal
//! animations, the social links bar and the hero composition tying them
//! together. Nothing here touches a terminal or a browser; front ends sample
//! frames and render the dispatched links themselves.

pub mod config;
pub mod error;
pub mod hero;
pub mod i18n;
pub mod reveal;
pub mod route;
pub mod social;
pub mod theme;

pub use config::SiteConfig;
pub use error::{FolioError, FolioResult};
pub use hero::{Hero, HeroBlock, HeroSlot};
pub use i18n::Locale;
pub use reveal::{Ease, Reveal, RevealFrame, RevealParams, RevealPhase};
pub use route::Route;
pub use social::{
    Activation, Icon, LinkDispatcher, LinkKind, LinkTarget, QrImage, RenderedLink, SocialEntry,
    SocialLinks,
};
pub use theme::Accent;
