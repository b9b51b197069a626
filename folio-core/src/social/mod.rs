// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Links
//!
//! This module provides:
//! - The static list of social entries shown on the landing page
//! - Dispatch of each entry to its renderer (default anchor or QR reveal)
//! - The QR image shown by the reveal renderer

mod dispatch;
mod entry;
mod links;
mod qr;

pub use dispatch::{Activation, LinkDispatcher, LinkTarget, RenderedLink};
pub use entry::{Icon, LinkKind, SocialEntry};
pub use links::SocialLinks;
pub use qr::{QrImage, DEFAULT_QR_ASSET};
