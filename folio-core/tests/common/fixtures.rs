// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures

use folio_core::social::{Icon, LinkDispatcher, LinkKind, QrImage, SocialEntry, SocialLinks};

/// GitHub with a destination and WeChat without one.
pub fn github_and_hidden_wechat() -> Vec<SocialEntry> {
    vec![
        SocialEntry::new("github", "GitHub")
            .with_href("https://x")
            .with_kind(LinkKind::Anchor),
        SocialEntry::new("wx", "WeChat")
            .with_href("")
            .with_kind(LinkKind::QrReveal),
    ]
}

/// A visible WeChat entry using the QR renderer.
pub fn wechat() -> SocialEntry {
    SocialEntry::new("wx", "WeChat")
        .with_href("https://weixin.example")
        .with_icon(Icon::Named("ri:wechat-2-line".into()))
        .with_kind(LinkKind::QrReveal)
        .with_color("#07c160")
}

pub fn dispatcher_for(entries: Vec<SocialEntry>) -> LinkDispatcher {
    LinkDispatcher::new(
        SocialLinks::from_entries(entries).expect("fixture keys are unique"),
        QrImage::default(),
    )
}
