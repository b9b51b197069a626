// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Link Dispatch
//!
//! Turns the visible social entries into render descriptions and handles
//! activations. Each entry goes through the renderer named by its
//! `LinkKind`; the QR reveal renderer keeps a per-entry reveal flag.

use std::collections::HashMap;

use crate::theme::Accent;

use super::entry::{Icon, LinkKind, SocialEntry};
use super::links::SocialLinks;
use super::qr::QrImage;

/// Browsing context a hyperlink opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkTarget {
    /// A new tab or window (`target="_blank"`).
    #[default]
    NewContext,
}

impl LinkTarget {
    pub fn as_attr(&self) -> &'static str {
        match self {
            LinkTarget::NewContext => "_blank",
        }
    }
}

/// Render description of one social link.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedLink {
    /// Default hyperlink template.
    Anchor {
        key: String,
        href: String,
        title: String,
        icon: Icon,
        accent: Option<Accent>,
        target: LinkTarget,
    },
    /// Click-to-reveal image; carries no destination.
    QrReveal {
        key: String,
        title: String,
        icon: Icon,
        accent: Option<Accent>,
        image: QrImage,
        revealed: bool,
    },
}

impl RenderedLink {
    pub fn key(&self) -> &str {
        match self {
            RenderedLink::Anchor { key, .. } | RenderedLink::QrReveal { key, .. } => key,
        }
    }

    /// Label of the link, also shown as its hover label.
    pub fn title(&self) -> &str {
        match self {
            RenderedLink::Anchor { title, .. } | RenderedLink::QrReveal { title, .. } => title,
        }
    }

    pub fn icon(&self) -> &Icon {
        match self {
            RenderedLink::Anchor { icon, .. } | RenderedLink::QrReveal { icon, .. } => icon,
        }
    }

    pub fn accent(&self) -> Option<Accent> {
        match self {
            RenderedLink::Anchor { accent, .. } | RenderedLink::QrReveal { accent, .. } => *accent,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            RenderedLink::Anchor { href, .. } => Some(href),
            RenderedLink::QrReveal { .. } => None,
        }
    }

    /// Hover label: the title, followed by the destination for anchors.
    pub fn tooltip(&self) -> String {
        match self.href() {
            Some(href) => format!("{} ({})", self.title(), href),
            None => self.title().to_string(),
        }
    }
}

/// Result of activating a rendered link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Navigate to `href` in `target`.
    Open { href: String, target: LinkTarget },
    /// The QR image was shown (`true`) or hidden (`false`).
    Toggled { key: String, revealed: bool },
}

/// Renders social entries and routes activations to their renderer.
#[derive(Debug, Clone)]
pub struct LinkDispatcher {
    links: SocialLinks,
    qr_image: QrImage,
    revealed: HashMap<String, bool>,
}

impl LinkDispatcher {
    pub fn new(links: SocialLinks, qr_image: QrImage) -> Self {
        Self {
            links,
            qr_image,
            revealed: HashMap::new(),
        }
    }

    pub fn links(&self) -> &SocialLinks {
        &self.links
    }

    pub fn qr_image(&self) -> &QrImage {
        &self.qr_image
    }

    /// Renders every entry with a destination, in configuration order.
    pub fn render(&self) -> Vec<RenderedLink> {
        self.links
            .visible()
            .map(|entry| self.render_entry(entry))
            .collect()
    }

    /// Number of links `render` produces.
    pub fn visible_len(&self) -> usize {
        self.links.visible().count()
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.get(key).copied().unwrap_or(false)
    }

    /// Activates the visible entry `key`.
    ///
    /// Returns `None` for unknown or hidden entries.
    pub fn activate(&mut self, key: &str) -> Option<Activation> {
        let entry = self.links.visible().find(|e| e.key == key)?;

        match entry.kind {
            LinkKind::Anchor => {
                let href = entry.href.clone().unwrap_or_default();
                tracing::info!(key, %href, "opening social link");
                Some(Activation::Open {
                    href,
                    target: LinkTarget::NewContext,
                })
            }
            LinkKind::QrReveal => {
                let key = entry.key.clone();
                let flag = self.revealed.entry(key.clone()).or_insert(false);
                *flag = !*flag;
                tracing::debug!(key = %key, revealed = *flag, "toggled QR image");
                Some(Activation::Toggled {
                    key,
                    revealed: *flag,
                })
            }
        }
    }

    fn render_entry(&self, entry: &SocialEntry) -> RenderedLink {
        match entry.kind {
            LinkKind::Anchor => RenderedLink::Anchor {
                key: entry.key.clone(),
                href: entry.href.clone().unwrap_or_default(),
                title: entry.title.clone(),
                icon: entry.icon.clone(),
                accent: entry.accent(),
                target: LinkTarget::NewContext,
            },
            LinkKind::QrReveal => RenderedLink::QrReveal {
                key: entry.key.clone(),
                title: entry.title.clone(),
                icon: entry.icon.clone(),
                accent: entry.accent(),
                image: self.qr_image.clone(),
                revealed: self.is_revealed(&entry.key),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher(entries: Vec<SocialEntry>) -> LinkDispatcher {
        LinkDispatcher::new(
            SocialLinks::from_entries(entries).unwrap(),
            QrImage::default(),
        )
    }

    #[test]
    fn test_empty_href_excluded_regardless_of_kind() {
        let d = dispatcher(vec![
            SocialEntry::new("github", "GitHub")
                .with_href("https://x")
                .with_kind(LinkKind::Anchor),
            SocialEntry::new("wx", "WeChat")
                .with_href("")
                .with_kind(LinkKind::QrReveal),
        ]);

        let rendered = d.render();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].title(), "GitHub");
    }

    #[test]
    fn test_anchor_opens_new_context() {
        let mut d = dispatcher(vec![SocialEntry::new("github", "GitHub").with_href("https://x")]);

        match &d.render()[0] {
            RenderedLink::Anchor { href, title, target, .. } => {
                assert_eq!(href, "https://x");
                assert_eq!(title, "GitHub");
                assert_eq!(target.as_attr(), "_blank");
            }
            other => panic!("expected anchor, got {other:?}"),
        }

        assert_eq!(
            d.activate("github"),
            Some(Activation::Open {
                href: "https://x".into(),
                target: LinkTarget::NewContext
            })
        );
    }

    #[test]
    fn test_qr_toggles_and_never_navigates() {
        let mut d = dispatcher(vec![SocialEntry::new("wx", "WeChat")
            .with_href("https://weixin.example")
            .with_kind(LinkKind::QrReveal)]);

        for expected in [true, false, true, false] {
            match d.activate("wx") {
                Some(Activation::Toggled { revealed, .. }) => assert_eq!(revealed, expected),
                other => panic!("expected toggle, got {other:?}"),
            }
            assert_eq!(d.is_revealed("wx"), expected);
        }
        assert!(d.render()[0].href().is_none());
    }

    #[test]
    fn test_render_reflects_reveal_state() {
        let mut d = dispatcher(vec![SocialEntry::new("wx", "WeChat")
            .with_href("#")
            .with_kind(LinkKind::QrReveal)]);
        d.activate("wx");

        assert!(matches!(
            &d.render()[0],
            RenderedLink::QrReveal { revealed: true, .. }
        ));
    }

    #[test]
    fn test_hidden_or_unknown_keys_do_nothing() {
        let mut d = dispatcher(vec![SocialEntry::new("twitter", "Twitter")]);
        assert_eq!(d.activate("twitter"), None);
        assert_eq!(d.activate("nope"), None);
    }

    #[test]
    fn test_tooltip_shows_title_and_destination() {
        let d = dispatcher(vec![
            SocialEntry::new("github", "GitHub").with_href("https://x"),
            SocialEntry::new("wx", "WeChat")
                .with_href("#")
                .with_kind(LinkKind::QrReveal),
        ]);
        let links = d.render();
        assert_eq!(links[0].tooltip(), "GitHub (https://x)");
        assert_eq!(links[1].tooltip(), "WeChat");
    }
}
