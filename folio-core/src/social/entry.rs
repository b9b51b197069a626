// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Entries

use serde::{Deserialize, Serialize};

use crate::theme::Accent;

/// Icon of a social entry.
///
/// Plain JSON strings are icon-set identifiers (e.g. `"ri:github-line"`);
/// `{"inline": "..."}` carries a glyph or markup to show as-is. `null` is an
/// empty icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IconRepr", into = "IconRepr")]
pub enum Icon {
    Named(String),
    Inline(String),
}

impl Icon {
    pub fn is_empty(&self) -> bool {
        match self {
            Icon::Named(s) | Icon::Inline(s) => s.is_empty(),
        }
    }
}

impl Default for Icon {
    fn default() -> Self {
        Icon::Inline(String::new())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IconRepr {
    Named(String),
    Inline { inline: String },
    Empty,
}

impl From<IconRepr> for Icon {
    fn from(repr: IconRepr) -> Self {
        match repr {
            IconRepr::Named(name) => Icon::Named(name),
            IconRepr::Inline { inline } => Icon::Inline(inline),
            IconRepr::Empty => Icon::default(),
        }
    }
}

impl From<Icon> for IconRepr {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Named(name) => IconRepr::Named(name),
            Icon::Inline(inline) => IconRepr::Inline { inline },
        }
    }
}

/// Renderer selected for an entry.
///
/// Configuration stores this as the free-form `type` tag. Only `"wx"` has an
/// override renderer; every other tag, or none, renders as a plain anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum LinkKind {
    /// Hyperlink opening in a new browsing context.
    #[default]
    Anchor,
    /// Click-to-reveal QR image; never navigates.
    QrReveal,
}

impl LinkKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "wx" => LinkKind::QrReveal,
            _ => LinkKind::Anchor,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            LinkKind::Anchor => "link",
            LinkKind::QrReveal => "wx",
        }
    }
}

impl From<String> for LinkKind {
    fn from(tag: String) -> Self {
        LinkKind::from_tag(&tag)
    }
}

impl From<Option<String>> for LinkKind {
    fn from(tag: Option<String>) -> Self {
        tag.map(LinkKind::from).unwrap_or_default()
    }
}

impl From<LinkKind> for String {
    fn from(kind: LinkKind) -> Self {
        kind.tag().to_string()
    }
}

/// One configured social platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialEntry {
    /// Unique identifier (e.g. "github").
    pub key: String,
    /// Destination; entries without one are not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Display label, also used as the hover label.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(rename = "type", default)]
    pub kind: LinkKind,
    /// `#rrggbb` accent color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SocialEntry {
    pub fn new(key: &str, title: &str) -> Self {
        Self {
            key: key.to_string(),
            href: None,
            title: title.to_string(),
            icon: Icon::default(),
            kind: LinkKind::default(),
            color: None,
        }
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_kind(mut self, kind: LinkKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// True when `href` is present and non-empty.
    pub fn has_destination(&self) -> bool {
        self.href.as_deref().is_some_and(|href| !href.is_empty())
    }

    /// Parsed accent color; malformed colors yield `None`.
    pub fn accent(&self) -> Option<Accent> {
        self.color.as_deref().and_then(|c| Accent::parse(c).ok())
    }
}
