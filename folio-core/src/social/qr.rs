// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! QR Image
//!
//! Image revealed by the `wx` renderer. The site ships it as a static asset;
//! text front ends can instead draw the encoded payload.

use serde::{Deserialize, Serialize};

/// Static asset path of the revealed image.
pub const DEFAULT_QR_ASSET: &str = "img/mywx.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrImage {
    /// Asset path, also used as alt text.
    pub asset: String,
    /// Data encoded in the image, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl Default for QrImage {
    fn default() -> Self {
        Self {
            asset: DEFAULT_QR_ASSET.to_string(),
            payload: None,
        }
    }
}

impl QrImage {
    pub fn with_payload(mut self, payload: &str) -> Self {
        self.payload = Some(payload.to_string());
        self
    }

    pub fn alt(&self) -> &str {
        &self.asset
    }

    /// Renders the payload as block characters.
    ///
    /// Returns `None` when there is no payload or it does not fit in a QR code.
    pub fn render_ascii(&self) -> Option<String> {
        use qrcode::QrCode;

        let payload = self.payload.as_deref()?;
        match QrCode::new(payload) {
            Ok(code) => Some(
                code.render()
                    .dark_color('█')
                    .light_color(' ')
                    .quiet_zone(true)
                    .build(),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "could not encode QR payload");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_asset() {
        let image = QrImage::default();
        assert_eq!(image.alt(), "img/mywx.png");
        assert!(image.render_ascii().is_none());
    }

    #[test]
    fn test_render_payload() {
        let art = QrImage::default()
            .with_payload("https://u.wechat.com/example")
            .render_ascii()
            .unwrap();
        assert!(art.contains('█'));
        assert!(art.lines().count() > 20);
    }

    #[test]
    fn test_oversized_payload_is_not_rendered() {
        let huge = "x".repeat(10_000);
        assert!(QrImage::default().with_payload(&huge).render_ascii().is_none());
    }
}
