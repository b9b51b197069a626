// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Site Configuration
//!
//! Settings are read once at startup: defaults, then an optional JSON file,
//! then `FOLIO_*` environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::i18n::Locale;
use crate::social::{LinkDispatcher, QrImage, SocialLinks};

/// Environment variable selecting the locale (`zh`, `en`).
pub const ENV_LOCALE: &str = "FOLIO_LOCALE";
/// Environment variable pointing at a social links JSON file.
pub const ENV_SOCIAL_FILE: &str = "FOLIO_SOCIAL_FILE";
/// Environment variable disabling reveal animations (`1`/`true`).
pub const ENV_REDUCED_MOTION: &str = "FOLIO_REDUCED_MOTION";
/// Environment variable with the data encoded in the QR image.
pub const ENV_QR_PAYLOAD: &str = "FOLIO_QR_PAYLOAD";

/// Configuration of the site front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub locale: Locale,
    /// Replaces the embedded social links when set.
    pub social_file: Option<PathBuf>,
    pub qr_image: QrImage,
    /// Settle every reveal immediately.
    pub reduced_motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            social_file: None,
            qr_image: QrImage::default(),
            reduced_motion: false,
        }
    }
}

impl SiteConfig {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_social_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.social_file = Some(path.into());
        self
    }

    pub fn with_qr_image(mut self, qr_image: QrImage) -> Self {
        self.qr_image = qr_image;
        self
    }

    pub fn without_motion(mut self) -> Self {
        self.reduced_motion = true;
        self
    }

    /// Default config file location (`<config dir>/folio/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.json"))
    }

    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> FolioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Defaults, overlaid with the default config file and the environment.
    pub fn from_env() -> FolioResult<Self> {
        let base = match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path)?,
            _ => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `FOLIO_*` overrides resolved through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> FolioResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup(ENV_LOCALE) {
            self.locale = Locale::from_code(&code)
                .ok_or_else(|| FolioError::Config(format!("unknown locale: {code}")))?;
        }
        if let Some(path) = lookup(ENV_SOCIAL_FILE).filter(|p| !p.is_empty()) {
            self.social_file = Some(PathBuf::from(path));
        }
        if let Some(flag) = lookup(ENV_REDUCED_MOTION) {
            self.reduced_motion = matches!(flag.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(payload) = lookup(ENV_QR_PAYLOAD).filter(|p| !p.is_empty()) {
            self.qr_image.payload = Some(payload);
        }
        Ok(self)
    }

    /// Social links from `social_file`, or the embedded defaults.
    pub fn social_links(&self) -> FolioResult<SocialLinks> {
        match &self.social_file {
            Some(path) => SocialLinks::load(path),
            None => Ok(SocialLinks::with_defaults()),
        }
    }

    pub fn dispatcher(&self) -> FolioResult<LinkDispatcher> {
        Ok(LinkDispatcher::new(
            self.social_links()?,
            self.qr_image.clone(),
        ))
    }
}
