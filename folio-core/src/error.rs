// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Folio Error Types
//!
//! Only configuration loading can fail. Rendering degrades silently instead.

use thiserror::Error;

/// Unified error type for Folio configuration.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration value was rejected.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file was not valid JSON.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Two social entries share the same key.
    #[error("duplicate social entry key: {0}")]
    DuplicateKey(String),

    /// Accent color is not a `#rrggbb` string.
    #[error("invalid hex color: {0}")]
    InvalidColor(String),

    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Folio operations.
pub type FolioResult<T> = Result<T, FolioError>;
