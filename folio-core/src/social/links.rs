// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Links List
//!
//! The ordered, read-only list of configured social entries. Built once at
//! startup from the embedded defaults or a user-supplied JSON file.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{FolioError, FolioResult};

use super::entry::SocialEntry;

/// Embedded social link data (loaded at compile time).
const SOCIAL_JSON: &str = include_str!("social.json");

/// Ordered list of social entries with unique keys.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialLinks {
    entries: Vec<SocialEntry>,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SocialLinks {
    /// Creates the list from the embedded defaults.
    pub fn with_defaults() -> Self {
        Self::from_json(SOCIAL_JSON).expect("Invalid embedded social.json")
    }

    /// Creates the list, rejecting duplicate keys.
    pub fn from_entries(entries: Vec<SocialEntry>) -> FolioResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(FolioError::DuplicateKey(entry.key.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parses a JSON array of entries.
    ///
    /// Entries that do not parse are skipped with a warning. Only a document
    /// that is not an array, or duplicate keys, fail the whole list.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let entries = values
            .into_iter()
            .enumerate()
            .filter_map(|(position, value)| match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(position, error = %e, "skipping malformed social entry");
                    None
                }
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Loads a JSON array of entries from disk.
    pub fn load(path: &Path) -> FolioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let links = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            entries = links.len(),
            "loaded social links"
        );
        Ok(links)
    }

    /// All configured entries, in order.
    pub fn entries(&self) -> &[SocialEntry] {
        &self.entries
    }

    /// Entries with a non-empty destination, in order.
    pub fn visible(&self) -> impl Iterator<Item = &SocialEntry> {
        self.entries.iter().filter(|e| e.has_destination())
    }

    pub fn get(&self, key: &str) -> Option<&SocialEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the list to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}
