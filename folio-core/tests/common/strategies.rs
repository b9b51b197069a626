// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use folio_core::reveal::RevealParams;
use folio_core::social::{LinkKind, SocialEntry};
use proptest::prelude::*;

/// Stagger factors in the range a page would plausibly use.
pub fn stagger_strategy() -> impl Strategy<Value = f64> {
    0.0f64..2.0
}

/// Reveal parameters with non-negative timings.
pub fn reveal_params_strategy() -> impl Strategy<Value = RevealParams> {
    (0u32..8, stagger_strategy(), 0.0f64..3.0, 0.0f64..200.0, 0.0f64..1.0).prop_map(
        |(index, stagger, duration, distance, delay)| {
            RevealParams::at_index(index)
                .with_stagger(stagger)
                .with_duration(duration)
                .with_distance(distance)
                .with_delay(delay)
        },
    )
}

/// Timings of any magnitude, including values no `Duration` can hold.
pub fn extreme_seconds_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>(),
        Just(f64::MAX),
        Just(f64::INFINITY),
        Just(1e30),
        -1e30f64..1e30,
    ]
}

/// Optional destination: absent, empty or a URL.
pub fn href_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-z]{1,10}".prop_map(|s| Some(format!("https://{s}.example"))),
    ]
}

/// Lists of entries with unique keys and arbitrary destinations and tags.
pub fn entries_strategy() -> impl Strategy<Value = Vec<SocialEntry>> {
    prop::collection::vec((href_strategy(), any::<bool>()), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (href, qr))| {
                let kind = if qr { LinkKind::QrReveal } else { LinkKind::Anchor };
                let mut entry = SocialEntry::new(&format!("key{i}"), &format!("Title {i}"))
                    .with_kind(kind);
                entry.href = href;
                entry
            })
            .collect()
    })
}
