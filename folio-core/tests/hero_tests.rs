// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hero Composition Integration Tests

use std::time::{Duration, Instant};

use folio_core::hero::{Hero, HeroBlock};
use folio_core::i18n::{get_available_locales, Locale};
use folio_core::reveal::Reveal;
use folio_core::Route;

/// Test: every locale yields indices 1..4 in the same order
#[test]
fn test_slot_indices_for_all_locales() {
    for locale in get_available_locales() {
        let hero = Hero::new(locale);
        let indices: Vec<u32> = hero.slots().iter().map(|s| s.reveal.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4], "locale {:?}", locale);
    }
}

/// Test: mounting all slots at once cascades them by index
#[test]
fn test_slots_cascade() {
    let hero = Hero::default();
    let start = Instant::now();
    let mut reveals: Vec<Reveal> = hero.slots().iter().map(|s| Reveal::new(s.reveal)).collect();
    for reveal in &mut reveals {
        reveal.mount(start);
    }

    // At 0.7s: slot 1 (0.3s) and slot 2 (0.6s) are visible, 3 (0.9s) and 4 (1.2s) are not
    let at = start + Duration::from_millis(700);
    let visible: Vec<bool> = reveals
        .iter_mut()
        .map(|r| r.sample(at).is_visible())
        .collect();
    assert_eq!(visible, vec![true, true, false, false]);
}

/// Test: the call-to-action goes to the About route
#[test]
fn test_action_route() {
    let hero = Hero::new(Locale::English);
    assert_eq!(hero.activate_action(), Route::About);
    assert_eq!(hero.activate_action().path(), "/about");
    assert!(matches!(
        hero.slots()[3].block,
        HeroBlock::Action {
            route: Route::About,
            ..
        }
    ));
}
