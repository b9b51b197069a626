// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hero Landing Section
//!
//! Fixed composition of the landing page: greeting, introduction, social
//! bar and the call-to-action, each wrapped in its own reveal with indices
//! 1 to 4 so they cascade in.

use crate::i18n::{translate, Locale};
use crate::reveal::RevealParams;
use crate::route::Route;

/// Content of one hero block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroBlock {
    Greeting {
        greet: String,
        name: String,
        wave: String,
    },
    Intro {
        text: String,
    },
    /// Placeholder for the link dispatcher output.
    SocialBar,
    Action {
        label: String,
        route: Route,
    },
}

/// A hero block together with its reveal parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroSlot {
    pub reveal: RevealParams,
    pub block: HeroBlock,
}

/// The landing section.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    slots: Vec<HeroSlot>,
}

impl Hero {
    pub fn new(locale: Locale) -> Self {
        let blocks = [
            HeroBlock::Greeting {
                greet: translate(locale, "homepage.hero.greet", "你好! 我是"),
                name: translate(locale, "homepage.hero.name", "淬己"),
                wave: "👋".to_string(),
            },
            HeroBlock::Intro {
                text: translate(
                    locale,
                    "homepage.hero.text",
                    "在这里我会分享各类技术栈所遇到问题与解决方案，带你了解最新的技术栈以及实际开发中如何应用，并希望我的开发经历对你有所启发。",
                ),
            },
            HeroBlock::SocialBar,
            HeroBlock::Action {
                label: translate(locale, "homepage.hero.introduce", "自我介绍"),
                route: Route::About,
            },
        ];

        let slots = blocks
            .into_iter()
            .zip(1u32..)
            .map(|(block, index)| HeroSlot {
                reveal: RevealParams::at_index(index),
                block,
            })
            .collect();

        Self { slots }
    }

    /// Slots in display order.
    pub fn slots(&self) -> &[HeroSlot] {
        &self.slots
    }

    /// Route the call-to-action navigates to.
    pub fn activate_action(&self) -> Route {
        let route = self
            .slots
            .iter()
            .find_map(|slot| match slot.block {
                HeroBlock::Action { route, .. } => Some(route),
                _ => None,
            })
            .unwrap_or(Route::About);
        tracing::info!(path = route.path(), "hero action activated");
        route
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
