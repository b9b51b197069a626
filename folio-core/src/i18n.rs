// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Internationalization (i18n)
//!
//! Looks up site strings by fixed identifier. Callers always pass the
//! literal to show when the identifier has no translation, so a missing
//! entry never leaves a hole in the page.
//! Supports Chinese (source) and English.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[serde(rename = "zh")]
    #[default]
    Chinese,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Get the ISO 639-1 language code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Chinese => "zh",
            Locale::English => "en",
        }
    }

    /// Parse a locale from its code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().replace('_', "-").as_str() {
            "zh" | "zh-cn" | "zh-hans" | "zh-sg" => Some(Locale::Chinese),
            "en" | "en-us" | "en-gb" => Some(Locale::English),
            _ => None,
        }
    }
}

/// Information about a locale
#[derive(Debug, Clone)]
pub struct LocaleInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub english_name: &'static str,
}

/// Get information about a locale
pub fn get_locale_info(locale: Locale) -> LocaleInfo {
    match locale {
        Locale::Chinese => LocaleInfo {
            code: "zh",
            name: "简体中文",
            english_name: "Chinese (Simplified)",
        },
        Locale::English => LocaleInfo {
            code: "en",
            name: "English",
            english_name: "English",
        },
    }
}

/// Get all available locales
pub fn get_available_locales() -> Vec<Locale> {
    vec![Locale::Chinese, Locale::English]
}

/// Translate `id`, falling back to the caller's literal.
pub fn translate(locale: Locale, id: &str, fallback: &str) -> String {
    match get_strings_for_locale(locale).get(id) {
        Some(value) => (*value).to_string(),
        None => {
            tracing::trace!(locale = locale.code(), id, "no translation, using fallback");
            fallback.to_string()
        }
    }
}

/// Translate with `{name}` argument interpolation
pub fn translate_with_args(
    locale: Locale,
    id: &str,
    fallback: &str,
    args: &[(&str, &str)],
) -> String {
    let mut result = translate(locale, id, fallback);

    for (name, value) in args {
        result = result.replace(&format!("{{{}}}", name), value);
    }

    result
}

fn get_strings_for_locale(locale: Locale) -> HashMap<&'static str, &'static str> {
    match locale {
        Locale::Chinese => chinese_strings(),
        Locale::English => english_strings(),
    }
}

// ============================================================
// Chinese Strings (Source)
// ============================================================

fn chinese_strings() -> HashMap<&'static str, &'static str> {
    let mut m = HashMap::new();

    // Hero
    m.insert("homepage.hero.greet", "你好! 我是");
    m.insert("homepage.hero.name", "淬己");
    m.insert(
        "homepage.hero.text",
        "在这里我会分享各类技术栈所遇到问题与解决方案，带你了解最新的技术栈以及实际开发中如何应用，并希望我的开发经历对你有所启发。",
    );
    m.insert("homepage.hero.introduce", "自我介绍");

    // Social
    m.insert("social.qr.hint", "扫码添加{title}");
    m.insert("social.open.failed", "无法打开 {href}");

    // About
    m.insert("about.title", "关于我");
    m.insert(
        "about.body",
        "一名热爱开源的前端开发者，喜欢折腾各种技术栈，也在这里记录学习与踩坑的过程。",
    );

    m
}

// ============================================================
// English Strings
// ============================================================

fn english_strings() -> HashMap<&'static str, &'static str> {
    let mut m = HashMap::new();

    // Hero
    m.insert("homepage.hero.greet", "Hello! I am");
    m.insert(
        "homepage.hero.text",
        "Here I share the problems and solutions I run into across different stacks, keep you up to date with new tools and how they hold up in real projects, and hope my experience helps you along the way.",
    );
    m.insert("homepage.hero.introduce", "About me");

    // Social
    m.insert("social.qr.hint", "Scan to add me on {title}");
    m.insert("social.open.failed", "Could not open {href}");

    // About
    m.insert("about.title", "About");
    m.insert(
        "about.body",
        "A front-end developer who loves open source, enjoys tinkering with all kinds of stacks and keeps notes on what was learned along the way.",
    );

    m
}
