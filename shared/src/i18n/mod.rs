//! Localization tables
//!
//! Two fixed locale tables (English and Bahasa Melayu) behind a pure
//! key lookup. Untranslated keys fall back to the key itself; there is no
//! dynamic loading and no pluralization.

mod en;
mod ms;

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ms,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ms => "ms",
        }
    }

    /// Parse a locale tag, defaulting to English for anything unknown.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ms" => Language::Ms,
            _ => Language::En,
        }
    }
}

/// Look up a UI string. Returns the key itself when untranslated.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    let table = match lang {
        Language::En => en::TABLE,
        Language::Ms => ms::TABLE,
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}
