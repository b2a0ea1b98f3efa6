use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The language packs that ship with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Spanish,
    Italian,
    German,
    Canadian,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown language: {0:?}")]
pub struct LanguageParseError(pub String);

impl Language {
    /// All packs, in the order they are offered at login.
    pub const ALL: [Language; 4] = [
        Language::Spanish,
        Language::Italian,
        Language::German,
        Language::Canadian,
    ];

    /// Token used in storage keys and on the command line.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::German => "german",
            Language::Canadian => "canadian",
        }
    }

    /// English display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::German => "German",
            Language::Canadian => "Canadian",
        }
    }

    /// Heading shown above the card view, written in the pack's own language.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Language::Spanish => "Tarjetas de Español",
            Language::Italian => "Flashcard Italiane",
            Language::German => "Deutsche Lernkarten",
            Language::Canadian => "Canadian Flashcards, eh?",
        }
    }

    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Language::Spanish => "🇲🇽",
            Language::Italian => "🇮🇹",
            Language::German => "🇩🇪",
            Language::Canadian => "🇨🇦",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| LanguageParseError(s.to_string()))
    }
}
