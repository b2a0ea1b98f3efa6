use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::card::{CardEntry, Flashcard};
use crate::model::ids::CardId;
use crate::model::language::Language;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("card {0} appears more than once in the deck")]
    DuplicateCardId(CardId),

    #[error("card {0} has an empty category")]
    EmptyCategory(CardId),
}

//
// ─── CATEGORY FILTER ───────────────────────────────────────────────────────────
//

/// Sentinel shown in the category list and persisted for "no filter".
pub const ALL_CATEGORIES: &str = "All";

/// The active category filter.
///
/// Persisted as a plain string; `"All"` selects the whole deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn category(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// The selected category, or `None` for `All`.
    #[must_use]
    pub fn as_category(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Category(name) => Some(name),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.as_category().unwrap_or(ALL_CATEGORIES)
    }

    #[must_use]
    pub fn matches(&self, card: &Flashcard) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => card.category() == name,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_owned(),
            CategoryFilter::Category(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// The ordered, immutable card sequence of one language pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    language: Language,
    cards: Vec<Flashcard>,
}

impl Deck {
    /// Builds a deck from cards that already carry ids.
    ///
    /// # Errors
    ///
    /// Returns `DeckError` if two cards share an id or a card has no category.
    pub fn new(language: Language, cards: Vec<Flashcard>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if card.category().trim().is_empty() {
                return Err(DeckError::EmptyCategory(card.id()));
            }
            if !seen.insert(card.id()) {
                return Err(DeckError::DuplicateCardId(card.id()));
            }
        }
        Ok(Self { language, cards })
    }

    /// Loads static authoring rows, assigning each card its position as id.
    #[must_use]
    pub fn from_entries(language: Language, entries: &[CardEntry]) -> Self {
        let cards = (0_u32..)
            .zip(entries)
            .map(|(index, entry)| entry.assign_id(CardId::new(index)))
            .collect();
        Self { language, cards }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Flashcard> {
        self.cards.iter().find(|card| card.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.card(id).is_some()
    }

    /// Distinct categories in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.cards
            .iter()
            .map(Flashcard::category)
            .filter(|category| seen.insert(*category))
            .collect()
    }

    #[must_use]
    pub fn has_category(&self, name: &str) -> bool {
        self.cards.iter().any(|card| card.category() == name)
    }

    /// True when the filter is `All` or names a category present in this deck.
    #[must_use]
    pub fn accepts_filter(&self, filter: &CategoryFilter) -> bool {
        filter.as_category().is_none_or(|name| self.has_category(name))
    }

    /// The filtered view: cards matching `filter`, in deck order.
    ///
    /// A filter naming a category this deck lacks yields an empty view.
    #[must_use]
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<&Flashcard> {
        self.cards.iter().filter(|card| filter.matches(card)).collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
