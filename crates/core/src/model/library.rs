use crate::model::deck::Deck;
use crate::model::language::Language;
use crate::packs;

/// The decks available for study, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    decks: Vec<Deck>,
}

impl Library {
    /// The hand-authored packs shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let decks = Language::ALL
            .into_iter()
            .map(|lang| Deck::from_entries(lang, packs::entries(lang)))
            .collect();
        Self { decks }
    }

    /// A library over custom decks. A later deck for the same language wins.
    #[must_use]
    pub fn from_decks(decks: impl IntoIterator<Item = Deck>) -> Self {
        let mut out: Vec<Deck> = Vec::new();
        for deck in decks {
            out.retain(|existing| existing.language() != deck.language());
            out.push(deck);
        }
        Self { decks: out }
    }

    #[must_use]
    pub fn deck(&self, language: Language) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.language() == language)
    }

    #[must_use]
    pub fn languages(&self) -> Vec<Language> {
        self.decks.iter().map(Deck::language).collect()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::builtin()
    }
}
