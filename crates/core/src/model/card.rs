use crate::model::ids::CardId;

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// Authoring row for the static language-pack tables.
///
/// Carries no id; ids are assigned when the rows are loaded into a `Deck`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardEntry {
    pub category: &'static str,
    pub front: &'static str,
    pub back: &'static str,
    pub notes: &'static str,
    pub emoji: &'static str,
}

impl CardEntry {
    #[must_use]
    pub fn assign_id(self, id: CardId) -> Flashcard {
        Flashcard {
            id,
            category: self.category.to_owned(),
            front: self.front.to_owned(),
            back: self.back.to_owned(),
            notes: self.notes.to_owned(),
            emoji: self.emoji.to_owned(),
        }
    }
}

/// An immutable front/back card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    id: CardId,
    category: String,
    front: String,
    back: String,
    notes: String,
    emoji: String,
}

impl Flashcard {
    #[must_use]
    pub fn new(
        id: CardId,
        category: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
        notes: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            front: front.into(),
            back: back.into(),
            notes: notes.into(),
            emoji: emoji.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }

    /// Usage hint shown on the back; may be empty.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }

    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    /// True when both cards carry the same content, ignoring ids.
    #[must_use]
    pub fn same_content(&self, other: &Flashcard) -> bool {
        self.category == other.category
            && self.front == other.front
            && self.back == other.back
            && self.notes == other.notes
            && self.emoji == other.emoji
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
