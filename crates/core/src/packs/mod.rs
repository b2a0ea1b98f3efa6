//! Hand-authored card tables for the built-in language packs.

mod canadian;
mod german;
mod italian;
mod spanish;

use crate::model::{CardEntry, Language};

const fn card(
    category: &'static str,
    front: &'static str,
    back: &'static str,
    notes: &'static str,
    emoji: &'static str,
) -> CardEntry {
    CardEntry {
        category,
        front,
        back,
        notes,
        emoji,
    }
}

/// Static card rows for `language`, in deck order.
#[must_use]
pub fn entries(language: Language) -> &'static [CardEntry] {
    match language {
        Language::Spanish => spanish::SPANISH,
        Language::Italian => italian::ITALIAN,
        Language::German => german::GERMAN,
        Language::Canadian => canadian::CANADIAN,
    }
}
