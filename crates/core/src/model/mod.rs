mod card;
mod deck;
mod ids;
mod language;
mod library;
mod progress;

pub use card::{CardEntry, Flashcard};
pub use deck::{ALL_CATEGORIES, CategoryFilter, Deck, DeckError};
pub use ids::{CardId, ParseIdError};
pub use language::{Language, LanguageParseError};
pub use library::Library;
pub use progress::ProgressRecord;
