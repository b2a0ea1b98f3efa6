use lingo_core::model::{ALL_CATEGORIES, CategoryFilter, Deck, Flashcard, Language};

use super::progress::ViewProgress;
use super::state::SessionState;

/// Presentation-agnostic snapshot of the card screen.
///
/// No pre-formatted strings beyond the deck's own text; the front end decides
/// how to lay this out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub username: String,
    pub language: Language,
    pub title: &'static str,
    /// `None` when the selected filter matches no cards.
    pub card: Option<Flashcard>,
    pub progress: ViewProgress,
    /// Known cards across the whole deck.
    pub known_count: usize,
    pub deck_size: usize,
    pub is_known: bool,
    pub is_flipped: bool,
    /// Selectable filters, `All` first then deck order.
    pub categories: Vec<String>,
    pub filter: CategoryFilter,
}

impl CardView {
    /// Snapshot `state` over `deck`. `None` unless logged in.
    #[must_use]
    pub fn build(state: &SessionState, deck: &Deck) -> Option<Self> {
        let username = state.username()?.to_owned();
        let record = state.progress();
        let view = deck.filtered(&record.filter);
        let card = view.get(record.current_card).map(|card| (*card).clone());
        let is_known = card
            .as_ref()
            .is_some_and(|card| record.is_known(card.id()));

        let categories = std::iter::once(ALL_CATEGORIES)
            .chain(deck.categories())
            .map(str::to_owned)
            .collect();

        Some(Self {
            username,
            language: state.language(),
            title: state.language().title(),
            card,
            progress: ViewProgress::new(record.current_card, view.len()),
            known_count: record.known_cards.len(),
            deck_size: deck.len(),
            is_known,
            is_flipped: state.is_flipped(),
            categories,
            filter: record.filter.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::model::{CardEntry, ProgressRecord};
    use lingo_core::time::fixed_now;

    fn deck() -> Deck {
        let entry = |category, front| CardEntry {
            category,
            front,
            back: "back",
            notes: "",
            emoji: "",
        };
        Deck::from_entries(
            Language::German,
            &[
                entry("Greetings", "Hallo"),
                entry("Food", "das Brot"),
                entry("Greetings", "Tschüss"),
            ],
        )
    }

    #[test]
    fn logged_out_has_no_view() {
        assert_eq!(CardView::build(&SessionState::new(), &deck()), None);
    }

    #[test]
    fn view_reflects_state() {
        let deck = deck();
        let mut state = SessionState::new();
        state.begin_load("ana".into(), Language::German);
        state.finish_load(ProgressRecord::default(), &deck, fixed_now());
        state.set_category(&deck, "Greetings", fixed_now()).unwrap();
        let _ = state.next(&deck).unwrap();
        state.toggle_known(&deck).unwrap();
        state.flip().unwrap();

        let view = CardView::build(&state, &deck).unwrap();
        assert_eq!(view.username, "ana");
        assert_eq!(view.title, "Deutsche Lernkarten");
        assert_eq!(view.card.as_ref().map(Flashcard::front), Some("Tschüss"));
        assert_eq!(view.progress.position, 2);
        assert_eq!(view.progress.total, 2);
        assert_eq!(view.known_count, 1);
        assert_eq!(view.deck_size, 3);
        assert!(view.is_known);
        assert!(view.is_flipped);
        assert_eq!(view.categories, ["All", "Greetings", "Food"]);
    }
}
