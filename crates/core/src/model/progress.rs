use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::deck::{CategoryFilter, Deck};
use crate::model::ids::CardId;

/// Persisted study state for one (user, language) pair.
///
/// Every field defaults when missing so older or partial records still load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Position within the filtered view at last save.
    pub current_card: usize,
    pub known_cards: BTreeSet<CardId>,
    #[serde(rename = "filterCategory")]
    pub filter: CategoryFilter,
    pub category_time: BTreeMap<String, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    #[must_use]
    pub fn is_known(&self, id: CardId) -> bool {
        self.known_cards.contains(&id)
    }

    /// Toggles known membership and returns the new state.
    pub fn toggle_known(&mut self, id: CardId) -> bool {
        if self.known_cards.remove(&id) {
            false
        } else {
            self.known_cards.insert(id);
            true
        }
    }

    /// Drops known ids that do not belong to `deck`. Returns how many were dropped.
    pub fn retain_cards_in(&mut self, deck: &Deck) -> usize {
        let before = self.known_cards.len();
        self.known_cards.retain(|id| deck.contains(*id));
        before - self.known_cards.len()
    }

    pub fn add_category_time(&mut self, category: &str, secs: u64) {
        if secs == 0 {
            return;
        }
        let slot = self.category_time.entry(category.to_owned()).or_default();
        *slot = slot.saturating_add(secs);
    }

    #[must_use]
    pub fn time_in(&self, category: &str) -> u64 {
        self.category_time.get(category).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_time_secs(&self) -> u64 {
        self.category_time
            .values()
            .fold(0_u64, |acc, secs| acc.saturating_add(*secs))
    }
}
