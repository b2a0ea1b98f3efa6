//! Pure progress statistics over a deck, a known-card set, and per-category time.

use std::collections::{BTreeMap, BTreeSet};

use crate::badges::{BadgeInputs, BadgeStatus, badge_statuses};
use crate::model::{CardId, Deck, ProgressRecord};

/// `round(part / whole * 100)` with half-up rounding; 0 when `whole` is 0.
#[must_use]
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    let rounded = (part * 200 + whole) / (whole * 2);
    u32::try_from(rounded).unwrap_or(100)
}

//
// ─── CATEGORY STATS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryStats {
    pub total: usize,
    pub known: usize,
    pub percentage: u32,
    pub time_spent_secs: u64,
}

impl CategoryStats {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.known == self.total
    }
}

/// Completion and time per distinct category of `deck`.
#[must_use]
pub fn category_stats(
    deck: &Deck,
    known: &BTreeSet<CardId>,
    time: &BTreeMap<String, u64>,
) -> BTreeMap<String, CategoryStats> {
    let mut out: BTreeMap<String, CategoryStats> = BTreeMap::new();
    for card in deck.cards() {
        let entry = out.entry(card.category().to_owned()).or_default();
        entry.total += 1;
        if known.contains(&card.id()) {
            entry.known += 1;
        }
    }
    for (category, stats) in &mut out {
        stats.percentage = percent(stats.known, stats.total);
        stats.time_spent_secs = time.get(category).copied().unwrap_or(0);
    }
    out
}

//
// ─── OVERALL PROGRESS ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverallProgress {
    pub total: usize,
    pub known: usize,
    pub percentage: u32,
}

impl OverallProgress {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.known == self.total
    }
}

/// Completion over the whole deck. Ids outside the deck are not counted.
#[must_use]
pub fn overall_progress(deck: &Deck, known: &BTreeSet<CardId>) -> OverallProgress {
    let total = deck.len();
    let known = known.iter().filter(|id| deck.contains(**id)).count();
    OverallProgress {
        total,
        known,
        percentage: percent(known, total),
    }
}

//
// ─── DASHBOARD REPORT ──────────────────────────────────────────────────────────
//

/// Everything the dashboard shows for one deck and progress record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    /// Per-category stats in deck order.
    pub categories: Vec<(String, CategoryStats)>,
    pub overall: OverallProgress,
    pub total_time_secs: u64,
    pub badges: Vec<BadgeStatus>,
}

impl ProgressReport {
    #[must_use]
    pub fn build(deck: &Deck, record: &ProgressRecord) -> Self {
        let mut by_name = category_stats(deck, &record.known_cards, &record.category_time);
        let overall = overall_progress(deck, &record.known_cards);
        let total_time_secs = record.total_time_secs();
        let inputs = BadgeInputs::from_stats(&by_name, &overall, total_time_secs);

        let categories = deck
            .categories()
            .into_iter()
            .filter_map(|name| by_name.remove(name).map(|stats| (name.to_owned(), stats)))
            .collect();

        Self {
            categories,
            overall,
            total_time_secs,
            badges: badge_statuses(&inputs),
        }
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryStats> {
        self.categories
            .iter()
            .find(|(category, _)| category == name)
            .map(|(_, stats)| stats)
    }

    #[must_use]
    pub fn earned_count(&self) -> usize {
        self.badges.iter().filter(|status| status.earned).count()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badges::BadgeId;
    use crate::model::{CardEntry, Language};

    fn entry(category: &'static str) -> CardEntry {
        CardEntry {
            category,
            front: "front",
            back: "back",
            notes: "",
            emoji: "🙂",
        }
    }

    /// 4 Greetings cards followed by 6 Family cards.
    fn greetings_and_family() -> Deck {
        let mut rows = vec![entry("Greetings"); 4];
        rows.extend(vec![entry("Family"); 6]);
        Deck::from_entries(Language::Spanish, &rows)
    }

    fn ids(values: &[u32]) -> BTreeSet<CardId> {
        values.iter().copied().map(CardId::new).collect()
    }

    #[test]
    fn percent_rounds_half_up_and_guards_zero() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 200), 1);
        assert_eq!(percent(5, 5), 100);
    }

    #[test]
    fn two_known_greetings() {
        let deck = greetings_and_family();
        let known = ids(&[0, 2]);
        let stats = category_stats(&deck, &known, &BTreeMap::new());

        let greetings = stats["Greetings"];
        assert_eq!(greetings.total, 4);
        assert_eq!(greetings.known, 2);
        assert_eq!(greetings.percentage, 50);
        assert_eq!(greetings.time_spent_secs, 0);
        assert_eq!(stats["Family"].known, 0);

        let overall = overall_progress(&deck, &known);
        assert_eq!(
            overall,
            OverallProgress {
                total: 10,
                known: 2,
                percentage: 20
            }
        );
    }

    #[test]
    fn known_never_exceeds_total() {
        let deck = greetings_and_family();
        let known = ids(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        for stats in category_stats(&deck, &known, &BTreeMap::new()).values() {
            assert!(stats.known <= stats.total);
            assert!(stats.is_complete());
        }
        let overall = overall_progress(&deck, &known);
        assert_eq!(overall.known, 10);
        assert_eq!(overall.percentage, 100);
        assert!(overall.is_complete());
    }

    #[test]
    fn overall_is_100_only_when_every_card_known() {
        let deck = greetings_and_family();
        let almost: Vec<u32> = (0..9).collect();
        assert!(overall_progress(&deck, &ids(&almost)).percentage < 100);
        let all: Vec<u32> = (0..10).collect();
        assert_eq!(overall_progress(&deck, &ids(&all)).percentage, 100);
    }

    #[test]
    fn category_time_is_reported() {
        let deck = greetings_and_family();
        let time = BTreeMap::from([("Family".to_owned(), 65), ("Gone".to_owned(), 5)]);
        let stats = category_stats(&deck, &BTreeSet::new(), &time);
        assert_eq!(stats["Family"].time_spent_secs, 65);
        assert!(!stats.contains_key("Gone"));
    }

    #[test]
    fn empty_deck_reports_zero() {
        let deck = Deck::from_entries(Language::German, &[]);
        assert!(category_stats(&deck, &BTreeSet::new(), &BTreeMap::new()).is_empty());
        assert_eq!(overall_progress(&deck, &ids(&[1])), OverallProgress::default());
    }

    #[test]
    fn report_keeps_deck_order_and_badges() {
        let deck = greetings_and_family();
        let mut record = ProgressRecord::default();
        record.known_cards = ids(&[0, 1, 2, 3]);
        record.add_category_time("Greetings", 700);

        let report = ProgressReport::build(&deck, &record);
        let names: Vec<&str> = report.categories.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Greetings", "Family"]);
        assert_eq!(report.category("Greetings").unwrap().percentage, 100);
        assert_eq!(report.total_time_secs, 700);

        let earned: Vec<BadgeId> = report
            .badges
            .iter()
            .filter(|s| s.earned)
            .map(|s| s.badge.id)
            .collect();
        assert_eq!(
            earned,
            vec![BadgeId::FirstCard, BadgeId::FirstCategory, BadgeId::Dedicated]
        );
        assert_eq!(report.earned_count(), 3);
    }
}
