//! Achievement badges, declared as data.
//!
//! Each badge is a predicate over five scalar progress metrics. Adding a badge
//! means adding a row to [`BADGES`].

use std::collections::BTreeMap;
use std::fmt;

use crate::stats::{CategoryStats, OverallProgress};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BadgeId {
    FirstCard,
    TenCards,
    QuarterCentury,
    FirstCategory,
    ThreeCategories,
    Dedicated,
    Master,
    SpeedLearner,
}

impl BadgeId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeId::FirstCard => "first-card",
            BadgeId::TenCards => "ten-cards",
            BadgeId::QuarterCentury => "quarter-century",
            BadgeId::FirstCategory => "first-category",
            BadgeId::ThreeCategories => "three-categories",
            BadgeId::Dedicated => "dedicated",
            BadgeId::Master => "master",
            BadgeId::SpeedLearner => "speed-learner",
        }
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scalar metrics every badge rule is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BadgeInputs {
    pub known_count: usize,
    pub completed_categories: usize,
    pub total_categories: usize,
    pub total_time_secs: u64,
    pub overall_percentage: u32,
}

impl BadgeInputs {
    #[must_use]
    pub fn from_stats(
        categories: &BTreeMap<String, CategoryStats>,
        overall: &OverallProgress,
        total_time_secs: u64,
    ) -> Self {
        Self {
            known_count: overall.known,
            completed_categories: categories.values().filter(|s| s.is_complete()).count(),
            total_categories: categories.len(),
            total_time_secs,
            overall_percentage: overall.percentage,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub earned: fn(&BadgeInputs) -> bool,
}

impl PartialEq for Badge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Badge {}

pub const BADGES: &[Badge] = &[
    Badge {
        id: BadgeId::FirstCard,
        name: "First Steps",
        description: "Mark your first card as known",
        emoji: "🌱",
        earned: |m| m.known_count >= 1,
    },
    Badge {
        id: BadgeId::TenCards,
        name: "Getting There",
        description: "Know 10 cards",
        emoji: "🔟",
        earned: |m| m.known_count >= 10,
    },
    Badge {
        id: BadgeId::QuarterCentury,
        name: "Quarter Century",
        description: "Know 25 cards",
        emoji: "🏅",
        earned: |m| m.known_count >= 25,
    },
    Badge {
        id: BadgeId::FirstCategory,
        name: "Category Champion",
        description: "Complete a category",
        emoji: "🏆",
        earned: |m| m.completed_categories >= 1,
    },
    Badge {
        id: BadgeId::ThreeCategories,
        name: "Triple Threat",
        description: "Complete 3 categories",
        emoji: "🎯",
        earned: |m| m.completed_categories >= 3,
    },
    Badge {
        id: BadgeId::Dedicated,
        name: "Dedicated",
        description: "Study for 10 minutes",
        emoji: "⏰",
        earned: |m| m.total_time_secs >= 600,
    },
    Badge {
        id: BadgeId::Master,
        name: "Master",
        description: "Complete every category",
        emoji: "👑",
        earned: |m| m.total_categories > 0 && m.completed_categories >= m.total_categories,
    },
    Badge {
        id: BadgeId::SpeedLearner,
        name: "Speed Learner",
        description: "Reach 50% in under 30 minutes",
        emoji: "⚡",
        earned: |m| m.overall_percentage >= 50 && m.total_time_secs < 1800,
    },
];

#[must_use]
pub fn badge(id: BadgeId) -> Option<&'static Badge> {
    BADGES.iter().find(|badge| badge.id == id)
}

/// Ids of every earned badge, in table order.
#[must_use]
pub fn earned_badges(inputs: &BadgeInputs) -> Vec<BadgeId> {
    BADGES
        .iter()
        .filter(|badge| (badge.earned)(inputs))
        .map(|badge| badge.id)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStatus {
    pub badge: &'static Badge,
    pub earned: bool,
}

/// Every badge with its earned flag, in table order.
#[must_use]
pub fn badge_statuses(inputs: &BadgeInputs) -> Vec<BadgeStatus> {
    BADGES
        .iter()
        .map(|badge| BadgeStatus {
            badge,
            earned: (badge.earned)(inputs),
        })
        .collect()
}
