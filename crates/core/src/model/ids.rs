use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier for a flashcard within its deck.
///
/// Assigned when a deck is loaded. Built-in packs use the card's position in
/// the full deck, so persisted ids keep meaning "index into the full deck".
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    /// Creates a new `CardId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the id as a position in the full deck.
    #[must_use]
    pub fn as_index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({})", self.0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an id from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse CardId from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for CardId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(CardId::new)
            .map_err(|_| ParseIdError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_display() {
        let id = CardId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "CardId(42)");
    }

    #[test]
    fn test_card_id_from_str() {
        let id: CardId = " 123 ".parse().unwrap();
        assert_eq!(id, CardId::new(123));
        assert_eq!(id.as_index(), 123);
    }

    #[test]
    fn test_card_id_from_str_invalid() {
        assert!("not-a-number".parse::<CardId>().is_err());
        assert!("-1".parse::<CardId>().is_err());
    }

    #[test]
    fn test_card_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&vec![CardId::new(3), CardId::new(7)]).unwrap();
        assert_eq!(json, "[3,7]");
        let back: Vec<CardId> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![CardId::new(3), CardId::new(7)]);
    }
}
