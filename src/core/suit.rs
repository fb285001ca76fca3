//! Card suits.

use serde::{Deserialize, Serialize};

/// Suit declared alongside a bid.
///
/// Descriptive only: the suit is recorded on the round but never
/// enters the scoring math.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_symbols_distinct() {
        let symbols: Vec<char> = Suit::ALL.iter().map(|s| s.symbol()).collect();
        assert_eq!(symbols, vec!['♠', '♥', '♦', '♣']);
    }

    #[test]
    fn test_suit_serialization() {
        let json = serde_json::to_string(&Suit::Diamond).unwrap();
        assert_eq!(json, "\"diamond\"");
        let suit: Suit = serde_json::from_str("\"club\"").unwrap();
        assert_eq!(suit, Suit::Club);
    }
}
