use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Card rank, declared in ascending order: `3 < 4 < ... < A < 2 < BJ < RJ`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    BlackJoker,
    RedJoker,
}

impl Rank {
    pub const ALL: [Rank; 15] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::BlackJoker,
        Rank::RedJoker,
    ];

    /// Integer value used for ordering, straights and the rank sum.
    pub fn value(self) -> u8 {
        match self {
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
            Rank::Two => 15,
            Rank::BlackJoker => 16,
            Rank::RedJoker => 17,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::BlackJoker => "BJ",
            Rank::RedJoker => "RJ",
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }

    /// Ranks that can never take part in a straight.
    pub fn breaks_straight(self) -> bool {
        self == Rank::Two || self.is_joker()
    }

    /// Number of copies of this rank in a full deck.
    pub fn copies(self) -> usize {
        if self.is_joker() {
            1
        } else {
            4
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rank {0:?}")]
pub struct ParseRankError(pub String);

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseRankError(trimmed.to_string()))
    }
}

/// Parses a comma or whitespace separated list of rank symbols.
pub fn parse_ranks(value: &str) -> Result<Vec<Rank>, ParseRankError> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Formats a hand sorted by rank value, `"(empty)"` when there are no cards.
pub fn format_hand(hand: &[Rank]) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    let mut sorted = hand.to_vec();
    sorted.sort();
    sorted
        .iter()
        .map(|rank| rank.symbol())
        .collect::<Vec<_>>()
        .join(", ")
}
