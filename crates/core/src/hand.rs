use crate::Rank;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Hand classification, declared from lowest to highest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandKind {
    NoHand,
    Single,
    Pair,
    Triple,
    Straight,
    Bomb,
    Rocket,
}

impl HandKind {
    /// Every kind a non-empty hand can classify as, highest precedence first.
    pub const SCORING: [HandKind; 6] = [
        HandKind::Rocket,
        HandKind::Bomb,
        HandKind::Straight,
        HandKind::Triple,
        HandKind::Pair,
        HandKind::Single,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::NoHand => "no_hand",
            HandKind::Single => "single",
            HandKind::Pair => "pair",
            HandKind::Triple => "triple",
            HandKind::Straight => "straight",
            HandKind::Bomb => "bomb",
            HandKind::Rocket => "rocket",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HandKind::NoHand => "No hand",
            HandKind::Single => "Single",
            HandKind::Pair => "Pair",
            HandKind::Triple => "Triple",
            HandKind::Straight => "Straight",
            HandKind::Bomb => "Bomb (Four of a kind)",
            HandKind::Rocket => "Rocket (Joker pair)",
        }
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

pub fn evaluate_hand(cards: &[Rank]) -> HandKind {
    if cards.is_empty() {
        return HandKind::NoHand;
    }

    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *rank_counts.entry(*card).or_insert(0) += 1;
    }
    let has_count = |wanted: usize| rank_counts.values().any(|&count| count == wanted);

    if is_rocket(&rank_counts) {
        return HandKind::Rocket;
    }
    if has_count(4) {
        return HandKind::Bomb;
    }
    if is_straight(cards) {
        return HandKind::Straight;
    }
    if has_count(3) {
        return HandKind::Triple;
    }
    if has_count(2) {
        return HandKind::Pair;
    }
    HandKind::Single
}

fn is_rocket(rank_counts: &HashMap<Rank, usize>) -> bool {
    rank_counts.len() == 2
        && rank_counts.get(&Rank::BlackJoker) == Some(&1)
        && rank_counts.get(&Rank::RedJoker) == Some(&1)
}

// A `2` or a joker anywhere in the hand disqualifies it; they are not skipped.
fn is_straight(cards: &[Rank]) -> bool {
    if cards.len() < crate::HAND_SIZE {
        return false;
    }
    let mut values: Vec<u8> = cards
        .iter()
        .filter(|card| !card.breaks_straight())
        .map(|card| card.value())
        .collect();
    if values.len() != cards.len() {
        return false;
    }
    values.sort_unstable();
    values.windows(2).all(|w| w[1] == w[0] + 1)
}
