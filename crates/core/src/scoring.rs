use crate::{GameConfig, HandKind, Modifier, Rank};
use log::debug;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ScoreTables {
    hand_bases: HashMap<HandKind, i64>,
}

impl Default for ScoreTables {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoreTables {
    pub fn standard() -> Self {
        Self::from_config(&GameConfig::standard())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let hand_bases = config
            .hands
            .iter()
            .map(|rule| (rule.kind, rule.base))
            .collect();
        Self { hand_bases }
    }

    pub fn hand_base(&self, kind: HandKind) -> i64 {
        if kind == HandKind::NoHand {
            return 0;
        }
        self.hand_bases
            .get(&kind)
            .copied()
            .unwrap_or_else(|| default_hand_base(kind))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub hand: HandKind,
    pub base: i64,
    pub rank_sum: i64,
    pub add: i64,
    pub mult: f64,
    pub total: u64,
}

impl ScoreBreakdown {
    /// Score before the multiplier is applied.
    pub fn raw(&self) -> i64 {
        self.base.saturating_add(self.rank_sum).saturating_add(self.add)
    }
}

pub fn rank_sum(cards: &[Rank]) -> i64 {
    cards.iter().map(|card| i64::from(card.value())).sum()
}

pub fn score_breakdown(
    cards: &[Rank],
    hand: HandKind,
    modifier: &Modifier,
    tables: &ScoreTables,
) -> ScoreBreakdown {
    if hand == HandKind::NoHand {
        return ScoreBreakdown {
            hand,
            base: 0,
            rank_sum: 0,
            add: 0,
            mult: modifier.mult,
            total: 0,
        };
    }
    let base = tables.hand_base(hand);
    let rank_sum = rank_sum(cards);
    let raw = base.saturating_add(rank_sum).saturating_add(modifier.add);
    let total = (raw as f64 * modifier.mult).floor().max(0.0) as u64;
    debug!(
        "scored {} ({base} + {rank_sum} + {}) x {} = {total}",
        hand.id(),
        modifier.add,
        modifier.mult
    );
    ScoreBreakdown {
        hand,
        base,
        rank_sum,
        add: modifier.add,
        mult: modifier.mult,
        total,
    }
}

pub fn score_hand(cards: &[Rank], hand: HandKind, modifier: &Modifier, tables: &ScoreTables) -> u64 {
    score_breakdown(cards, hand, modifier, tables).total
}

pub(crate) fn default_hand_base(kind: HandKind) -> i64 {
    match kind {
        HandKind::Rocket => 200,
        HandKind::Bomb => 100,
        HandKind::Straight => 60,
        HandKind::Triple => 40,
        HandKind::Pair => 20,
        HandKind::Single => 10,
        HandKind::NoHand => 0,
    }
}
