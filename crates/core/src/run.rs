use crate::{
    draw, evaluate_hand, pick_modifier, score_hand, DeckError, Event, EventBus, GameConfig,
    HandKind, Modifier, Rank, RngState, ScoreTables, HAND_SIZE,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const STATUS_READY: &str = "Ready.";
pub const STATUS_HAND_DRAWN: &str = "Hand drawn. Modifier applied.";
pub const STATUS_NEW_RUN: &str = "New run modifier applied.";

#[derive(Debug, Error)]
pub enum RunError {
    #[error("no active modifier; start a new run first")]
    NoActiveModifier,
    #[error("modifier catalog is empty")]
    EmptyCatalog,
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Idle,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RunAction {
    Draw,
    NewRun,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand: Vec<Rank>,
    pub kind: HandKind,
    pub score: u64,
}

impl Default for HandResult {
    fn default() -> Self {
        Self::empty()
    }
}

impl HandResult {
    pub fn empty() -> Self {
        Self {
            hand: Vec::new(),
            kind: HandKind::NoHand,
            score: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Classifies and scores an already drawn hand.
    pub fn evaluate(hand: Vec<Rank>, modifier: &Modifier, tables: &ScoreTables) -> Self {
        let kind = evaluate_hand(&hand);
        let score = score_hand(&hand, kind, modifier, tables);
        Self { hand, kind, score }
    }
}

/// One player's run: the active modifier and the latest hand result.
#[derive(Debug)]
pub struct RunState {
    pub config: GameConfig,
    pub tables: ScoreTables,
    pub rng: RngState,
    modifier: Option<Modifier>,
    result: HandResult,
    status: &'static str,
}

impl RunState {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, RngState::from_seed(seed))
    }

    pub fn with_rng(config: GameConfig, rng: RngState) -> Self {
        let tables = ScoreTables::from_config(&config);
        Self {
            config,
            tables,
            rng,
            modifier: None,
            result: HandResult::empty(),
            status: STATUS_READY,
        }
    }

    pub fn phase(&self) -> RunPhase {
        if self.modifier.is_some() {
            RunPhase::Active
        } else {
            RunPhase::Idle
        }
    }

    pub fn modifier(&self) -> Option<&Modifier> {
        self.modifier.as_ref()
    }

    pub fn result(&self) -> &HandResult {
        &self.result
    }

    pub fn status(&self) -> &str {
        self.status
    }

    /// Picks a fresh modifier and clears the last result.
    pub fn new_run(&mut self, events: &mut EventBus) -> Result<&Modifier, RunError> {
        let picked = pick_modifier(&self.config.modifiers, &mut self.rng)
            .cloned()
            .ok_or(RunError::EmptyCatalog)?;
        info!("new run with modifier {}", picked.label());
        events.push(Event::RunStarted {
            modifier: picked.name.clone(),
            add: picked.add,
            mult: picked.mult,
        });
        self.result = HandResult::empty();
        self.status = STATUS_NEW_RUN;
        Ok(self.modifier.insert(picked))
    }

    pub fn draw_hand(&mut self, events: &mut EventBus) -> Result<&HandResult, RunError> {
        let result = self.sample_hand()?;
        events.push(Event::HandDrawn {
            hand: result.hand.clone(),
            kind: result.kind,
            score: result.score,
        });
        self.result = result;
        self.status = STATUS_HAND_DRAWN;
        Ok(&self.result)
    }

    /// Draws and scores a hand with the active modifier without storing it.
    pub fn sample_hand(&mut self) -> Result<HandResult, RunError> {
        let modifier = self.modifier.as_ref().ok_or(RunError::NoActiveModifier)?;
        let hand = draw(HAND_SIZE, &mut self.rng)?;
        let result = HandResult::evaluate(hand, modifier, &self.tables);
        debug!(
            "drew {:?} -> {} for {}",
            result.hand,
            result.kind.id(),
            result.score
        );
        Ok(result)
    }

    pub fn apply(&mut self, action: RunAction, events: &mut EventBus) -> Result<(), RunError> {
        match action {
            RunAction::Draw => self.draw_hand(events).map(|_| ()),
            RunAction::NewRun => self.new_run(events).map(|_| ()),
        }
    }
}
