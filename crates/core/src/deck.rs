use crate::{Rank, RngState};
use thiserror::Error;

/// Number of cards in every drawn hand.
pub const HAND_SIZE: usize = 5;

/// 13 standard ranks with four copies each plus one of each joker.
pub const DECK_SIZE: usize = 54;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("cannot draw {requested} cards from a deck of {available}")]
    NotEnoughCards { requested: usize, available: usize },
}

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub cards: Vec<Rank>,
}

impl Deck {
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for _ in 0..rank.copies() {
                cards.push(rank);
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    /// Takes the top `count` cards, failing rather than returning a short hand.
    pub fn deal(mut self, count: usize) -> Result<Vec<Rank>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: count,
                available: self.cards.len(),
            });
        }
        self.cards.truncate(count);
        Ok(self.cards)
    }
}

/// Draws `count` cards without replacement from a freshly shuffled full deck.
pub fn draw(count: usize, rng: &mut RngState) -> Result<Vec<Rank>, DeckError> {
    let mut deck = Deck::full();
    deck.shuffle(rng);
    deck.deal(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_composition() {
        let deck = Deck::full();
        assert_eq!(deck.len(), DECK_SIZE);
        for rank in Rank::ALL {
            let count = deck.cards.iter().filter(|card| **card == rank).count();
            assert_eq!(count, rank.copies(), "{rank}");
        }
    }

    #[test]
    fn overdraw_is_rejected() {
        let mut rng = RngState::from_seed(1);
        assert_eq!(
            draw(DECK_SIZE + 1, &mut rng),
            Err(DeckError::NotEnoughCards {
                requested: 55,
                available: 54
            })
        );
        assert_eq!(draw(DECK_SIZE, &mut rng).unwrap().len(), DECK_SIZE);
        assert!(draw(0, &mut rng).unwrap().is_empty());
    }
}
