use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

pub const DECK_SIZE: usize = 52;

/// The 52-card supply plus a deal cursor. Cards before the cursor are dealt.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    /// A deck whose first cards are `top` in order, followed by the rest of the
    /// canonical deck. Duplicates in `top` are ignored.
    pub fn stacked(top: &[Card]) -> Self {
        let mut cards: Vec<Card> = Vec::with_capacity(DECK_SIZE);
        for &c in top {
            if !cards.contains(&c) {
                cards.push(c);
            }
        }
        for c in full_deck() {
            if !cards.contains(&c) {
                cards.push(c);
            }
        }
        Self { cards, position: 0 }
    }

    /// Fisher-Yates over all 52 cards using the supplied source; resets the cursor.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.position = 0;
    }

    pub fn deal_next(&mut self) -> Result<Card, GameError> {
        let c = *self
            .cards
            .get(self.position)
            .ok_or(GameError::DeckExhausted)?;
        self.position += 1;
        Ok(c)
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn dealt(&self) -> usize {
        self.position
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
