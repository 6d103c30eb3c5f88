//! Deck handling: building, shuffling, dealing and flipping.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::{DECK_SIZE, PLAYERS};
use crate::domain::state::{turn_order, Seat};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Undealt cards of the current round. Dealing takes from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new_full() -> Self {
        Self { cards: full_deck() }
    }

    /// Build a deck in a fixed order, front first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Fisher-Yates shuffle. Only a complete deck may be shuffled.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DomainError> {
        if self.cards.len() != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "deck is not properly filled: {} cards",
                self.cards.len()
            )));
        }
        self.cards.shuffle(rng);
        Ok(())
    }

    /// Remove up to `n` cards from the front.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Turn over the next card, if any remain.
    pub fn flip(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }
}

/// Deal `n` cards to every seat, one full packet per seat in turn order
/// starting at `first`.
pub fn deal_in_turn_order(
    deck: &mut Deck,
    hands: &mut [Vec<Card>; PLAYERS],
    first: Seat,
    n: usize,
) {
    for seat in turn_order(first) {
        let packet = deck.deal(n);
        hands[seat as usize].extend(packet);
    }
}
