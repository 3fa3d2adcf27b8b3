//! The face-up discard pile.

use alloc::vec::Vec;
use core::mem;

use crate::card::Card;

/// Cards played so far, oldest first.
///
/// The most recent card is the top card that the next play has to match.
/// An empty pile has no top card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile from cards ordered oldest to newest.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the current top card, or `None` if nothing has been played
    /// since the pile was last emptied.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Puts a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Empties the pile, returning its cards oldest first.
    pub fn take_all(&mut self) -> Vec<Card> {
        mem::take(&mut self.cards)
    }

    /// Returns the cards, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards on the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
