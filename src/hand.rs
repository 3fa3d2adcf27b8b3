//! Player hand representation.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::rules::can_play;

/// A player's hand.
///
/// Cards keep the order in which they were dealt or drawn, except after
/// [`Hand::sort_by_rank`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Appends a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`, shifting later cards down.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Returns the index of the first card that can be played on `top`.
    #[must_use]
    pub fn first_playable(&self, top: Card) -> Option<usize> {
        self.cards.iter().position(|&card| can_play(card, top))
    }

    /// Sorts the hand by ascending rank.
    ///
    /// The sort is stable, so cards of equal rank keep their relative order.
    pub fn sort_by_rank(&mut self) {
        self.cards.sort_by_key(|card| card.rank);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
