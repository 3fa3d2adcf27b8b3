//! Error types for game operations.

use thiserror::Error;

use crate::options::{MAX_PACKS, MIN_PACKS};

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}

/// Errors that can occur during the opening deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the hidden deck for both hands.
    #[error("not enough cards in the hidden deck")]
    NotEnoughCards,
}

/// Errors that can occur while resolving turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game has not been dealt yet or is already over.
    #[error("invalid game state for taking a turn")]
    InvalidState,
    /// Neither the hidden deck nor the discard pile can supply a card.
    #[error("no card left to reveal or draw")]
    Stalled,
    /// The configured turn limit was reached before a hand emptied.
    #[error("turn limit of {0} reached")]
    TurnLimitReached(u64),
}

/// Errors that can occur when validating game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Pack count outside the accepted range.
    #[error("pack count must be between {} and {}", MIN_PACKS, MAX_PACKS)]
    InvalidPackCount,
    /// Pack count input is not a number.
    #[error("pack count is not a number")]
    NotANumber,
    /// Hand size is zero.
    #[error("hand size must be at least one card")]
    ZeroHandSize,
}
