//! A two-player rank-or-suit card matching game engine with optional `no_std`
//! support.
//!
//! Players take turns discarding a card that matches the rank or the suit of
//! the top card of the discard pile. A player who cannot match draws from the
//! shared hidden deck. Whenever the hidden deck runs out, the discard pile is
//! shuffled back into it. The game stops as soon as one hand is empty.
//!
//! The crate provides a [`Game`] type that owns the hidden deck, both hands
//! and the discard pile, and resolves turns one at a time.
//!
//! # Example
//!
//! ```no_run
//! use matchdeck::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.deal().unwrap();
//! let outcome = game.play().unwrap();
//! let _ = outcome.emptied;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, DrawError, OptionsError, TurnError};
pub use game::{Game, GameState, Player};
pub use hand::Hand;
pub use options::{DEFAULT_HAND_SIZE, GameOptions, MAX_PACKS, MIN_PACKS, parse_pack_count};
pub use pile::DiscardPile;
pub use result::{GameOutcome, TurnAction, TurnReport};
pub use rules::can_play;
