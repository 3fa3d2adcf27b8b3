//! Game configuration options.

use core::num::{IntErrorKind, ParseIntError};

use crate::error::OptionsError;

/// Smallest accepted number of packs.
pub const MIN_PACKS: u8 = 1;

/// Largest accepted number of packs.
pub const MAX_PACKS: u8 = 10;

/// Number of cards dealt to each player by default.
pub const DEFAULT_HAND_SIZE: usize = 8;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use matchdeck::GameOptions;
///
/// let options = GameOptions::default()
///     .with_packs(3)
///     .with_hand_size(7)
///     .with_turn_limit(Some(10_000));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of 52-card packs merged into the hidden deck.
    pub packs: u8,
    /// Number of cards dealt to each player.
    pub hand_size: usize,
    /// Maximum number of turns [`Game::play`](crate::Game::play) resolves.
    /// `None` for no limit.
    pub turn_limit: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            packs: 1,
            hand_size: DEFAULT_HAND_SIZE,
            turn_limit: None,
        }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use matchdeck::GameOptions;
    ///
    /// let options = GameOptions::default().with_packs(4);
    /// assert_eq!(options.packs, 4);
    /// ```
    #[must_use]
    pub const fn with_packs(mut self, packs: u8) -> Self {
        self.packs = packs;
        self
    }

    /// Sets the opening hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use matchdeck::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the turn limit.
    ///
    /// # Example
    ///
    /// ```
    /// use matchdeck::GameOptions;
    ///
    /// let options = GameOptions::default().with_turn_limit(Some(500));
    /// assert_eq!(options.turn_limit, Some(500));
    /// ```
    #[must_use]
    pub const fn with_turn_limit(mut self, turn_limit: Option<u64>) -> Self {
        self.turn_limit = turn_limit;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if the pack count is outside
    /// [`MIN_PACKS`]..=[`MAX_PACKS`] or the hand size is zero.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.packs < MIN_PACKS || self.packs > MAX_PACKS {
            return Err(OptionsError::InvalidPackCount);
        }
        if self.hand_size == 0 {
            return Err(OptionsError::ZeroHandSize);
        }
        Ok(())
    }
}

/// Parses a pack count typed by a user.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`OptionsError::NotANumber`] if the input is not a non-negative
/// integer, or [`OptionsError::InvalidPackCount`] if it is out of range,
/// including numbers too large to represent.
///
/// # Example
///
/// ```
/// use matchdeck::{OptionsError, parse_pack_count};
///
/// assert_eq!(parse_pack_count(" 3\n"), Ok(3));
/// assert_eq!(parse_pack_count("11"), Err(OptionsError::InvalidPackCount));
/// assert_eq!(parse_pack_count("two"), Err(OptionsError::NotANumber));
/// ```
pub fn parse_pack_count(input: &str) -> Result<u8, OptionsError> {
    let value: u32 = input.trim().parse().map_err(|err: ParseIntError| {
        if *err.kind() == IntErrorKind::PosOverflow {
            OptionsError::InvalidPackCount
        } else {
            OptionsError::NotANumber
        }
    })?;

    u8::try_from(value)
        .ok()
        .filter(|packs| (MIN_PACKS..=MAX_PACKS).contains(packs))
        .ok_or(OptionsError::InvalidPackCount)
}
