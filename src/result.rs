//! Turn and game result types.

use crate::card::Card;
use crate::game::Player;

/// What the acting player did during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// The player discarded a matching card.
    Played(Card),
    /// The player had no match and drew a card from the hidden deck.
    Drew(Card),
}

/// Summary of a single resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The player who acted.
    pub player: Player,
    /// The card the player had to match.
    pub top_card: Card,
    /// Whether the top card was revealed from the hidden deck this turn
    /// rather than played by the previous player.
    pub revealed: bool,
    /// What the player did.
    pub action: TurnAction,
    /// Whether the discard pile was shuffled back into the hidden deck.
    pub reshuffled: bool,
}

/// Terminal state of a finished game.
///
/// The engine does not decide who won; it only reports which hand ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// The player whose hand is empty.
    pub emptied: Player,
    /// Number of turns resolved.
    pub turns: u64,
}
