//! The matching rule.

use crate::card::Card;

/// Returns whether `card` may be played on top of `top`.
///
/// A card is playable when it shares the rank or the suit of the top card.
///
/// ```
/// use matchdeck::{Card, Rank, Suit, can_play};
///
/// let top = Card::new(Suit::Heart, Rank::Nine);
/// assert!(can_play(Card::new(Suit::Club, Rank::Nine), top));
/// assert!(can_play(Card::new(Suit::Heart, Rank::Two), top));
/// assert!(!can_play(Card::new(Suit::Spade, Rank::Ace), top));
/// ```
#[must_use]
pub fn can_play(card: Card, top: Card) -> bool {
    card.rank == top.rank || card.suit == top.suit
}
