use crate::error::DealError;

use super::{Game, GameState, Player};

impl Game {
    /// Deals the opening hands.
    ///
    /// Cards are drawn alternately, player one first, until each player holds
    /// [`GameOptions::hand_size`](crate::GameOptions::hand_size) cards. Both
    /// hands are then sorted by rank.
    ///
    /// # Errors
    ///
    /// Returns an error if the hands were already dealt or the hidden deck
    /// holds fewer than two full hands.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingToDeal {
            return Err(DealError::InvalidState);
        }

        let enough = self
            .options
            .hand_size
            .checked_mul(2)
            .is_some_and(|needed| self.hidden_deck.len() >= needed);
        if !enough {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..self.options.hand_size {
            for player in [Player::One, Player::Two] {
                let card = self
                    .hidden_deck
                    .draw()
                    .map_err(|_| DealError::NotEnoughCards)?;
                self.hands[player.index()].add_card(card);
            }
        }

        for hand in &mut self.hands {
            hand.sort_by_rank();
        }

        log::info!(
            "dealt {} cards to each player, {} left in the hidden deck",
            self.options.hand_size,
            self.hidden_deck.len()
        );

        self.current_player = Player::One;
        self.state = GameState::InProgress;

        Ok(())
    }
}
