use crate::error::TurnError;
use crate::result::{GameOutcome, TurnAction, TurnReport};

use super::{Game, GameState, Player};

impl Game {
    /// Resolves one turn for the current player.
    ///
    /// The turn runs as follows:
    /// 1. If the discard pile is empty, the top card of the hidden deck is
    ///    revealed onto it. Otherwise the pile's top card is used.
    /// 2. The first card in the player's hand that matches the top card by
    ///    rank or suit is played onto the pile.
    /// 3. Without a match, the player draws the top card of the hidden deck.
    /// 4. If the hidden deck is now empty, the discard pile is shuffled back
    ///    into it.
    ///
    /// Afterwards the turn passes to the other player, and the game finishes
    /// if a hand is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InvalidState`] if the game is not in progress, or
    /// [`TurnError::Stalled`] if the discard pile is empty and the hidden deck
    /// has no card left to reveal. A stalled turn changes nothing.
    pub fn take_turn(&mut self) -> Result<TurnReport, TurnError> {
        if self.state != GameState::InProgress {
            return Err(TurnError::InvalidState);
        }

        let player = self.current_player;

        let (top_card, revealed) = match self.played.top() {
            Some(card) => (card, false),
            None => {
                let card = self.hidden_deck.draw().map_err(|_| {
                    log::warn!("{player}'s turn - no card left to reveal");
                    TurnError::Stalled
                })?;
                self.played.push(card);
                (card, true)
            }
        };

        if revealed {
            log::debug!("{player}'s turn - top card: {top_card}");
        } else {
            log::debug!("{player}'s turn - top card: {top_card} (last played)");
        }

        let matched = {
            let hand = &mut self.hands[player.index()];
            hand.first_playable(top_card).and_then(|index| hand.remove(index))
        };

        let mut reshuffled = false;
        let action = if let Some(card) = matched {
            self.played.push(card);
            log::debug!("{player} played {card}");
            TurnAction::Played(card)
        } else {
            // A reveal may have taken the last hidden card.
            if self.hidden_deck.is_empty() {
                self.recycle_discard_pile();
                reshuffled = true;
            }
            let card = self.hidden_deck.draw().map_err(|_| TurnError::Stalled)?;
            self.hands[player.index()].add_card(card);
            log::debug!("{player} picks a card from the hidden deck");
            TurnAction::Drew(card)
        };

        if self.hidden_deck.is_empty() {
            self.recycle_discard_pile();
            reshuffled = true;
        }

        self.turns += 1;
        self.current_player = player.other();
        self.finish_if_hand_empty(player);

        Ok(TurnReport {
            player,
            top_card,
            revealed,
            action,
            reshuffled,
        })
    }

    /// Takes turns until a hand is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InvalidState`] if the hands have not been dealt,
    /// [`TurnError::Stalled`] if no card can be revealed, or
    /// [`TurnError::TurnLimitReached`] if the configured turn limit runs out
    /// first.
    pub fn play(&mut self) -> Result<GameOutcome, TurnError> {
        loop {
            if self.state == GameState::InProgress {
                self.finish_if_hand_empty(self.current_player);
            }
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            let turns = self.turns;
            if let Some(limit) = self.options.turn_limit.filter(|&limit| turns >= limit) {
                return Err(TurnError::TurnLimitReached(limit));
            }

            self.take_turn()?;
        }
    }

    /// Moves the game to [`GameState::Finished`] if either hand is empty,
    /// checking `first` before the other player.
    fn finish_if_hand_empty(&mut self, first: Player) {
        let emptied = [first, first.other()]
            .into_iter()
            .find(|&player| self.hand(player).is_empty());

        if let Some(emptied) = emptied {
            log::info!("{emptied} has no cards left after {} turns", self.turns);
            self.state = GameState::Finished { emptied };
        }
    }
}
