//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::OptionsError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::pile::DiscardPile;
use crate::result::GameOutcome;

mod deal;
pub mod state;
mod turn;

pub use state::{GameState, Player};

/// A two-player matching game that owns every card in play.
///
/// The game holds the hidden deck, both hands and the discard pile, and moves
/// cards between them one turn at a time. Use [`GameOptions`] to configure the
/// number of packs and the opening hand size.
pub struct Game {
    /// Face-down cards players draw from.
    pub hidden_deck: Deck,
    /// Hands of player one and player two, indexed by [`Player::index`].
    pub hands: [Hand; 2],
    /// Face-up cards played so far.
    pub played: DiscardPile,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Player whose turn is next.
    current_player: Player,
    /// Number of turns resolved so far.
    turns: u64,
    /// Random number generator used for every shuffle.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled hidden deck.
    ///
    /// # Example
    ///
    /// ```
    /// use matchdeck::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_packs(2), 42).unwrap();
    /// assert_eq!(game.hidden_deck.len(), 104);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        let mut game = Self::with_deck(options, Deck::standard(options.packs), seed)?;
        game.hidden_deck.shuffle(&mut game.rng);
        Ok(game)
    }

    /// Creates a new game that uses `deck` as the hidden deck without
    /// shuffling it first.
    ///
    /// The deck size is not tied to [`GameOptions::packs`], which makes this
    /// useful for replaying a known card order.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    pub fn with_deck(options: GameOptions, deck: Deck, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self {
            hidden_deck: deck,
            hands: [Hand::new(), Hand::new()],
            played: DiscardPile::new(),
            options,
            state: GameState::WaitingToDeal,
            current_player: Player::One,
            turns: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose turn is next.
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the number of turns resolved so far.
    pub const fn turns_taken(&self) -> u64 {
        self.turns
    }

    /// Returns the hand of the given player.
    pub const fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    /// Returns the number of cards in the hidden deck.
    pub fn cards_remaining(&self) -> usize {
        self.hidden_deck.len()
    }

    /// Returns the number of cards across the hidden deck, both hands and the
    /// discard pile.
    ///
    /// No operation creates or destroys cards, so this never changes during a
    /// game.
    pub fn total_cards(&self) -> usize {
        self.hidden_deck.len()
            + self.hands.iter().map(Hand::len).sum::<usize>()
            + self.played.len()
    }

    /// Returns the outcome once a hand has emptied.
    pub const fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            GameState::Finished { emptied } => Some(GameOutcome {
                emptied,
                turns: self.turns,
            }),
            _ => None,
        }
    }

    /// Moves every card of the discard pile into the hidden deck and
    /// shuffles it.
    ///
    /// The pile is left empty, so the next turn reveals a new top card.
    fn recycle_discard_pile(&mut self) {
        let recycled = self.played.take_all();
        log::info!("reshuffling {} played cards into the hidden deck", recycled.len());

        self.hidden_deck.extend(recycled);
        self.hidden_deck.shuffle(&mut self.rng);
    }
}
