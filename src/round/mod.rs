//! The turn state machine for a single round.

use log::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DrawError, RoundError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod state;

pub use state::{RoundState, TurnReport};

/// One play of player-then-dealer turns.
///
/// A round owns both hands while it runs and moves strictly through
/// [`RoundState::Dealing`], [`RoundState::PlayerTurn`],
/// [`RoundState::DealerTurn`] and [`RoundState::Resolved`]. The deck is
/// passed into every operation that draws.
#[derive(Debug, Clone)]
pub struct Round {
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
    /// Dealer draws while below this score.
    dealer_stand_value: u8,
}

impl Round {
    /// Creates a round in the dealing state, reusing the given hands.
    ///
    /// Both hands are cleared first.
    #[must_use]
    pub fn new(mut player: Hand, mut dealer: Hand, options: &GameOptions) -> Self {
        player.clear();
        dealer.clear();
        Self {
            player,
            dealer,
            state: RoundState::Dealing,
            dealer_stand_value: options.dealer_stand_value,
        }
    }

    /// Deals two cards each, alternating player, dealer, player, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealing state, or if the
    /// deck runs out. A failed deal leaves the round unplayable.
    ///
    /// # Example
    ///
    /// ```
    /// use bjmatch::{Deck, GameOptions, Hand, Round, RoundState};
    ///
    /// let mut deck = Deck::new();
    /// let mut round = Round::new(Hand::new(), Hand::new(), &GameOptions::default());
    /// round.deal(&mut deck).unwrap();
    /// assert_eq!(round.state(), RoundState::PlayerTurn);
    /// assert_eq!(deck.len(), 48);
    /// ```
    pub fn deal(&mut self, deck: &mut Deck) -> Result<(), RoundError> {
        if self.state != RoundState::Dealing || !self.player.is_empty() {
            return Err(RoundError::InvalidState);
        }

        for _ in 0..2 {
            self.player.add_card(Self::draw_from(deck)?);
            self.dealer.add_card(Self::draw_from(deck)?);
        }

        debug!(
            "dealt player [{}] ({}), dealer [{}] ({})",
            self.player,
            self.player.score(),
            self.dealer,
            self.dealer.score()
        );
        self.transition(RoundState::PlayerTurn);
        Ok(())
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        (self.state == RoundState::Resolved).then(|| Outcome::of(&self.player, &self.dealer))
    }

    /// Gives the hands back, player first.
    #[must_use]
    pub fn into_hands(self) -> (Hand, Hand) {
        (self.player, self.dealer)
    }

    fn ensure_state(&self, expected: RoundState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    fn transition(&mut self, next: RoundState) {
        debug!("round {:?} -> {next:?}", self.state);
        self.state = next;
    }

    fn draw_from(deck: &mut Deck) -> Result<Card, RoundError> {
        deck.draw().map_err(|err: DrawError| {
            warn!("deck ran out mid-round");
            RoundError::from(err)
        })
    }
}
