//! Game session driving repeated rounds.

use alloc::vec::Vec;
use core::mem;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::action::Action;
use crate::deck::Deck;
use crate::error::SessionError;
use crate::hand::Hand;
use crate::history::MatchHistory;
use crate::options::GameOptions;
use crate::result::Outcome;
use crate::round::{Round, RoundState, TurnReport};

/// Something a [`Controller`] may want to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The opening four cards are on the table.
    Dealt,
    /// A player action was applied.
    Turn(TurnReport),
    /// The round is over.
    Resolved(Outcome),
}

/// The outside party that picks actions and decides when to stop.
///
/// Implementations handle all input validation and presentation; the session
/// only ever receives well-formed actions.
pub trait Controller {
    /// Picks the next action for the player.
    fn choose_action(&mut self, round: &Round) -> Action;

    /// Decides whether to play another round after `outcome`.
    fn play_again(&mut self, outcome: Outcome) -> bool;

    /// Called after every state change of the round.
    fn observe(&mut self, round: &Round, event: &SessionEvent) {
        let _ = (round, event);
    }
}

/// Ties rounds and match history together for one player and one dealer.
#[derive(Debug)]
pub struct GameSession<R = ChaCha8Rng> {
    /// Game options.
    options: GameOptions,
    /// Deck used for the current round.
    deck: Deck,
    /// The round being played, if any.
    round: Option<Round>,
    /// Hands waiting for the next round.
    idle_hands: (Hand, Hand),
    /// Completed rounds.
    history: MatchHistory,
    /// Random number generator.
    rng: R,
}

impl GameSession<ChaCha8Rng> {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjmatch::{GameOptions, GameSession};
    ///
    /// let session = GameSession::new(GameOptions::default(), 42);
    /// assert!(session.history().is_empty());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a new session that shuffles with `rng`.
    #[must_use]
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        Self {
            options,
            deck: Deck::new(),
            round: None,
            idle_hands: (Hand::new(), Hand::new()),
            history: MatchHistory::new(),
            rng,
        }
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the round being played, if any.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the match history.
    #[must_use]
    pub const fn history(&self) -> &MatchHistory {
        &self.history
    }

    /// Shuffles and deals a new round.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the deck cannot
    /// supply the opening cards.
    pub fn start_round(&mut self) -> Result<&Round, SessionError> {
        if self.round.is_some() {
            return Err(SessionError::RoundInProgress);
        }

        if self.options.fresh_deck_each_round {
            self.deck = Deck::new();
        }
        self.deck.shuffle(&mut self.rng);

        let (player, dealer) = mem::take(&mut self.idle_hands);
        let mut round = Round::new(player, dealer, &self.options);

        if let Err(err) = round.deal(&mut self.deck) {
            self.idle_hands = round.into_hands();
            return Err(err.into());
        }

        Ok(self.round.insert(round))
    }

    /// Applies a validated player action to the current round.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running, it is not the player's turn,
    /// or the deck runs out.
    pub fn submit_player_action(&mut self, action: Action) -> Result<TurnReport, SessionError> {
        let round = self.round.as_mut().ok_or(SessionError::NoRound)?;
        Ok(round.submit(action, &mut self.deck)?)
    }

    /// Returns the outcome of the current round once it is resolved.
    #[must_use]
    pub fn round_outcome(&self) -> Option<Outcome> {
        self.round.as_ref().and_then(Round::outcome)
    }

    /// Records the resolved round in the history and clears the hands.
    ///
    /// # Errors
    ///
    /// Returns an error if no round exists or it is not resolved yet.
    pub fn record_and_reset(&mut self) -> Result<Outcome, SessionError> {
        let round = self.round.take().ok_or(SessionError::NoRound)?;
        let Some(outcome) = round.outcome() else {
            self.round = Some(round);
            return Err(SessionError::RoundNotResolved);
        };

        self.history
            .record(round.player_hand().clone(), round.dealer_hand().clone());

        let (mut player, mut dealer) = round.into_hands();
        player.clear();
        dealer.clear();
        self.idle_hands = (player, dealer);

        info!("match {} finished: {outcome}", self.history.len());
        Ok(outcome)
    }

    /// Drops the current round without recording it.
    ///
    /// Returns `true` if there was a round to drop.
    pub fn abandon_round(&mut self) -> bool {
        let Some(round) = self.round.take() else {
            return false;
        };
        debug!("abandoning round in {:?}", round.state());
        let (mut player, mut dealer) = round.into_hands();
        player.clear();
        dealer.clear();
        self.idle_hands = (player, dealer);
        true
    }

    /// Returns `(match number, outcome)` pairs, most recent first.
    #[must_use]
    pub fn history_summary(&self) -> Vec<(usize, Outcome)> {
        self.history.summary()
    }

    /// Plays rounds until the controller declines a replay.
    ///
    /// # Errors
    ///
    /// Returns an error if a round fails; that round is dropped from the
    /// session and not recorded.
    pub fn run<C: Controller + ?Sized>(&mut self, controller: &mut C) -> Result<(), SessionError> {
        loop {
            let outcome = match self.play_round(controller) {
                Ok(outcome) => outcome,
                Err(err) => {
                    self.abandon_round();
                    return Err(err);
                }
            };

            if !controller.play_again(outcome) {
                debug!("session ended after {} match(es)", self.history.len());
                return Ok(());
            }
        }
    }

    fn play_round<C: Controller + ?Sized>(
        &mut self,
        controller: &mut C,
    ) -> Result<Outcome, SessionError> {
        let round = self.start_round()?;
        controller.observe(round, &SessionEvent::Dealt);

        while self.current_round()?.state() == RoundState::PlayerTurn {
            let action = controller.choose_action(self.current_round()?);
            let report = self.submit_player_action(action)?;
            controller.observe(self.current_round()?, &SessionEvent::Turn(report));
        }

        let round = self.current_round()?;
        let outcome = round.outcome().ok_or(SessionError::RoundNotResolved)?;
        controller.observe(round, &SessionEvent::Resolved(outcome));

        self.record_and_reset()
    }

    fn current_round(&self) -> Result<&Round, SessionError> {
        self.round.as_ref().ok_or(SessionError::NoRound)
    }
}
