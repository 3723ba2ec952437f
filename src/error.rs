//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("deck is empty")]
    EmptyDeck,
}

/// Errors that can occur when building a deck from given cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards than a single deck holds.
    #[error("a deck holds at most 52 cards")]
    TooManyCards,
    /// The same card was given twice.
    #[error("duplicate card in deck")]
    DuplicateCard,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DrawError> for RoundError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur when driving a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A round is already being played.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// No round has been started.
    #[error("no round has been started")]
    NoRound,
    /// The current round has not been resolved yet.
    #[error("the current round is not resolved")]
    RoundNotResolved,
    /// The round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Input that is neither hit nor stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid choice, expected 'h' or 's'")]
pub struct InvalidActionError;
