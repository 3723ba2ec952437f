//! A single-player blackjack round engine with match history and optional
//! `no_std` support.
//!
//! The crate provides a [`GameSession`] type that shuffles, deals and scores
//! rounds against an automated dealer and keeps a most-recent-first
//! [`MatchHistory`]. Input and output stay outside the crate: a
//! [`Controller`] supplies already-validated actions and renders the
//! [`SessionEvent`]s it is shown.
//!
//! # Example
//!
//! ```
//! use bjmatch::{Action, GameOptions, GameSession};
//!
//! let mut session = GameSession::new(GameOptions::default(), 42);
//! session.start_round().unwrap();
//! session.submit_player_action(Action::Stand).unwrap();
//! let outcome = session.record_and_reset().unwrap();
//! assert_eq!(session.history_summary(), vec![(1, outcome)]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod history;
pub mod options;
pub mod result;
pub mod round;
pub mod session;

// Re-export main types
pub use action::{Action, wants_replay};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, DrawError, InvalidActionError, RoundError, SessionError};
pub use hand::{BLACKJACK, Hand};
pub use history::{HistoryEntry, MatchHistory};
pub use options::GameOptions;
pub use result::Outcome;
pub use round::{Round, RoundState, TurnReport};
pub use session::{Controller, GameSession, SessionEvent};
