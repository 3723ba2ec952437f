//! Round state types.

use alloc::vec::Vec;

use crate::card::Card;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the initial four cards.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and its outcome is fixed.
    Resolved,
}

/// What happened after a player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnReport {
    /// The player drew a card.
    Hit {
        /// The card drawn.
        card: Card,
        /// Whether the draw pushed the player over 21, ending the round.
        busted: bool,
    },
    /// The player stood and the dealer played out their hand.
    DealerPlayed {
        /// Cards the dealer drew, in order.
        drawn: Vec<Card>,
    },
}
