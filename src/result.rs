//! Round outcomes and winner determination.

use core::fmt;

use crate::hand::{BLACKJACK, Hand};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player won.
    PlayerWins,
    /// The dealer won.
    DealerWins,
    /// Neither side won.
    Tie,
}

impl Outcome {
    /// Decides a round from the two final hands.
    ///
    /// Both live rounds and match history replay go through this function.
    #[must_use]
    pub fn of(player: &Hand, dealer: &Hand) -> Self {
        Self::from_scores(player.score(), dealer.score())
    }

    /// Decides a round from the two final scores.
    ///
    /// A score above 21 is a bust. If both sides bust the round is a tie.
    ///
    /// # Example
    ///
    /// ```
    /// use bjmatch::Outcome;
    ///
    /// assert_eq!(Outcome::from_scores(20, 18), Outcome::PlayerWins);
    /// assert_eq!(Outcome::from_scores(18, 20), Outcome::DealerWins);
    /// assert_eq!(Outcome::from_scores(23, 25), Outcome::Tie);
    /// ```
    #[must_use]
    pub const fn from_scores(player: u8, dealer: u8) -> Self {
        let player_bust = player > BLACKJACK;
        let dealer_bust = dealer > BLACKJACK;

        if !player_bust && (player > dealer || dealer_bust) {
            Self::PlayerWins
        } else if !dealer_bust && (dealer > player || player_bust) {
            Self::DealerWins
        } else {
            Self::Tie
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PlayerWins => "Player wins!",
            Self::DealerWins => "Dealer wins!",
            Self::Tie => "It's a tie!",
        };
        f.write_str(text)
    }
}
