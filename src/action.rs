//! Player actions and console input parsing.

use core::str::FromStr;

use crate::error::InvalidActionError;

/// An action the player can take during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// End the turn.
    Stand,
}

impl FromStr for Action {
    type Err = InvalidActionError;

    /// Parses `h`/`hit` or `s`/`stand`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjmatch::Action;
    ///
    /// assert_eq!("h".parse(), Ok(Action::Hit));
    /// assert!("x".parse::<Action>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "h" | "hit" => Ok(Self::Hit),
            "s" | "stand" => Ok(Self::Stand),
            _ => Err(InvalidActionError),
        }
    }
}

/// Interprets an answer to "play again?".
///
/// Only `y` means yes; anything else ends the session.
#[must_use]
pub fn wants_replay(input: &str) -> bool {
    input.trim() == "y"
}
