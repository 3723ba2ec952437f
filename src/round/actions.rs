use alloc::vec::Vec;

use crate::action::Action;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;

use super::{Round, RoundState, TurnReport};

impl Round {
    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round at once; the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        let card = Self::draw_from(deck)?;
        self.player.add_card(card);

        if self.player.is_busted() {
            log::debug!("player busted with {}", self.player.score());
            self.transition(RoundState::Resolved);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;
        self.transition(RoundState::DealerTurn);
        Ok(())
    }

    /// Applies a player action.
    ///
    /// Standing also plays out the dealer's turn, so a stand always leaves
    /// the round resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out.
    pub fn submit(&mut self, action: Action, deck: &mut Deck) -> Result<TurnReport, RoundError> {
        match action {
            Action::Hit => {
                let card = self.hit(deck)?;
                Ok(TurnReport::Hit {
                    card,
                    busted: self.player.is_busted(),
                })
            }
            Action::Stand => {
                self.stand()?;
                let drawn: Vec<Card> = self.dealer_play(deck)?;
                Ok(TurnReport::DealerPlayed { drawn })
            }
        }
    }
}
