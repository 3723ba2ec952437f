use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;

use super::{Round, RoundState};

impl Round {
    /// Dealer plays their hand.
    ///
    /// The dealer draws while their score is below the stand value (17 by
    /// default), then the round is resolved.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self, deck: &mut Deck) -> Result<Vec<Card>, RoundError> {
        self.ensure_state(RoundState::DealerTurn)?;

        let mut drawn_cards = Vec::new();

        while self.dealer.score() < self.dealer_stand_value {
            let card = Self::draw_from(deck)?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        debug!(
            "dealer drew {} card(s), finishing on {}{}",
            drawn_cards.len(),
            self.dealer.score(),
            if self.dealer.is_busted() { " (bust)" } else { "" }
        );
        self.transition(RoundState::Resolved);

        Ok(drawn_cards)
    }
}
