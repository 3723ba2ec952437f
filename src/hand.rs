//! Hand representation and scoring.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest score that does not bust.
pub const BLACKJACK: u8 = 21;

/// Difference between an ace counted high (11) and low (1).
const ACE_SOFT_DIFFERENCE: u8 = 10;
const ACE_HIGH: u8 = 11;

fn score_cards(cards: &[Card]) -> u8 {
    let mut score: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        match card.rank.fixed_value() {
            Some(value) => score = score.saturating_add(value),
            None => {
                aces += 1;
                score = score.saturating_add(ACE_HIGH);
            }
        }
    }

    // Drop aces to 1 only as far as needed to get back under the limit.
    while score > BLACKJACK && aces > 0 {
        score -= ACE_SOFT_DIFFERENCE;
        aces -= 1;
    }

    score
}

/// The cards held by one party, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    ///
    /// Face cards count 10. Aces count 11 where that keeps the total at or
    /// below 21, otherwise 1.
    ///
    /// # Example
    ///
    /// ```
    /// use bjmatch::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// assert_eq!(hand.score(), 12);
    /// ```
    #[must_use]
    pub fn score(&self) -> u8 {
        score_cards(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Empties the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Lists the cards as "rank of suit", separated by commas.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
