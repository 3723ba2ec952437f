//! The 52-card deck.

use alloc::vec::Vec;

use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, DrawError};

/// A single deck of cards, drawn from the top (the end of the stack).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards; the last element is drawn next.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// Cards are generated suit by suit, ranks from 2 up to Ace within each
    /// suit. The last generated card (Ace of Spades) sits on top.
    ///
    /// # Example
    ///
    /// ```
    /// use bjmatch::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck holding exactly `cards`.
    ///
    /// The last card of the vector is drawn first.
    ///
    /// # Errors
    ///
    /// Returns an error if there are more than [`DECK_SIZE`] cards or the
    /// same card appears twice.
    ///
    /// # Example
    ///
    /// ```
    /// use bjmatch::{Card, Deck, DeckError, Rank, Suit};
    ///
    /// let ace = Card::new(Suit::Hearts, Rank::Ace);
    /// let deck = Deck::from_cards(vec![ace]).unwrap();
    /// assert_eq!(deck.len(), 1);
    /// assert_eq!(Deck::from_cards(vec![ace, ace]), Err(DeckError::DuplicateCard));
    /// ```
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() > DECK_SIZE {
            return Err(DeckError::TooManyCards);
        }
        let duplicated = cards
            .iter()
            .enumerate()
            .any(|(index, card)| cards[..index].contains(card));
        if duplicated {
            return Err(DeckError::DuplicateCard);
        }
        Ok(Self { cards })
    }

    /// Shuffles the cards still in the deck.
    ///
    /// Cards drawn earlier are not returned to the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let card = self.cards.pop().ok_or(DrawError::EmptyDeck)?;
        trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
