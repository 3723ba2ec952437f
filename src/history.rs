//! Match history of completed rounds.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::hand::Hand;
use crate::result::Outcome;

/// Final hands of one completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    player: Hand,
    dealer: Hand,
}

impl HistoryEntry {
    /// Snapshots a finished round.
    #[must_use]
    pub const fn new(player: Hand, dealer: Hand) -> Self {
        Self { player, dealer }
    }

    /// Returns the player's final hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's final hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Re-derives the outcome from the stored hands.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::of(&self.player, &self.dealer)
    }
}

/// Append-only log of completed rounds, most recent first.
#[derive(Debug, Clone, Default)]
pub struct MatchHistory {
    entries: VecDeque<HistoryEntry>,
}

impl MatchHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Records the final hands of a round as the most recent entry.
    pub fn record(&mut self, player: Hand, dealer: Hand) {
        self.entries.push_front(HistoryEntry::new(player, dealer));
    }

    /// Visits every entry, most recent first, with its match number and
    /// re-derived outcome.
    ///
    /// Match numbers start at 1 for the most recent round.
    pub fn for_each_entry<F>(&self, mut visitor: F)
    where
        F: FnMut(usize, &HistoryEntry, Outcome),
    {
        for (index, entry) in self.entries.iter().enumerate() {
            visitor(index + 1, entry, entry.outcome());
        }
    }

    /// Iterates over the entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns `(match number, outcome)` for every entry, most recent first.
    ///
    /// # Example
    ///
    /// ```
    /// use bjmatch::{Card, Hand, MatchHistory, Outcome, Rank, Suit};
    ///
    /// let hand = |ranks: &[Rank]| -> Hand {
    ///     ranks.iter().map(|&rank| Card::new(Suit::Clubs, rank)).collect()
    /// };
    ///
    /// let mut history = MatchHistory::new();
    /// history.record(hand(&[Rank::King, Rank::Nine]), hand(&[Rank::Ten, Rank::Seven]));
    /// history.record(hand(&[Rank::Ten, Rank::Six]), hand(&[Rank::Ten, Rank::Eight]));
    ///
    /// assert_eq!(
    ///     history.summary(),
    ///     vec![(1, Outcome::DealerWins), (2, Outcome::PlayerWins)]
    /// );
    /// ```
    #[must_use]
    pub fn summary(&self) -> Vec<(usize, Outcome)> {
        let mut summary = Vec::with_capacity(self.entries.len());
        self.for_each_entry(|number, _, outcome| summary.push((number, outcome)));
        summary
    }

    /// Returns the number of recorded rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no rounds have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MatchHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
