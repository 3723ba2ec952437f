//! Match history tests.

use bjmatch::{Card, Hand, MatchHistory, Outcome, Rank, Suit};

fn hand_of(ranks: &[Rank]) -> Hand {
    ranks.iter().map(|&rank| Card::new(Suit::Spades, rank)).collect()
}

fn sample_history() -> MatchHistory {
    let mut history = MatchHistory::new();
    // Round 1: player 20 vs dealer 18.
    history.record(
        hand_of(&[Rank::King, Rank::Queen]),
        hand_of(&[Rank::Ten, Rank::Eight]),
    );
    // Round 2: player busts.
    history.record(
        hand_of(&[Rank::King, Rank::Queen, Rank::Five]),
        hand_of(&[Rank::Six, Rank::Five]),
    );
    // Round 3: 19 each.
    history.record(
        hand_of(&[Rank::Ace, Rank::Eight]),
        hand_of(&[Rank::Nine, Rank::Ten]),
    );
    history
}

#[test]
fn traversal_is_most_recent_first() {
    let history = sample_history();
    assert_eq!(history.len(), 3);
    assert_eq!(
        history.summary(),
        vec![
            (1, Outcome::Tie),
            (2, Outcome::DealerWins),
            (3, Outcome::PlayerWins),
        ]
    );
}

#[test]
fn for_each_entry_reports_rederived_outcomes() {
    let history = sample_history();
    let mut seen = Vec::new();

    history.for_each_entry(|number, entry, outcome| {
        assert_eq!(outcome, Outcome::of(entry.player_hand(), entry.dealer_hand()));
        seen.push((number, entry.player_hand().score(), entry.dealer_hand().score()));
    });

    assert_eq!(seen, vec![(1, 19, 19), (2, 25, 11), (3, 20, 18)]);
}

#[test]
fn traversal_leaves_entries_untouched() {
    let history = sample_history();
    let before: Vec<_> = history.iter().cloned().collect();

    history.for_each_entry(|_, _, _| {});
    let _ = history.summary();

    let after: Vec<_> = (&history).into_iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn empty_history() {
    let history = MatchHistory::new();
    assert!(history.is_empty());
    assert!(history.summary().is_empty());
}
