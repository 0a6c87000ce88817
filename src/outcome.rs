//! Round outcome records keyed by frozen hands.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::hand::FrozenHand;

/// Result of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins.
    Win,
    /// Player loses.
    Loss,
    /// Push (tie).
    Push,
}

/// Accumulated outcomes for one hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rounds won.
    pub wins: usize,
    /// Rounds lost.
    pub losses: usize,
    /// Rounds pushed.
    pub pushes: usize,
}

impl Tally {
    /// Returns the number of rounds recorded.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.wins + self.losses + self.pushes
    }
}

/// Records how each hand played out.
///
/// # Example
///
/// ```
/// use shoe::{Card, FrozenHand, Outcome, OutcomeBook, Suit};
///
/// let card = |rank| Card::from_rank(rank, Suit::Club).unwrap();
/// let hand = FrozenHand::new(card(6), vec![card(10), card(9)]);
///
/// let mut book = OutcomeBook::new();
/// book.record(&hand, Outcome::Win);
/// assert_eq!(book.tally(&hand).wins, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutcomeBook {
    tallies: HashMap<FrozenHand, Tally>,
}

impl OutcomeBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one outcome for `hand`.
    pub fn record(&mut self, hand: &FrozenHand, outcome: Outcome) {
        let tally = self.tallies.entry(hand.clone()).or_default();
        match outcome {
            Outcome::Win => tally.wins += 1,
            Outcome::Loss => tally.losses += 1,
            Outcome::Push => tally.pushes += 1,
        }
        log::debug!("recorded {outcome:?} for {hand}");
    }

    /// Returns the outcomes recorded for `hand`.
    #[must_use]
    pub fn tally(&self, hand: &FrozenHand) -> Tally {
        self.tallies.get(hand).copied().unwrap_or_default()
    }

    /// Returns the number of distinct hands recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Iterates over every recorded hand and its tally.
    pub fn iter(&self) -> impl Iterator<Item = (&FrozenHand, &Tally)> {
        self.tallies.iter()
    }
}
