//! Decision contracts for betting and play.
//!
//! Both traits are consumed by whatever drives a round. The implementations
//! here are reference policies; real strategies live with the caller.

use core::num::NonZeroUsize;

use crate::hand::Hand;

/// Decides how much to wager before the cards are dealt.
pub trait BettingStrategy {
    /// Returns the amount to bet on the next round.
    fn bet(&self) -> NonZeroUsize;

    /// Called after the round is won.
    fn record_win(&mut self) {}

    /// Called after the round is lost.
    fn record_loss(&mut self) {}
}

/// Decides which actions to take on a hand.
///
/// Each method returns `true` if the player elects to perform the action. A
/// decision may only depend on what is visible: the player's cards and the
/// dealer's up-card.
pub trait PlayStrategy {
    /// Whether to take insurance against a dealer ace.
    fn insurance(&self, hand: &Hand) -> bool;

    /// Whether to split a pair.
    fn split(&self, hand: &Hand) -> bool;

    /// Whether to double down.
    fn double(&self, hand: &Hand) -> bool;

    /// Whether to take another card.
    fn hit(&self, hand: &Hand) -> bool;
}

/// Bets the same amount every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatBet {
    amount: NonZeroUsize,
}

impl FlatBet {
    /// Creates a strategy that always bets `amount`.
    #[must_use]
    pub const fn new(amount: NonZeroUsize) -> Self {
        Self { amount }
    }
}

impl Default for FlatBet {
    fn default() -> Self {
        Self::new(NonZeroUsize::MIN)
    }
}

impl BettingStrategy for FlatBet {
    fn bet(&self) -> NonZeroUsize {
        self.amount
    }
}

/// Never insures, splits or doubles, and hits while the hard total is 17 or
/// less.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Baseline;

/// Highest hard total [`Baseline`] still hits on.
pub const BASELINE_HIT_LIMIT: u32 = 17;

impl PlayStrategy for Baseline {
    fn insurance(&self, _hand: &Hand) -> bool {
        false
    }

    fn split(&self, _hand: &Hand) -> bool {
        false
    }

    fn double(&self, _hand: &Hand) -> bool {
        false
    }

    fn hit(&self, hand: &Hand) -> bool {
        hand.hard_total() <= BASELINE_HIT_LIMIT
    }
}
