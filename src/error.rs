//! Error types for card construction and dealing.

use thiserror::Error;

/// A rank outside `1..=13` was passed to the card factory.
///
/// This indicates a bug in the caller and is never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card rank {0}, expected 1..=13")]
pub struct InvalidRank(pub u8);

/// The deck has no cards left to deal.
///
/// [`Table`](crate::Table) recovers from this by replacing the deck with a
/// fresh shuffle, so strategies never observe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct OutOfCards;
