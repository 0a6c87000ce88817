//! Blackjack card model, hand scoring and shuffled deck supply, with
//! optional `no_std` support.
//!
//! The crate provides [`Card`] values built by [`Card::from_rank`], a shuffled
//! and burned [`Deck`], [`Hand`] totals that resolve the ace's dual value, and
//! a [`Table`] that deals from the deck and reshuffles when it runs out.
//! Betting and play decisions are left to [`BettingStrategy`] and
//! [`PlayStrategy`] implementations.
//!
//! # Example
//!
//! ```
//! use shoe::{Baseline, PlayStrategy, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! let mut hand = table.deal_opening_hand();
//! while Baseline.hit(&hand) {
//!     table.hit(&mut hand);
//! }
//! assert!(hand.hard_total() > 17);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod strategy;
pub mod table;

// Re-export main types
pub use card::{Card, CardKind, DECK_SIZE, Face, Suit};
pub use deck::Deck;
pub use error::{InvalidRank, OutOfCards};
pub use hand::{BLACKJACK, FrozenHand, Hand, total_of};
pub use options::TableOptions;
pub use outcome::{Outcome, OutcomeBook, Tally};
pub use strategy::{Baseline, BettingStrategy, FlatBet, PlayStrategy};
pub use table::Table;
