//! Player hands and hand scoring.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u32 = 21;

/// Sum of the hard values of `cards`.
fn hard_sum(cards: &[Card]) -> u32 {
    cards.iter().map(|card| u32::from(card.hard())).sum()
}

/// Computes the blackjack total of `cards`.
///
/// At most one card contributes its soft bonus: the largest `soft - hard`
/// spread is added to the hard sum when that stays within 21. Two aces
/// counted as 11 would always bust, so a single bonus is enough.
#[must_use]
pub fn total_of(cards: &[Card]) -> u32 {
    let hard = hard_sum(cards);
    let delta = cards
        .iter()
        .map(|card| u32::from(card.soft() - card.hard()))
        .max()
        .unwrap_or(0);

    let soft = hard + delta;
    if soft <= BLACKJACK { soft } else { hard }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

/// A player's hand, together with the dealer's up-card it is played against.
///
/// Two hands are equal when they have the same dealer card and the same
/// cards in the same order. Use [`Hand::compare`] or [`Hand::cmp_total`] to
/// compare by total instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    dealer_card: Card,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand against `dealer_card`.
    #[must_use]
    pub const fn new(dealer_card: Card) -> Self {
        Self {
            dealer_card,
            cards: Vec::new(),
        }
    }

    /// Creates a hand holding `cards` against `dealer_card`.
    #[must_use]
    pub const fn with_cards(dealer_card: Card, cards: Vec<Card>) -> Self {
        Self { dealer_card, cards }
    }

    /// Returns the dealer's up-card.
    #[must_use]
    pub const fn dealer_card(&self) -> Card {
        self.dealer_card
    }

    /// Returns the player's cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the blackjack total of the hand.
    ///
    /// An empty hand totals 0.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe::{Card, Hand, Suit};
    ///
    /// let card = |rank| Card::from_rank(rank, Suit::Heart).unwrap();
    /// let hand = Hand::with_cards(card(10), vec![card(1), card(9)]);
    /// assert_eq!(hand.total(), 20);
    /// ```
    #[must_use]
    pub fn total(&self) -> u32 {
        total_of(&self.cards)
    }

    /// Returns the total with every ace counted as 1.
    #[must_use]
    pub fn hard_total(&self) -> u32 {
        hard_sum(&self.cards)
    }

    /// Returns whether an ace is currently counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.total() != self.hard_total()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Compares two hands by total.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.total().cmp(&other.total())
    }

    /// Compares the hand's total with `value`.
    #[must_use]
    pub fn cmp_total(&self, value: u32) -> Ordering {
        self.total().cmp(&value)
    }

    /// Returns whether the hand is a pair that may be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        matches!(self.cards.as_slice(), [first, second] if first.rank() == second.rank())
    }

    /// Splits a pair into two hands.
    ///
    /// The second card moves into the returned hand, which is played against
    /// the same dealer card. Returns `None` unless the hand is a pair.
    pub fn split(&mut self) -> Option<Self> {
        if !self.can_split() {
            return None;
        }
        let card = self.cards.pop()?;
        Some(Self::with_cards(self.dealer_card, alloc::vec![card]))
    }

    /// Takes an immutable snapshot of the hand.
    #[must_use]
    pub fn freeze(&self) -> FrozenHand {
        FrozenHand::from(self)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

/// An immutable snapshot of a hand, usable as a map key.
///
/// The hash is the sum of the cards' [fingerprints](Card::fingerprint), so it
/// does not depend on card order or the dealer card. Equality still requires
/// the same dealer card and card sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenHand {
    dealer_card: Card,
    cards: Vec<Card>,
}

impl FrozenHand {
    /// Creates a snapshot from a dealer card and the player's cards.
    #[must_use]
    pub const fn new(dealer_card: Card, cards: Vec<Card>) -> Self {
        Self { dealer_card, cards }
    }

    /// Returns the dealer's up-card.
    #[must_use]
    pub const fn dealer_card(&self) -> Card {
        self.dealer_card
    }

    /// Returns the player's cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the blackjack total of the snapshot.
    #[must_use]
    pub fn total(&self) -> u32 {
        total_of(&self.cards)
    }

    /// Compares two snapshots by total.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.total().cmp(&other.total())
    }

    /// Returns a mutable copy of the snapshot.
    #[must_use]
    pub fn thaw(&self) -> Hand {
        Hand::with_cards(self.dealer_card, self.cards.clone())
    }
}

impl From<&Hand> for FrozenHand {
    fn from(hand: &Hand) -> Self {
        Self::new(hand.dealer_card, hand.cards.clone())
    }
}

impl From<Hand> for FrozenHand {
    fn from(hand: Hand) -> Self {
        Self::new(hand.dealer_card, hand.cards)
    }
}

impl Hash for FrozenHand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let sum = self
            .cards
            .iter()
            .fold(0u64, |sum, card| sum.wrapping_add(card.fingerprint()));
        state.write_u64(sum);
    }
}

impl fmt::Display for FrozenHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}
