//! The shuffled deck (shoe) that cards are dealt from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};
use crate::error::OutOfCards;

/// Largest number of cards burned from a freshly shuffled deck.
pub const MAX_BURN: usize = DECK_SIZE;

/// An ordered supply of cards. The last card is the top of the deck.
///
/// A deck is built from one or more standard 52-card decks, shuffled
/// uniformly, and then cut by burning a random number of cards from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    burned: usize,
}

impl Deck {
    /// Builds, shuffles and burns a deck made of `decks` standard decks.
    ///
    /// Between 1 and [`MAX_BURN`] cards are burned.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use shoe::Deck;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::new(1, &mut rng);
    /// assert_eq!(deck.remaining() + deck.burned(), 52);
    /// ```
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        Self::with_max_burn(decks, MAX_BURN, rng)
    }

    /// Builds and shuffles a deck, burning between 1 and `max_burn` cards.
    ///
    /// A `max_burn` of zero disables the burn. A `max_burn` larger than the
    /// deck is reduced to the deck size before drawing, so every burn count
    /// up to that size is equally likely.
    pub fn with_max_burn<R: Rng + ?Sized>(decks: u8, max_burn: usize, rng: &mut R) -> Self {
        let mut cards = Self::unshuffled(decks);
        cards.shuffle(rng);

        let limit = max_burn.min(cards.len());
        let burned = if limit == 0 {
            0
        } else {
            rng.random_range(1..=limit)
        };
        cards.truncate(cards.len() - burned);

        log::debug!(
            "built deck from {} decks, burned {burned}, {} remaining",
            decks.max(1),
            cards.len()
        );

        Self { cards, burned }
    }

    /// Creates a deck that deals `cards` from the end of the slice first.
    ///
    /// Nothing is shuffled or burned, which makes this useful for stacking a
    /// known sequence.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, burned: 0 }
    }

    /// Returns `decks` standard decks in a fixed order, before shuffling.
    ///
    /// A `decks` value of zero is treated as one deck.
    #[must_use]
    pub fn unshuffled(decks: u8) -> Vec<Card> {
        let decks = decks.max(1);
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for rank in 1..=RANKS {
                for suit in Suit::ALL {
                    if let Ok(card) = Card::from_rank(rank, suit) {
                        cards.push(card);
                    }
                }
            }
        }

        cards
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfCards`] if the deck is empty.
    pub fn deal(&mut self) -> Result<Card, OutOfCards> {
        let card = self.cards.pop().ok_or(OutOfCards)?;
        log::trace!("dealt {card}, {} remaining", self.cards.len());
        Ok(card)
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many cards were burned when the deck was built.
    #[must_use]
    pub const fn burned(&self) -> usize {
        self.burned
    }

    /// Returns the undealt cards, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
