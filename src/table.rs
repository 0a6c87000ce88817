//! The table: owns the deck and deals hands from it.

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::OutOfCards;
use crate::hand::Hand;
use crate::options::TableOptions;

/// A single blackjack table with one deck and one active round.
///
/// The table recovers from an exhausted deck by replacing it with a complete
/// fresh shuffle and dealing again, so callers never see
/// [`OutOfCards`].
///
/// # Example
///
/// ```
/// use shoe::{Table, TableOptions};
///
/// let mut table = Table::new(TableOptions::default(), 42);
/// let hand = table.deal_opening_hand();
/// assert_eq!(hand.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    /// Cards in the deck.
    deck: Deck,
    /// Table options.
    options: TableOptions,
    /// The dealer's hidden card for the current round.
    hole_card: Option<Card>,
    /// The wager placed for the current round.
    bet: Option<NonZeroUsize>,
    /// How many times the deck has been replaced.
    reshuffles: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with the given seed.
    ///
    /// If `options.player_cards` leaves no room for the dealer's two cards in
    /// a full deck, it is reduced to fit.
    #[must_use]
    pub fn new(mut options: TableOptions, seed: u64) -> Self {
        let capacity = options.decks.max(1) as usize * DECK_SIZE;
        if options.opening_draw() > capacity {
            let fitted = (capacity - 2).min(u8::MAX as usize) as u8;
            log::warn!(
                "{} player cards do not fit in {} decks, dealing {fitted}",
                options.player_cards,
                options.decks.max(1)
            );
            options.player_cards = fitted;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::with_max_burn(options.decks, Self::burn_limit(&options), &mut rng);

        Self {
            deck,
            options,
            hole_card: None,
            bet: None,
            reshuffles: 0,
            rng,
        }
    }

    /// Largest burn that still leaves a full opening deal in a fresh deck.
    fn burn_limit(options: &TableOptions) -> usize {
        let capacity = options.decks.max(1) as usize * DECK_SIZE;
        options
            .max_burn
            .min(capacity.saturating_sub(options.opening_draw()))
    }

    /// Replaces the deck with a fresh shuffle.
    pub fn reshuffle(&mut self) {
        self.deck = Deck::with_max_burn(
            self.options.decks,
            Self::burn_limit(&self.options),
            &mut self.rng,
        );
        self.reshuffles += 1;
        log::info!(
            "deck reshuffled ({} so far), {} cards remaining",
            self.reshuffles,
            self.deck.remaining()
        );
    }

    /// Draws a card, reshuffling first if the deck is empty.
    fn draw(&mut self) -> Card {
        loop {
            match self.deck.deal() {
                Ok(card) => return card,
                Err(OutOfCards) => self.reshuffle(),
            }
        }
    }

    fn try_deal_opening(&mut self) -> Result<Hand, OutOfCards> {
        let dealer_card = self.deck.deal()?;
        let cards = (0..self.options.player_cards)
            .map(|_| self.deck.deal())
            .collect::<Result<Vec<_>, _>>()?;
        let hole_card = self.deck.deal()?;

        self.hole_card = Some(hole_card);
        Ok(Hand::with_cards(dealer_card, cards))
    }

    /// Deals an opening hand: the dealer's up-card, the player's cards and
    /// the dealer's hole card, which stays hidden on the table.
    ///
    /// If the deck runs out part way, the partial deal is discarded together
    /// with the exhausted deck and the whole hand is dealt again from a fresh
    /// shuffle.
    pub fn deal_opening_hand(&mut self) -> Hand {
        loop {
            match self.try_deal_opening() {
                Ok(hand) => {
                    log::debug!("dealt {hand} against {}", hand.dealer_card());
                    return hand;
                }
                Err(OutOfCards) => self.reshuffle(),
            }
        }
    }

    /// Deals one more card into `hand`.
    pub fn hit(&mut self, hand: &mut Hand) {
        let card = self.draw();
        hand.push(card);
    }

    /// Splits a pair into two hands and deals one card to each.
    ///
    /// Returns the new hand, or `None` if `hand` is not a pair.
    pub fn split(&mut self, hand: &mut Hand) -> Option<Hand> {
        let mut other = hand.split()?;
        self.hit(hand);
        self.hit(&mut other);
        Some(other)
    }

    /// Returns whether the player may take insurance on `hand`.
    #[must_use]
    pub const fn can_insure(&self, hand: &Hand) -> bool {
        hand.dealer_card().is_insurable()
    }

    /// Records the wager for the current round.
    pub fn place_bet(&mut self, amount: NonZeroUsize) {
        log::info!("bet {amount}");
        self.bet = Some(amount);
    }

    /// Returns the wager for the current round.
    #[must_use]
    pub const fn bet(&self) -> Option<NonZeroUsize> {
        self.bet
    }

    /// Returns the dealer's hole card from the last opening deal.
    #[must_use]
    pub const fn hole_card(&self) -> Option<Card> {
        self.hole_card
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns how many times the deck has been replaced.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Swaps in `deck`, returning the previous one.
    pub fn replace_deck(&mut self, deck: Deck) -> Deck {
        core::mem::replace(&mut self.deck, deck)
    }

    /// Forgets the current round's bet and hole card.
    pub const fn clear_round(&mut self) {
        self.hole_card = None;
        self.bet = None;
    }
}
