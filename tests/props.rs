//! Property tests for hand totals and deck composition.

use std::collections::HashMap;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shoe::{Card, DECK_SIZE, Deck, Hand, Suit, total_of};

fn any_card() -> impl Strategy<Value = Card> {
    (1u8..=13, 0usize..4).prop_map(|(rank, suit)| {
        Card::from_rank(rank, Suit::ALL[suit]).expect("rank in range")
    })
}

proptest! {
    /// Property: the total is the hard sum, plus ten when one ace fits.
    #[test]
    fn prop_total_is_hard_or_one_soft_ace(cards in prop::collection::vec(any_card(), 0..8)) {
        let hard: u32 = cards.iter().map(|card| u32::from(card.hard())).sum();
        let has_ace = cards.iter().any(Card::is_insurable);
        let total = total_of(&cards);

        if has_ace && hard + 10 <= 21 {
            prop_assert_eq!(total, hard + 10);
        } else {
            prop_assert_eq!(total, hard);
        }
    }

    /// Property: card order does not affect the total.
    #[test]
    fn prop_total_ignores_order(cards in prop::collection::vec(any_card(), 0..8)) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(total_of(&cards), total_of(&reversed));
    }

    /// Property: freezing a hand keeps its total and cards.
    #[test]
    fn prop_frozen_hand_matches_hand(
        dealer in any_card(),
        cards in prop::collection::vec(any_card(), 0..6),
    ) {
        let hand = Hand::with_cards(dealer, cards);
        let frozen = hand.freeze();
        prop_assert_eq!(frozen.total(), hand.total());
        prop_assert_eq!(frozen.cards(), hand.cards());
    }

    /// Property: a dealt deck is a multiset subset of the unshuffled decks.
    #[test]
    fn prop_deck_is_subset_of_full_decks(decks in 1u8..=6, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(decks, &mut rng);

        prop_assert!((1..=DECK_SIZE).contains(&deck.burned()));
        prop_assert_eq!(deck.remaining() + deck.burned(), DECK_SIZE * decks as usize);

        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in deck.cards() {
            *counts.entry(*card).or_default() += 1;
        }
        prop_assert!(counts.values().all(|&n| n <= decks as usize));
    }
}
