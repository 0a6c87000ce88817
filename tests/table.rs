//! Deck, table and strategy integration tests.

use core::num::NonZeroUsize;
use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shoe::{
    Baseline, BettingStrategy, Card, DECK_SIZE, Deck, FlatBet, Hand, OutOfCards, Outcome,
    OutcomeBook, PlayStrategy, Suit, Table, TableOptions,
};

fn card(rank: u8, suit: Suit) -> Card {
    Card::from_rank(rank, suit).unwrap()
}

/// Builds a deck that deals `draws` in order.
fn stacked(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

#[test]
fn unshuffled_deck_has_every_card_per_deck() {
    for decks in 1..=4u8 {
        let cards = Deck::unshuffled(decks);
        assert_eq!(cards.len(), DECK_SIZE * decks as usize);

        let distinct: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(distinct.len(), DECK_SIZE);
    }
}

#[test]
fn new_deck_burns_between_one_and_fifty_two() {
    for seed in 0..64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(1, &mut rng);
        assert!((1..=52).contains(&deck.burned()));
        assert!(deck.remaining() <= 51);
        assert_eq!(deck.remaining() + deck.burned(), DECK_SIZE);
    }
}

#[test]
fn seeded_decks_are_reproducible() {
    let a = Deck::new(2, &mut ChaCha8Rng::seed_from_u64(9));
    let b = Deck::new(2, &mut ChaCha8Rng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn zero_max_burn_keeps_every_card() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = Deck::with_max_burn(2, 0, &mut rng);
    assert_eq!(deck.burned(), 0);
    assert_eq!(deck.remaining(), 2 * DECK_SIZE);
}

#[test]
fn deal_takes_from_the_top_until_empty() {
    let mut deck = stacked(&[card(1, Suit::Spade), card(7, Suit::Heart)]);
    assert_eq!(deck.deal(), Ok(card(1, Suit::Spade)));
    assert_eq!(deck.remaining(), 1);
    assert_eq!(deck.deal(), Ok(card(7, Suit::Heart)));
    assert!(deck.is_empty());
    assert_eq!(deck.deal(), Err(OutOfCards));
}

#[test]
fn opening_hand_draws_up_card_players_cards_then_hole_card() {
    let mut table = Table::new(TableOptions::default(), 1);
    table.replace_deck(stacked(&[
        card(1, Suit::Spade),
        card(10, Suit::Heart),
        card(6, Suit::Club),
        card(9, Suit::Diamond),
        card(2, Suit::Club),
    ]));

    let hand = table.deal_opening_hand();
    assert_eq!(hand.dealer_card(), card(1, Suit::Spade));
    assert_eq!(hand.cards(), &[card(10, Suit::Heart), card(6, Suit::Club)]);
    assert_eq!(table.hole_card(), Some(card(9, Suit::Diamond)));
    assert_eq!(table.cards_remaining(), 1);
    assert!(table.can_insure(&hand));
    assert_eq!(table.reshuffles(), 0);
}

#[test]
fn player_card_count_is_configurable() {
    let mut table = Table::new(TableOptions::default().with_player_cards(3), 5);
    let hand = table.deal_opening_hand();
    assert_eq!(hand.len(), 3);
    assert!(table.hole_card().is_some());
}

#[test]
fn exhausted_deck_is_replaced_by_a_fresh_shuffle() {
    let mut table = Table::new(TableOptions::default(), 11);
    table.replace_deck(stacked(&[card(5, Suit::Club), card(6, Suit::Club)]));

    let hand = table.deal_opening_hand();
    assert_eq!(hand.len(), 2);
    assert_eq!(table.reshuffles(), 1);

    let fresh = table.deck().remaining() + table.deck().burned() + 4;
    assert_eq!(fresh, DECK_SIZE);
}

#[test]
fn hit_reshuffles_an_empty_deck() {
    let mut table = Table::new(TableOptions::default(), 2);
    table.replace_deck(Deck::from_cards(Vec::new()));

    let mut hand = Hand::new(card(10, Suit::Spade));
    table.hit(&mut hand);
    assert_eq!(hand.len(), 1);
    assert_eq!(table.reshuffles(), 1);
    assert_eq!(table.deck().remaining() + table.deck().burned() + 1, DECK_SIZE);
}

#[test]
fn dealing_many_rounds_never_fails() {
    let mut table = Table::new(TableOptions::default(), 99);
    for _ in 0..500 {
        let mut hand = table.deal_opening_hand();
        while Baseline.hit(&hand) {
            table.hit(&mut hand);
        }
        assert!(hand.hard_total() > 17);
        table.clear_round();
    }
    assert!(table.reshuffles() > 0);
}

#[test]
fn table_split_deals_to_both_hands() {
    let mut table = Table::new(TableOptions::default(), 4);
    table.replace_deck(stacked(&[card(3, Suit::Heart), card(4, Suit::Spade)]));

    let mut hand = Hand::with_cards(
        card(6, Suit::Club),
        vec![card(8, Suit::Club), card(8, Suit::Diamond)],
    );
    let other = table.split(&mut hand).unwrap();
    assert_eq!(hand.cards(), &[card(8, Suit::Club), card(3, Suit::Heart)]);
    assert_eq!(other.cards(), &[card(8, Suit::Diamond), card(4, Suit::Spade)]);

    let mut no_pair = Hand::with_cards(
        card(6, Suit::Club),
        vec![card(8, Suit::Club), card(9, Suit::Diamond)],
    );
    assert!(table.split(&mut no_pair).is_none());
}

#[test]
fn oversized_player_cards_are_fitted_to_the_deck() {
    let options = TableOptions::default().with_player_cards(60);
    let mut table = Table::new(options, 8);
    assert_eq!(table.options().player_cards, 50);

    let hand = table.deal_opening_hand();
    assert_eq!(hand.len(), 50);

    let hard: u32 = hand.cards().iter().map(|c| u32::from(c.hard())).sum();
    assert!(hard > 255);
    assert_eq!(hand.hard_total(), hard);
    assert_eq!(hand.total(), hard);
    assert!(hand.is_bust());
}

#[test]
fn burn_larger_than_deck_is_capped_before_drawing() {
    let mut burns = HashSet::new();
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::with_max_burn(1, 10 * DECK_SIZE, &mut rng);
        assert!((1..=DECK_SIZE).contains(&deck.burned()));
        burns.insert(deck.burned());
    }
    assert!(burns.len() > 20);
}

#[test]
fn only_aces_are_insurable() {
    let table = Table::new(TableOptions::default(), 0);
    assert!(table.can_insure(&Hand::new(card(1, Suit::Heart))));
    assert!(!table.can_insure(&Hand::new(card(13, Suit::Heart))));
}

#[test]
fn place_bet_records_the_wager() {
    let mut table = Table::new(TableOptions::default(), 0);
    let strategy = FlatBet::default();
    table.place_bet(strategy.bet());
    assert_eq!(table.bet(), NonZeroUsize::new(1));

    table.clear_round();
    assert_eq!(table.bet(), None);
    assert_eq!(table.hole_card(), None);
}

#[test]
fn flat_bet_ignores_results() {
    let mut strategy = FlatBet::new(NonZeroUsize::new(5).unwrap());
    strategy.record_win();
    strategy.record_loss();
    assert_eq!(strategy.bet().get(), 5);
}

#[test]
fn baseline_declines_and_hits_on_hard_seventeen() {
    let ace = card(1, Suit::Spade);
    let soft = Hand::with_cards(ace, vec![card(1, Suit::Club), card(6, Suit::Club)]);
    let seventeen = Hand::with_cards(ace, vec![card(10, Suit::Club), card(7, Suit::Club)]);
    let eighteen = Hand::with_cards(ace, vec![card(10, Suit::Club), card(8, Suit::Club)]);

    assert!(!Baseline.insurance(&soft));
    assert!(!Baseline.split(&soft));
    assert!(!Baseline.double(&soft));
    assert!(Baseline.hit(&soft));
    assert!(Baseline.hit(&seventeen));
    assert!(!Baseline.hit(&eighteen));
}

#[test]
fn outcome_book_tallies_by_frozen_hand() {
    let dealer = card(6, Suit::Spade);
    let stand = Hand::with_cards(dealer, vec![card(10, Suit::Club), card(9, Suit::Club)]);
    let same = Hand::with_cards(dealer, vec![card(10, Suit::Club), card(9, Suit::Club)]);
    let other = Hand::with_cards(dealer, vec![card(10, Suit::Club), card(8, Suit::Club)]);

    let mut book = OutcomeBook::new();
    assert!(book.is_empty());
    book.record(&stand.freeze(), Outcome::Win);
    book.record(&same.freeze(), Outcome::Push);
    book.record(&other.freeze(), Outcome::Loss);

    assert_eq!(book.len(), 2);
    let tally = book.tally(&stand.freeze());
    assert_eq!((tally.wins, tally.losses, tally.pushes), (1, 0, 1));
    assert_eq!(tally.rounds(), 2);
    assert_eq!(book.tally(&other.freeze()).losses, 1);
    assert_eq!(book.iter().count(), 2);
}
