//! Plays simulated rounds with the reference strategies.
//!
//! Usage: `cargo run --example simulate -- [rounds] [seed]`. Set `RUST_LOG=debug`
//! to watch the deals.

use std::time::{SystemTime, UNIX_EPOCH};

use shoe::{
    Baseline, BettingStrategy, Card, FlatBet, Hand, Outcome, OutcomeBook, PlayStrategy, Suit,
    Table, TableOptions,
};

const DEALER_STANDS_ON: u32 = 17;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rounds = args
        .next()
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(1_000);
    let seed = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    let mut table = Table::new(TableOptions::default().with_decks(6), seed);
    let mut betting = FlatBet::default();
    let play = Baseline;
    let mut book = OutcomeBook::new();
    let mut net: isize = 0;

    for _ in 0..rounds {
        let bet = betting.bet();
        table.place_bet(bet);

        let mut hand = table.deal_opening_hand();
        if table.can_insure(&hand) && play.insurance(&hand) {
            log::debug!("insurance taken against {}", hand.dealer_card());
        }
        let opening = hand.freeze();

        while play.hit(&hand) && !hand.is_bust() {
            table.hit(&mut hand);
        }

        let outcome = settle(&mut table, &hand);
        book.record(&opening, outcome);

        let stake = bet.get() as isize;
        match outcome {
            Outcome::Win => {
                net += stake;
                betting.record_win();
            }
            Outcome::Loss => {
                net -= stake;
                betting.record_loss();
            }
            Outcome::Push => {}
        }

        table.clear_round();
    }

    println!("Played {rounds} rounds (seed {seed}), net {net}");
    println!("Reshuffles: {}", table.reshuffles());

    let mut best: Vec<_> = book.iter().filter(|(_, tally)| tally.rounds() > 2).collect();
    best.sort_by_key(|(_, tally)| core::cmp::Reverse(tally.wins));
    for (hand, tally) in best.iter().take(5) {
        println!(
            "{} vs {}: {} won, {} lost, {} pushed",
            format_cards(hand.cards()),
            format_card(&hand.dealer_card()),
            tally.wins,
            tally.losses,
            tally.pushes
        );
    }
}

/// Plays out the dealer and decides the round.
fn settle(table: &mut Table, hand: &Hand) -> Outcome {
    if hand.is_bust() {
        return Outcome::Loss;
    }

    let up_card = hand.dealer_card();
    let mut dealer = Hand::new(up_card);
    dealer.push(up_card);
    if let Some(hole) = table.hole_card() {
        dealer.push(hole);
    }
    while dealer.total() < DEALER_STANDS_ON {
        table.hit(&mut dealer);
    }

    if dealer.is_bust() {
        return Outcome::Win;
    }
    match hand.compare(&dealer) {
        core::cmp::Ordering::Greater => Outcome::Win,
        core::cmp::Ordering::Less => Outcome::Loss,
        core::cmp::Ordering::Equal => Outcome::Push,
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Heart | Suit::Diamond => "31",
        Suit::Club => "32",
        Suit::Spade => "34",
    };
    colorize(&card.to_string(), color_code)
}
