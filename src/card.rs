//! Card types and the card factory.

use core::cmp::Ordering;
use core::fmt;

use crate::error::InvalidRank;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
}

impl Suit {
    /// All four suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Diamond, Self::Heart, Self::Spade];

    /// Returns the suit's display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Club => '♣',
            Self::Diamond => '♦',
            Self::Heart => '♥',
            Self::Spade => '♠',
        }
    }

    const fn index(self) -> u64 {
        match self {
            Self::Club => 0,
            Self::Diamond => 1,
            Self::Heart => 2,
            Self::Spade => 3,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Face card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Jack (rank 11).
    Jack,
    /// Queen (rank 12).
    Queen,
    /// King (rank 13).
    King,
}

/// The kind of a card, which determines its point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// A number card, 2 through 10. Counts its rank both hard and soft.
    Number(u8),
    /// An ace. Counts 1 hard and 11 soft, and makes a dealer up-card insurable.
    Ace,
    /// A jack, queen or king. Counts 10 both hard and soft.
    Face(Face),
}

/// A playing card.
///
/// Cards compare equal when they have the same rank and suit. Use
/// [`Card::cmp_rank`] to order cards, which ignores the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    kind: CardKind,
    suit: Suit,
}

impl Card {
    /// Creates a card from a numeric rank (1 = Ace, 11 = Jack, 12 = Queen,
    /// 13 = King) and a suit.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe::{Card, Suit};
    ///
    /// let ace = Card::from_rank(1, Suit::Spade).unwrap();
    /// assert_eq!((ace.hard(), ace.soft()), (1, 11));
    /// assert_eq!(ace.to_string(), "A♠");
    /// ```
    pub const fn from_rank(rank: u8, suit: Suit) -> Result<Self, InvalidRank> {
        let kind = match rank {
            1 => CardKind::Ace,
            2..=10 => CardKind::Number(rank),
            11 => CardKind::Face(Face::Jack),
            12 => CardKind::Face(Face::Queen),
            13 => CardKind::Face(Face::King),
            _ => return Err(InvalidRank(rank)),
        };
        Ok(Self { kind, suit })
    }

    /// Returns the kind of the card.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.kind
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the numeric rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self.kind {
            CardKind::Ace => 1,
            CardKind::Number(rank) => rank,
            CardKind::Face(Face::Jack) => 11,
            CardKind::Face(Face::Queen) => 12,
            CardKind::Face(Face::King) => 13,
        }
    }

    /// Returns the rank label used when displaying the card.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.kind {
            CardKind::Ace => "A",
            CardKind::Number(2) => "2",
            CardKind::Number(3) => "3",
            CardKind::Number(4) => "4",
            CardKind::Number(5) => "5",
            CardKind::Number(6) => "6",
            CardKind::Number(7) => "7",
            CardKind::Number(8) => "8",
            CardKind::Number(9) => "9",
            CardKind::Number(_) => "10",
            CardKind::Face(Face::Jack) => "J",
            CardKind::Face(Face::Queen) => "Q",
            CardKind::Face(Face::King) => "K",
        }
    }

    /// Point value with an ace counted as 1.
    #[must_use]
    pub const fn hard(&self) -> u8 {
        match self.kind {
            CardKind::Ace => 1,
            CardKind::Number(rank) => rank,
            CardKind::Face(_) => 10,
        }
    }

    /// Point value with an ace counted as 11.
    #[must_use]
    pub const fn soft(&self) -> u8 {
        match self.kind {
            CardKind::Ace => 11,
            CardKind::Number(rank) => rank,
            CardKind::Face(_) => 10,
        }
    }

    /// Returns whether this card, showing as the dealer's up-card, allows the
    /// player to take insurance. Only aces are insurable.
    #[must_use]
    pub const fn is_insurable(&self) -> bool {
        matches!(self.kind, CardKind::Ace)
    }

    /// Orders two cards by rank alone.
    #[must_use]
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// Returns a stable numeric fingerprint of the card: suit index plus four
    /// times the rank. Distinct cards have distinct fingerprints.
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.suit.index() + 4 * self.rank() as u64
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label(), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS: u8 = 13;
