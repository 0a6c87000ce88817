//! Table configuration options.

use crate::deck::MAX_BURN;

/// Configuration options for a [`Table`](crate::Table).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoe::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_player_cards(2)
///     .with_max_burn(20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of standard decks merged into the shoe.
    pub decks: u8,
    /// Number of cards dealt to the player in an opening hand.
    pub player_cards: u8,
    /// Largest number of cards burned after each shuffle. 0 disables burning.
    pub max_burn: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            player_cards: 2,
            max_burn: MAX_BURN,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of cards dealt to the player in an opening hand.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe::TableOptions;
    ///
    /// let options = TableOptions::default().with_player_cards(3);
    /// assert_eq!(options.player_cards, 3);
    /// ```
    #[must_use]
    pub const fn with_player_cards(mut self, cards: u8) -> Self {
        self.player_cards = cards;
        self
    }

    /// Sets the largest burn after each shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_burn(0);
    /// assert_eq!(options.max_burn, 0);
    /// ```
    #[must_use]
    pub const fn with_max_burn(mut self, max_burn: usize) -> Self {
        self.max_burn = max_burn;
        self
    }

    /// Number of cards an opening deal draws: the dealer's up-card, the
    /// player's cards and the dealer's hole card.
    #[must_use]
    pub const fn opening_draw(&self) -> usize {
        self.player_cards as usize + 2
    }
}
