//! Deck configuration options.

use core::ops::RangeInclusive;

use crate::card::DECK_SIZE;

/// Number of jokers added per deck when jokers are enabled.
pub const JOKERS_PER_DECK: usize = 2;

/// Configuration options for a deck.
///
/// The deck count is a `u8`, so a deck holds at most 255 sets of cards.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use provable_cards::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_decks(6)
///     .with_jokers(true);
/// assert_eq!(options.card_count(), 6 * 54);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of 52-card sets.
    pub decks: u8,
    /// Whether two jokers per set are included.
    pub jokers: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: false,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use provable_cards::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(3);
    /// assert_eq!(options.decks, 3);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether jokers are included.
    ///
    /// # Example
    ///
    /// ```
    /// use provable_cards::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(true);
    /// assert!(options.jokers);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: bool) -> Self {
        self.jokers = jokers;
        self
    }

    /// Returns the number of jokers in the deck.
    #[must_use]
    pub const fn joker_count(&self) -> usize {
        if self.jokers {
            self.decks as usize * JOKERS_PER_DECK
        } else {
            0
        }
    }

    /// Returns the total number of cards in the deck.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.decks as usize * DECK_SIZE + self.joker_count()
    }

    /// Returns the inclusive range of provable values the deck is built from.
    ///
    /// Jokers occupy the negative values, two per deck.
    ///
    /// # Example
    ///
    /// ```
    /// use provable_cards::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(2).with_jokers(true);
    /// assert_eq!(options.value_range(), -4..=103);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "card counts fit in i64")]
    pub const fn value_range(&self) -> RangeInclusive<i64> {
        let min = -(self.joker_count() as i64);
        let max = (self.decks as usize * DECK_SIZE) as i64 - 1;
        min..=max
    }
}
