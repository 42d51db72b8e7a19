//! Deck state: remaining, dealt, and burnt cards.

use alloc::vec::Vec;

use tracing::{debug, trace, warn};

use crate::card::Card;
use crate::error::DeckError;
use crate::options::DeckOptions;
use crate::source::{ChaChaShuffle, ShuffleRequest, ShuffleSource};

/// A deck of cards decoded from a sequence of provable values.
///
/// Every card starts in the remaining partition, in sequence order. [`deal`]
/// and [`burn`] move the head of that partition to the dealt or burnt pile,
/// so the three partitions always add up to the original card count.
///
/// A deck has no internal locking. Share one between threads by wrapping it
/// in a mutex.
///
/// # Example
///
/// ```
/// use provable_cards::{Deck, DeckOptions};
///
/// let mut deck = Deck::new(DeckOptions::default(), "client", "server").unwrap();
/// let card = deck.deal().unwrap();
/// assert_eq!(deck.dealt_cards(), &[card]);
/// assert_eq!(deck.len(), 51);
/// ```
///
/// [`deal`]: Deck::deal
/// [`burn`]: Deck::burn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Provable values the deck was built from, in order.
    values: Vec<i64>,
    /// Decoded cards in sequence order. The remaining cards are
    /// `cards[position..]`.
    cards: Vec<Card>,
    /// Index of the next card to leave the deck.
    position: usize,
    /// Dealt cards, in the order they were dealt.
    dealt: Vec<Card>,
    /// Burnt cards, in the order they were burnt.
    burnt: Vec<Card>,
    /// Request the values came from, if they were generated.
    request: Option<ShuffleRequest>,
}

impl Deck {
    /// Creates a deck shuffled by [`ChaChaShuffle`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NoDecks`] if `options.decks` is zero.
    pub fn new(
        options: DeckOptions,
        client_seed: &str,
        server_seed: &str,
    ) -> Result<Self, DeckError> {
        Self::with_source(options, client_seed, server_seed, &ChaChaShuffle)
    }

    /// Creates a deck from the values produced by `source`.
    ///
    /// The source is asked for a permutation of [`DeckOptions::value_range`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NoDecks`] if `options.decks` is zero, or
    /// [`DeckError::NotAPermutation`] if the source returns anything other
    /// than a permutation of the requested range.
    pub fn with_source<S: ShuffleSource + ?Sized>(
        options: DeckOptions,
        client_seed: &str,
        server_seed: &str,
        source: &S,
    ) -> Result<Self, DeckError> {
        if options.decks == 0 {
            return Err(DeckError::NoDecks);
        }

        let range = options.value_range();
        let request = ShuffleRequest::new(client_seed, server_seed, *range.start(), *range.end());
        let values = request.replay(source);

        if !request.is_permutation(&values) {
            warn!(
                min = request.min,
                max = request.max,
                len = values.len(),
                "source returned an invalid shuffle"
            );
            return Err(DeckError::NotAPermutation {
                min: request.min,
                max: request.max,
            });
        }

        debug!(
            decks = options.decks,
            jokers = options.jokers,
            min = request.min,
            max = request.max,
            cards = values.len(),
            "built deck"
        );

        let mut deck = Self::from_values(values);
        deck.request = Some(request);
        Ok(deck)
    }

    /// Creates a deck from an explicit sequence of provable values.
    ///
    /// Every value is decoded with [`Card::from_provable`]; no range check is
    /// made.
    #[must_use]
    pub fn from_values(values: Vec<i64>) -> Self {
        let cards = values.iter().copied().map(Card::from_provable).collect();
        Self {
            values,
            cards,
            position: 0,
            dealt: Vec::new(),
            burnt: Vec::new(),
            request: None,
        }
    }

    /// Takes the next card off the deck.
    fn take(&mut self) -> Option<Card> {
        let card = self.cards.get(self.position).copied();
        if card.is_some() {
            self.position += 1;
        } else {
            trace!("deck exhausted");
        }
        card
    }

    /// Deals the next card.
    ///
    /// Returns `None` once the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.take()?;
        self.dealt.push(card);
        trace!(%card, remaining = self.len(), "dealt card");
        Some(card)
    }

    /// Burns the next card.
    ///
    /// Returns `None` once the deck is exhausted.
    pub fn burn(&mut self) -> Option<Card> {
        let card = self.take()?;
        self.burnt.push(card);
        trace!(%card, remaining = self.len(), "burnt card");
        Some(card)
    }

    /// Returns the provable values the deck was built from.
    #[must_use]
    pub fn cards(&self) -> &[i64] {
        &self.values
    }

    /// Returns the cards still in the deck, next card first.
    #[must_use]
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    /// Returns the dealt cards.
    #[must_use]
    pub fn dealt_cards(&self) -> &[Card] {
        &self.dealt
    }

    /// Returns the burnt cards.
    #[must_use]
    pub fn burnt_cards(&self) -> &[Card] {
        &self.burnt
    }

    /// Returns the shuffle request, or `None` for decks built from explicit values.
    #[must_use]
    pub const fn request(&self) -> Option<&ShuffleRequest> {
        self.request.as_ref()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len() - self.position
    }

    /// Returns whether no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of cards the deck was built with.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cards.len()
    }
}
