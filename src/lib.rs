//! Playing cards decoded deterministically from provable integer streams, with
//! optional `no_std` support.
//!
//! A [`Card`] is decoded from a signed integer with [`Card::from_provable`]:
//! non-negative values map onto the 52 standard cards, negative values onto
//! jokers. A [`Deck`] asks a [`ShuffleSource`] for a permutation of the value
//! range configured by [`DeckOptions`] and tracks which cards are remaining,
//! dealt, or burnt.
//!
//! # Example
//!
//! ```
//! use provable_cards::{Deck, DeckOptions};
//!
//! let options = DeckOptions::default().with_decks(2).with_jokers(true);
//! let mut deck = Deck::new(options, "client seed", "server seed").unwrap();
//! assert_eq!(deck.len(), 108);
//!
//! deck.burn();
//! let card = deck.deal().unwrap();
//! println!("dealt the {card}, worth {}", card.value());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod source;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError};
pub use options::DeckOptions;
pub use source::{ChaChaShuffle, ShuffleRequest, ShuffleSource};
