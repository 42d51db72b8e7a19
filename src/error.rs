//! Error types for card and deck construction.

use thiserror::Error;

/// Errors that can occur when building a card from raw identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The face identifier is not `-1` or in `2..=14`.
    #[error("invalid face identifier {0}")]
    InvalidFace(i32),
    /// The suit identifier is not in `0..=3`.
    #[error("invalid suit identifier {0}")]
    InvalidSuit(i32),
}

/// Errors that can occur when building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck count is zero.
    #[error("deck count must be at least one")]
    NoDecks,
    /// The integer source did not return a permutation of the requested range.
    #[error("source sequence is not a permutation of {min}..={max}")]
    NotAPermutation {
        /// Lowest value requested.
        min: i64,
        /// Highest value requested.
        max: i64,
    },
}
