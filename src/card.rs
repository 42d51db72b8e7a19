//! Card types and the provable-value codec.
//!
//! A card can be built from an explicit [`Face`]/[`Suit`] pair, from raw
//! face/suit identifiers (validated), or decoded from a signed provable value.
//! Decoding is total: every `i64` maps to exactly one card.

use core::cmp::Ordering;
use core::fmt;

use alloc::string::{String, ToString};

use crate::error::CardError;

/// Number of suits in a deck.
pub const SUIT_COUNT: i64 = 4;

/// Number of non-joker faces per suit.
pub const FACES_PER_SUIT: i64 = 13;

/// Number of cards per deck, jokers excluded.
pub const DECK_SIZE: usize = 52;

/// Card suit.
///
/// Suits are ordered by identifier: clubs < diamonds < hearts < spades. The
/// order only matters for suit-aware comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs (0).
    Club,
    /// Diamonds (1).
    Diamond,
    /// Hearts (2).
    Heart,
    /// Spades (3).
    Spade,
}

impl Suit {
    /// Every suit, in identifier order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Diamond, Self::Heart, Self::Spade];

    const NAMES: [&'static str; 4] = ["clubs", "diamonds", "hearts", "spades"];

    /// Returns the suit identifier (0 to 3).
    #[must_use]
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Returns the plural display name, e.g. `"hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl TryFrom<i32> for Suit {
    type Error = CardError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        usize::try_from(id)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(CardError::InvalidSuit(id))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card face.
///
/// Faces are ordered by rank, with the joker below every other face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    /// Joker.
    Joker,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Face {
    /// Every face, joker first, in rank order.
    pub const ALL: [Self; 14] = [
        Self::Joker,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Faces that can be decoded from a non-negative value, indexed by rank.
    const RANKED: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    const NAMES: [&'static str; 14] = [
        "joker", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "jack",
        "queen", "king", "ace",
    ];

    /// Returns the face identifier: `-1` for the joker, `2..=10` for pip
    /// faces, then 11 (jack) through 14 (ace).
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::Joker => -1,
            _ => self as i32 + 1,
        }
    }

    /// Returns the ordering rank: `-1` for the joker, `0` for a two, up to
    /// `12` for an ace.
    #[must_use]
    pub const fn rank(self) -> i32 {
        self as i32 - 1
    }

    /// Returns the display name, e.g. `"queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Returns the blackjack scoring value.
    ///
    /// Jokers score 0, pip faces their pip count, jack/queen/king 10 and the
    /// ace 11.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Joker => 0,
            Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
            _ => self.id() as u8,
        }
    }
}

impl TryFrom<i32> for Face {
    type Error = CardError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            -1 => Ok(Self::Joker),
            2..=14 => Ok(Self::ALL[(id - 1) as usize]),
            _ => Err(CardError::InvalidFace(id)),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// The derived ordering is suit-aware: rank first, then suit identifier.
/// Use [`Card::compare`] with `by_suit = false` for rank-only comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    face: Face,
    suit: Suit,
}

impl Card {
    /// Creates a card from a face and suit.
    #[must_use]
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { face, suit }
    }

    /// Creates a card from raw face and suit identifiers.
    ///
    /// # Example
    ///
    /// ```
    /// use provable_cards::{Card, Face, Suit};
    ///
    /// let card = Card::from_ids(10, 1).unwrap();
    /// assert_eq!(card, Card::new(Face::Ten, Suit::Diamond));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidFace`] or [`CardError::InvalidSuit`] if an
    /// identifier does not name a known face or suit. The face is checked
    /// first.
    pub fn from_ids(face_id: i32, suit_id: i32) -> Result<Self, CardError> {
        let face = Face::try_from(face_id)?;
        let suit = Suit::try_from(suit_id)?;
        Ok(Self::new(face, suit))
    }

    /// Decodes a card from a provable value.
    ///
    /// Negative values are always jokers; their suit wraps so that `-1` is a
    /// spade, `-2` a heart, `-3` a diamond and `-4` a club, repeating every
    /// four values. Non-negative values take the suit from `value % 4` and
    /// the rank from `value / 4 % 13`.
    ///
    /// # Example
    ///
    /// ```
    /// use provable_cards::{Card, Face, Suit};
    ///
    /// assert_eq!(Card::from_provable(37), Card::new(Face::Jack, Suit::Diamond));
    /// assert_eq!(Card::from_provable(-1), Card::new(Face::Joker, Suit::Spade));
    /// ```
    #[must_use]
    pub const fn from_provable(value: i64) -> Self {
        Self {
            face: face_from_provable(value),
            suit: suit_from_provable(value),
        }
    }

    /// Returns the face.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the ordering rank of the face (`-1` for jokers).
    #[must_use]
    pub const fn rank(&self) -> i32 {
        self.face.rank()
    }

    /// Returns the face name, e.g. `"ten"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.face.name()
    }

    /// Returns the rank name. Identical to [`Card::name`].
    #[must_use]
    pub const fn rank_name(&self) -> &'static str {
        self.face.name()
    }

    /// Returns the suit name, e.g. `"diamonds"`.
    #[must_use]
    pub const fn suit_name(&self) -> &'static str {
        self.suit.name()
    }

    /// Returns the full name, e.g. `"ten of diamonds"`.
    ///
    /// This is the same text produced by the [`fmt::Display`] impl.
    #[must_use]
    pub fn full_name(&self) -> String {
        self.to_string()
    }

    /// Returns the blackjack scoring value of the card.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.face.value()
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.face, Face::Joker)
    }

    /// Returns whether the card is a jack, queen, or king.
    #[must_use]
    pub const fn is_royalty(&self) -> bool {
        matches!(self.face, Face::Jack | Face::Queen | Face::King)
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.face, Face::Ace)
    }

    /// Compares two cards by rank, breaking ties by suit when `by_suit` is set.
    ///
    /// Without `by_suit`, cards of equal rank always compare equal.
    #[must_use]
    pub fn compare(&self, other: &Self, by_suit: bool) -> Ordering {
        let by_rank = self.face.cmp(&other.face);
        if by_suit {
            by_rank.then(self.suit.cmp(&other.suit))
        } else {
            by_rank
        }
    }

    /// Returns whether this card ranks above `other`.
    #[must_use]
    pub fn greater_than(&self, other: &Self, by_suit: bool) -> bool {
        self.compare(other, by_suit) == Ordering::Greater
    }

    /// Returns whether this card ranks below `other`.
    #[must_use]
    pub fn less_than(&self, other: &Self, by_suit: bool) -> bool {
        self.compare(other, by_suit) == Ordering::Less
    }

    /// Returns whether this card ranks the same as `other`.
    #[must_use]
    pub fn equal_to(&self, other: &Self, by_suit: bool) -> bool {
        self.compare(other, by_suit) == Ordering::Equal
    }
}

impl From<i64> for Card {
    fn from(value: i64) -> Self {
        Self::from_provable(value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face.name(), self.suit.name())
    }
}

// rem_euclid keeps a zero remainder at clubs and maps a negative remainder
// r to SUIT_COUNT + r.
const fn suit_from_provable(value: i64) -> Suit {
    Suit::ALL[value.rem_euclid(SUIT_COUNT) as usize]
}

const fn face_from_provable(value: i64) -> Face {
    if value < 0 {
        return Face::Joker;
    }
    Face::RANKED[(value / SUIT_COUNT % FACES_PER_SUIT) as usize]
}
