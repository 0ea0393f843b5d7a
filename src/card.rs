//! Card types and the two-character card text format.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Returns an iterator over all four suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Self> {
        [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs].into_iter()
    }

    /// Parses a suit symbol, ignoring case.
    #[must_use]
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Spades => "S",
            Self::Hearts => "H",
            Self::Diamonds => "D",
            Self::Clubs => "C",
        })
    }
}

/// Card rank, ordered Ace low through King high.
///
/// The discriminants are contiguous, so consecutive ranks (for straights)
/// differ by exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace, always low.
    Ace = 0,
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
}

impl Rank {
    /// Returns an iterator over all thirteen ranks, Ace first.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Self> {
        [
            Self::Ace,
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
        ]
        .into_iter()
    }

    /// Parses a rank symbol, ignoring case.
    #[must_use]
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "T",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        })
    }
}

/// A playing card.
///
/// The rank field comes first so the derived ordering compares by rank
/// before suit, matching how cribbage treats cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the counting value of the card: face value for Ace through
    /// Ten, with Jack, Queen, and King all counting ten.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the two-character card text, for example `"AH"` for the Ace
    /// of Hearts or `"TC"` for the Ten of Clubs. Lowercase is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = s.chars();
        let (Some(rank), Some(suit), None) = (symbols.next(), symbols.next(), symbols.next())
        else {
            return Err(ParseCardError::Length);
        };
        let rank = Rank::from_char(rank).ok_or(ParseCardError::UnknownRank(rank))?;
        let suit = Suit::from_char(suit).ok_or(ParseCardError::UnknownSuit(suit))?;
        Ok(Self { rank, suit })
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;
