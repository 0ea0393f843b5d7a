//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when parsing card text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Card text was not exactly two characters.
    #[error("card text must be exactly two characters")]
    Length,
    /// Unknown rank symbol.
    #[error("unknown rank symbol {0:?}")]
    UnknownRank(char),
    /// Unknown suit symbol.
    #[error("unknown suit symbol {0:?}")]
    UnknownSuit(char),
}

/// Errors that can occur when removing cards from a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The requested card is not in the pile.
    #[error("card {0} is not in the pile")]
    NotInPile(Card),
}

/// Errors that can occur while collecting crib discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CribError {
    /// A player owes the crib one or two cards, never another amount.
    #[error("a player owes the crib 1 or 2 cards, not {0}")]
    InvalidCount(usize),
    /// A strategy answered with the wrong number of discards.
    #[error("expected {expected} crib discards, got {got}")]
    WrongDiscardCount {
        /// Number of discards the crib asked for.
        expected: usize,
        /// Number of discards the strategy produced.
        got: usize,
    },
    /// A strategy discarded a card its player does not hold.
    #[error("discard {0} is not in the player's hand")]
    NotInHand(Card),
}

/// Errors that can occur during pegging plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PegError {
    /// A strategy played a card its player does not hold.
    #[error("pegging card {0} is not in the player's pegging hand")]
    NotInHand(Card),
    /// A strategy played a card that would push the pegging count past 31.
    #[error("playing {0} would take the pegging count past 31")]
    ExceedsLimit(Card),
}

/// Errors that can occur while running a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Cribbage is played by two, three, or four players.
    #[error("cribbage supports 2 to 4 players, got {0}")]
    InvalidPlayerCount(usize),
    /// The deal pile ran dry even after replenishing from the discard pile.
    #[error("the deal pile is out of cards")]
    OutOfCards,
    /// A scoring phase ran before the starter card was revealed.
    #[error("no starter card has been revealed")]
    NoStarter,
    /// The deal cap was reached without a winner, which means the game is
    /// misconfigured (for example an unreachable winning score).
    #[error("no winner after {0} deals")]
    DealLimitExceeded(u32),
    /// A crib collection failed.
    #[error(transparent)]
    Crib(#[from] CribError),
    /// A pegging play failed.
    #[error(transparent)]
    Peg(#[from] PegError),
    /// A pile operation failed.
    #[error(transparent)]
    Play(#[from] PlayError),
}
