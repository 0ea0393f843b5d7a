//! A cribbage game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full deal flow,
//! including dealing, crib collection, the starter reveal, the pegging
//! phase, and the show, with players driven by pluggable [`Strategy`]
//! implementations. The scoring functions and card-set combinatorics are
//! also exposed directly for building tools on top.
//!
//! # Example
//!
//! ```
//! use cribrs::{Game, GameOptions, Player, Players, RandomStrategy};
//!
//! let players = Players::new(vec![
//!     Player::new("Alice", Box::new(RandomStrategy::new(1))),
//!     Player::new("Bob", Box::new(RandomStrategy::new(2))),
//! ]);
//! let mut game = Game::new(players, GameOptions::default(), 42).unwrap();
//! let result = game.play().unwrap();
//! assert!(result.scores[result.winner_seat] >= 121);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod cards;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod score;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use cards::Cards;
pub use error::{CribError, GameError, ParseCardError, PegError, PlayError};
pub use game::Game;
pub use options::GameOptions;
pub use player::{Player, Players, TurnOrder};
pub use result::{GameResult, HandScore, PegScore};
pub use score::{PEGGING_LIMIT, score_hand, score_pegging_play};
pub use strategy::{RandomStrategy, Strategy};
