//! Player decision strategies.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::cards::Cards;
use crate::score::PEGGING_LIMIT;

/// Decision logic for one player.
///
/// The engine consults a strategy at the two decision points of a deal:
/// which cards to give to the crib and which card to play on the pegging
/// sequence. Returned cards must come from `hand`; the engine validates
/// every answer and surfaces a violation as an error rather than trusting
/// the strategy.
pub trait Strategy {
    /// Chooses `count` cards from `hand` to give to the crib.
    fn choose_crib_discards(&mut self, hand: &Cards, count: usize) -> Cards;

    /// Chooses one card from `hand` to play on the pegging `sequence`.
    ///
    /// Implementations may assume at least one card of `hand` keeps the
    /// count within the limit, because the engine only asks players who
    /// can peg.
    fn choose_pegging_card(&mut self, hand: &Cards, sequence: &Cards) -> Card;
}

/// A strategy that picks uniformly among its legal moves.
///
/// Deterministic for a given seed, which makes it suitable for bots and
/// for reproducing whole games.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates a random strategy seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_crib_discards(&mut self, hand: &Cards, count: usize) -> Cards {
        hand.cards()
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect()
    }

    fn choose_pegging_card(&mut self, hand: &Cards, sequence: &Cards) -> Card {
        let total = sequence.value();
        let legal: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|card| total + u32::from(card.value()) <= PEGGING_LIMIT)
            .collect();
        *legal
            .choose(&mut self.rng)
            .expect("caller checked that a legal pegging card exists")
    }
}
