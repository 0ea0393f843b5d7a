//! Score breakdowns and game results.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Per-category breakdown of one hand scored at the show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandScore {
    /// Two points per distinct subset of cards summing to fifteen.
    pub fifteens: u32,
    /// Two points per pair of equal-rank cards.
    pub pairs: u32,
    /// Five points for a five-card flush, four for a hand-only flush
    /// outside the crib.
    pub flush: u32,
    /// One point per card in every maximal run of three, four, or five.
    pub runs: u32,
    /// One point for holding the Jack of the starter's suit.
    pub nobs: u32,
}

impl HandScore {
    /// Total points across all categories.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.fifteens + self.pairs + self.flush + self.runs + self.nobs
    }
}

/// Points awarded for the newest card of a pegging sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PegScore {
    /// Two, six, or twelve points for the trailing pair, triple, or quad.
    pub pairs: u32,
    /// One point per card in the longest run ending at the newest card.
    pub runs: u32,
    /// Two points for bringing the count to exactly fifteen.
    pub fifteen: u32,
    /// Two points for bringing the count to exactly thirty-one.
    pub thirty_one: u32,
    /// One point for the last card of a sequence that ends short of
    /// thirty-one.
    pub last_card: u32,
}

impl PegScore {
    /// Total points across all categories.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.pairs + self.runs + self.fifteen + self.thirty_one + self.last_card
    }
}

/// Final outcome of a completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Seat of the winning player.
    pub winner_seat: usize,
    /// Name of the winning player.
    pub winner_name: String,
    /// Final scores in seat order.
    pub scores: Vec<u32>,
    /// Number of deals played, counting the deciding one.
    pub deals: u32,
}
