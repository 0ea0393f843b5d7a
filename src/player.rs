//! Players, seating, and turn rotation.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::card::Card;
use crate::cards::Cards;
use crate::error::{CribError, PegError, PlayError};
use crate::score::PEGGING_LIMIT;
use crate::strategy::Strategy;

/// A seated cribbage player.
pub struct Player {
    /// Display name.
    pub name: String,
    /// Seat position, assigned when the player joins a [`Players`] table
    /// and fixed for the lifetime of the game.
    pub seat: usize,
    /// Whether this player currently holds the deal.
    pub is_dealer: bool,
    /// Cumulative game score.
    pub score: u32,
    /// Cards held for the current deal.
    pub hand: Cards,
    /// Copy of the hand that is played down during the pegging phase.
    pub pegging_hand: Cards,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Creates a player with the given name and decision strategy. The
    /// seat is assigned when the player is seated at a table.
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            seat: 0,
            is_dealer: false,
            score: 0,
            hand: Cards::empty(),
            pegging_hand: Cards::empty(),
            strategy,
        }
    }

    /// Returns `true` when the player holds a card playable on `sequence`
    /// without pushing the count past the limit.
    #[must_use]
    pub fn can_peg(&self, sequence: &Cards) -> bool {
        let total = sequence.value();
        self.pegging_hand
            .iter()
            .any(|card| total + u32::from(card.value()) <= PEGGING_LIMIT)
    }

    /// Asks the strategy for `count` crib discards and removes them from
    /// the hand.
    ///
    /// # Errors
    ///
    /// Returns [`CribError::InvalidCount`] when `count` is not one or two,
    /// [`CribError::WrongDiscardCount`] when the strategy answers with a
    /// different number of cards, and [`CribError::NotInHand`] when it
    /// discards a card the player does not hold.
    pub fn give_cards_to_crib(&mut self, count: usize) -> Result<Cards, CribError> {
        if !(1..=2).contains(&count) {
            return Err(CribError::InvalidCount(count));
        }
        let discards = self.strategy.choose_crib_discards(&self.hand, count);
        if discards.len() != count {
            return Err(CribError::WrongDiscardCount {
                expected: count,
                got: discards.len(),
            });
        }
        self.hand
            .play_cards(&discards)
            .map_err(|PlayError::NotInPile(card)| CribError::NotInHand(card))
    }

    /// Asks the strategy for a pegging play and removes the card from the
    /// pegging hand.
    ///
    /// Callers must confirm [`Self::can_peg`] first; the strategy is
    /// entitled to assume a legal play exists.
    ///
    /// # Errors
    ///
    /// Returns [`PegError::NotInHand`] when the strategy plays a card the
    /// player does not hold and [`PegError::ExceedsLimit`] when the play
    /// would push the count past the limit.
    pub fn play_pegging_card(&mut self, sequence: &Cards) -> Result<Card, PegError> {
        let total = sequence.value();
        let card = self.strategy.choose_pegging_card(&self.pegging_hand, sequence);
        if !self.pegging_hand.contains(card) {
            return Err(PegError::NotInHand(card));
        }
        if total + u32::from(card.value()) > PEGGING_LIMIT {
            return Err(PegError::ExceedsLimit(card));
        }
        self.pegging_hand
            .play(card)
            .map_err(|PlayError::NotInPile(missing)| PegError::NotInHand(missing))
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("seat", &self.seat)
            .field("is_dealer", &self.is_dealer)
            .field("score", &self.score)
            .field("hand", &self.hand)
            .field("pegging_hand", &self.pegging_hand)
            .finish_non_exhaustive()
    }
}

/// The players of one game, in seat order.
///
/// Seats are assigned from the order of the vector passed to [`new`], and
/// exactly one player holds the deal at any time.
///
/// [`new`]: Self::new
#[derive(Debug)]
pub struct Players {
    players: Vec<Player>,
}

impl Players {
    /// Seats the given players, assigning seats in order and handing the
    /// deal to seat zero.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        let mut players = Self { players };
        for (seat, player) in players.players.iter_mut().enumerate() {
            player.seat = seat;
            player.is_dealer = false;
        }
        if let Some(first) = players.players.first_mut() {
            first.is_dealer = true;
        }
        players
    }

    /// Number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` when no players are seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the player at `seat`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the player at `seat` mutably, or `None` when out of range.
    pub fn get_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    /// Returns an iterator over the players in seat order.
    pub fn iter(&self) -> core::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Returns a mutable iterator over the players in seat order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Player> {
        self.players.iter_mut()
    }

    /// Seat of the player currently holding the deal.
    #[must_use]
    pub fn dealer_seat(&self) -> usize {
        self.players
            .iter()
            .position(|player| player.is_dealer)
            .unwrap_or(0)
    }

    /// Hands the deal to `seat`, taking it from everyone else. Seats out
    /// of range leave the deal where it is.
    pub fn set_dealer(&mut self, seat: usize) {
        if seat >= self.players.len() {
            return;
        }
        for player in &mut self.players {
            player.is_dealer = player.seat == seat;
        }
    }

    /// Passes the deal to the next seat, wrapping around the table.
    pub fn rotate_dealer(&mut self) {
        if self.players.is_empty() {
            return;
        }
        let next = (self.dealer_seat() + 1) % self.players.len();
        self.set_dealer(next);
    }

    /// Returns the cyclic turn order starting left of the dealer.
    #[must_use]
    pub fn turn_order(&self) -> TurnOrder {
        TurnOrder::new(self.dealer_seat() + 1, self.players.len())
    }

    /// Seat of the first player at or past `winning_points`, if any.
    #[must_use]
    pub fn winner(&self, winning_points: u32) -> Option<usize> {
        self.players
            .iter()
            .position(|player| player.score >= winning_points)
    }
}

impl Index<usize> for Players {
    type Output = Player;

    fn index(&self, seat: usize) -> &Player {
        &self.players[seat]
    }
}

impl IndexMut<usize> for Players {
    fn index_mut(&mut self, seat: usize) -> &mut Player {
        &mut self.players[seat]
    }
}

impl<'a> IntoIterator for &'a Players {
    type Item = &'a Player;
    type IntoIter = core::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

impl<'a> IntoIterator for &'a mut Players {
    type Item = &'a mut Player;
    type IntoIter = core::slice::IterMut<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter_mut()
    }
}

/// Cyclic seat order for pegging and scoring.
///
/// The order is a position in an endless clockwise rotation. During
/// pegging it persists across count resets instead of restarting, so play
/// continues from whoever follows the last card of the previous
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    next: usize,
    seats: usize,
}

impl TurnOrder {
    /// Creates a turn order over `seats` seats beginning at `start`.
    /// Starting positions past the table wrap around.
    #[must_use]
    pub const fn new(start: usize, seats: usize) -> Self {
        let seats = if seats == 0 { 1 } else { seats };
        Self {
            next: start % seats,
            seats,
        }
    }

    /// Returns the next seat and advances the rotation.
    pub fn next_seat(&mut self) -> usize {
        let seat = self.next;
        self.next = (self.next + 1) % self.seats;
        seat
    }
}
