//! The pegging phase of a deal.

use log::debug;

use crate::cards::Cards;
use crate::error::GameError;
use crate::score::score_pegging_play;

use super::Game;

impl Game {
    /// Runs the pegging phase.
    ///
    /// Each player pegs from a copy of their hand, so the hands themselves
    /// survive for the show. Starting left of the dealer, players take
    /// turns playing one card onto a shared sequence whose count may not
    /// pass [`PEGGING_LIMIT`]; whoever cannot stay under the limit is
    /// skipped. When nobody can play, the last card scores the go point
    /// (or two for hitting the limit exactly), the sequence resets, and
    /// play continues from the next seat in rotation until every card has
    /// been played. Every play is scored immediately and the phase ends
    /// the moment someone reaches the winning score.
    ///
    /// # Errors
    ///
    /// Propagates [`PegError`](crate::PegError) when a strategy violates
    /// the pegging contract.
    ///
    /// [`PEGGING_LIMIT`]: crate::PEGGING_LIMIT
    pub fn play_pegging(&mut self) -> Result<(), GameError> {
        for player in self.players.iter_mut() {
            player.pegging_hand = player.hand.clone();
        }
        let mut order = self.players.turn_order();

        while self
            .players
            .iter()
            .any(|player| !player.pegging_hand.is_empty())
        {
            let mut sequence = Cards::empty();
            while self.players.iter().any(|player| player.can_peg(&sequence)) {
                let seat = order.next_seat();
                if !self.players[seat].can_peg(&sequence) {
                    continue;
                }
                let card = self.players[seat].play_pegging_card(&sequence)?;
                sequence.push(card);
                let last_card = !self.players.iter().any(|player| player.can_peg(&sequence));
                let points = score_pegging_play(&sequence, last_card).total();
                let player = &mut self.players[seat];
                player.score += points;
                debug!(
                    "{} pegs {card} for {points} ({sequence}, count {})",
                    player.name,
                    sequence.value()
                );
                if self.winner().is_some() {
                    debug!("Pegging ends at the winning score");
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}
