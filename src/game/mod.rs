//! Game engine and round flow.

use alloc::vec::Vec;

use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank};
use crate::cards::Cards;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::player::Players;
use crate::result::GameResult;
use crate::score::score_hand;

mod pegging;

/// A cribbage game engine that manages the piles, the crib, and the flow
/// of deals.
///
/// The game owns the players and all card piles. Use [`GameOptions`] to
/// configure the winning score and the deal cap, and [`play`] to run deals
/// until someone wins.
///
/// [`play`]: Self::play
#[derive(Debug)]
pub struct Game {
    /// The seated players.
    pub players: Players,
    /// Game options.
    pub options: GameOptions,
    /// Face-down cards waiting to be dealt.
    pub deal_pile: Cards,
    /// Used cards waiting to be shuffled back into the deal pile.
    pub discard_pile: Cards,
    /// The dealer's bonus hand, collected from every player's discards.
    pub crib: Cards,
    /// The shared starter card for the current deal, once revealed.
    pub starter: Option<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed. The deal pile is shuffled
    /// and the first dealer drawn at random.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Game, GameOptions, Player, Players, RandomStrategy};
    ///
    /// let players = Players::new(vec![
    ///     Player::new("Alice", Box::new(RandomStrategy::new(1))),
    ///     Player::new("Bob", Box::new(RandomStrategy::new(2))),
    /// ]);
    /// let game = Game::new(players, GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.deal_pile.len(), 52);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerCount`] unless two to four
    /// players are seated.
    pub fn new(players: Players, options: GameOptions, seed: u64) -> Result<Self, GameError> {
        if !(2..=4).contains(&players.len()) {
            return Err(GameError::InvalidPlayerCount(players.len()));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deal_pile = Cards::standard_deck(&mut rng);
        let mut players = players;
        players.set_dealer(rng.random_range(0..players.len()));

        Ok(Self {
            players,
            options,
            deal_pile,
            discard_pile: Cards::empty(),
            crib: Cards::empty(),
            starter: None,
            rng,
        })
    }

    /// Number of cards dealt to each player: six heads-up, five with
    /// three or four players.
    #[must_use]
    pub fn cards_per_player(&self) -> usize {
        if self.players.len() == 2 { 6 } else { 5 }
    }

    /// Seat of the first player at or past the winning score, if any.
    #[must_use]
    pub fn winner(&self) -> Option<usize> {
        self.players.winner(self.options.winning_points)
    }

    /// Moves the shuffled discard pile under the deal pile when fewer
    /// than `required` cards remain to be dealt.
    fn replenish_deal_pile(&mut self, required: usize) {
        if self.deal_pile.len() < required {
            debug!(
                "Replenishing the deal pile ({} left, {required} required)",
                self.deal_pile.len()
            );
            self.discard_pile.shuffle(&mut self.rng);
            self.deal_pile.extend(self.discard_pile.play_all());
        }
    }

    /// Draws one card, replenishing the deal pile first if necessary.
    fn draw(&mut self) -> Result<Card, GameError> {
        self.replenish_deal_pile(1);
        self.deal_pile.deal().ok_or(GameError::OutOfCards)
    }

    /// Deals every player their hand for the coming deal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfCards`] when the deal and discard piles
    /// together cannot cover the hands.
    pub fn deal_cards(&mut self) -> Result<(), GameError> {
        let per_player = self.cards_per_player();
        self.replenish_deal_pile(self.players.len() * per_player);
        for player in self.players.iter_mut() {
            for _ in 0..per_player {
                let card = self.deal_pile.deal().ok_or(GameError::OutOfCards)?;
                player.hand.push(card);
            }
        }
        Ok(())
    }

    /// Collects the crib: two cards from each player heads-up, otherwise
    /// one each, topped up from the deal pile in three-player games so the
    /// crib always holds four cards.
    ///
    /// # Errors
    ///
    /// Returns a [`CribError`](crate::CribError) when a strategy violates
    /// the discard contract, or [`GameError::OutOfCards`] when the
    /// three-player top-up card cannot be drawn.
    pub fn collect_crib(&mut self) -> Result<(), GameError> {
        let owed = if self.players.len() == 2 { 2 } else { 1 };
        for player in self.players.iter_mut() {
            let discards = player.give_cards_to_crib(owed)?;
            self.crib.extend(discards);
        }
        if self.players.len() == 3 {
            let top_up = self.draw()?;
            self.crib.push(top_up);
        }
        Ok(())
    }

    /// Reveals the starter card from the deal pile. A Jack scores two for
    /// the dealer immediately ("his heels").
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfCards`] when no card can be drawn.
    pub fn reveal_starter(&mut self) -> Result<(), GameError> {
        if let Some(old) = self.starter.take() {
            self.discard_pile.push(old);
        }
        self.replenish_deal_pile(1);
        let starter = self
            .deal_pile
            .play_random(&mut self.rng)
            .ok_or(GameError::OutOfCards)?;
        debug!("Starter card is {starter}");
        if starter.rank == Rank::Jack {
            let dealer_seat = self.players.dealer_seat();
            if let Some(dealer) = self.players.get_mut(dealer_seat) {
                dealer.score += 2;
                debug!("{} scores 2 for his heels", dealer.name);
            }
        }
        self.starter = Some(starter);
        Ok(())
    }

    /// Scores every hand against the starter, beginning left of the
    /// dealer. Scoring stops as soon as a player reaches the winning
    /// score, so a later hand cannot overtake the first to peg out.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoStarter`] when the starter has not been
    /// revealed.
    pub fn score_hands(&mut self) -> Result<(), GameError> {
        let starter = self.starter.ok_or(GameError::NoStarter)?;
        let mut order = self.players.turn_order();
        for _ in 0..self.players.len() {
            let seat = order.next_seat();
            if let Some(player) = self.players.get_mut(seat) {
                let score = score_hand(&player.hand, starter, false);
                player.score += score.total();
                debug!(
                    "{} shows {} with {starter} for {} points",
                    player.name,
                    player.hand,
                    score.total()
                );
            }
            if self.winner().is_some() {
                break;
            }
        }
        Ok(())
    }

    /// Scores the crib for the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoStarter`] when the starter has not been
    /// revealed.
    pub fn score_crib(&mut self) -> Result<(), GameError> {
        let starter = self.starter.ok_or(GameError::NoStarter)?;
        let score = score_hand(&self.crib, starter, true);
        let dealer_seat = self.players.dealer_seat();
        if let Some(dealer) = self.players.get_mut(dealer_seat) {
            dealer.score += score.total();
            debug!(
                "{} takes {} points from the crib {}",
                dealer.name,
                score.total(),
                self.crib
            );
        }
        Ok(())
    }

    /// Moves every hand, the crib, and the starter to the discard pile,
    /// readying the table for the next deal.
    pub fn discard_round(&mut self) {
        for player in self.players.iter_mut() {
            self.discard_pile.extend(player.hand.play_all());
            // The pegging hand holds copies of the hand, so it is cleared
            // rather than discarded.
            player.pegging_hand.play_all();
        }
        self.discard_pile.extend(self.crib.play_all());
        if let Some(starter) = self.starter.take() {
            self.discard_pile.push(starter);
        }
    }

    /// Passes the deal to the next seat.
    pub fn rotate_dealer(&mut self) {
        self.players.rotate_dealer();
    }

    /// Plays one complete deal: deal, crib, starter, pegging, and the
    /// show. Returns the winning seat as soon as any phase produces one,
    /// leaving the table as it stood; otherwise cleans up and rotates the
    /// deal.
    ///
    /// # Errors
    ///
    /// Propagates any phase error, such as a strategy violating its
    /// contract or the piles running dry.
    pub fn play_round(&mut self) -> Result<Option<usize>, GameError> {
        self.deal_cards()?;
        self.collect_crib()?;
        self.reveal_starter()?;
        if let Some(seat) = self.winner() {
            return Ok(Some(seat));
        }
        self.play_pegging()?;
        if let Some(seat) = self.winner() {
            return Ok(Some(seat));
        }
        self.score_hands()?;
        if let Some(seat) = self.winner() {
            return Ok(Some(seat));
        }
        self.score_crib()?;
        if let Some(seat) = self.winner() {
            return Ok(Some(seat));
        }
        self.discard_round();
        self.rotate_dealer();
        Ok(None)
    }

    /// Plays deals until a player reaches the winning score.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DealLimitExceeded`] when the deal cap passes
    /// without a winner, and propagates any error from within a deal.
    pub fn play(&mut self) -> Result<GameResult, GameError> {
        for deal in 1..=self.options.deal_limit {
            let scores: Vec<u32> = self.players.iter().map(|player| player.score).collect();
            info!("Starting deal {deal}; scores {scores:?}");
            if let Some(seat) = self.play_round()? {
                let winner = &self.players[seat];
                info!(
                    "{} wins with {} points after {deal} deals",
                    winner.name, winner.score
                );
                return Ok(GameResult {
                    winner_seat: seat,
                    winner_name: winner.name.clone(),
                    scores: self.players.iter().map(|player| player.score).collect(),
                    deals: deal,
                });
            }
        }
        Err(GameError::DealLimitExceeded(self.options.deal_limit))
    }
}
