//! Ordered card collections and card-set combinatorics.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::{ParseCardError, PlayError};

/// An ordered, mutable collection of cards.
///
/// Decks, piles, hands, and pegging sequences are all `Cards`. The
/// collection is a multiset: two copies of the same card may coexist, and
/// removal takes out exactly one instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cards {
    cards: Vec<Card>,
}

impl Cards {
    /// Creates an empty collection.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a shuffled standard 52-card deck.
    pub fn standard_deck<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Suit::suits()
            .flat_map(|suit| Rank::ranks().map(move |rank| Card::new(rank, suit)))
            .collect();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Number of cards in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` when the collection holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards as a slice, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards, oldest first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns `true` when at least one instance of `card` is present.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Adds a card to the back of the collection.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at the front, or `None` when empty.
    pub fn deal(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Removes exactly one instance of `card` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::NotInPile`] when no instance of `card` is
    /// present. The collection is unchanged in that case.
    pub fn play(&mut self, card: Card) -> Result<Card, PlayError> {
        let position = self
            .cards
            .iter()
            .position(|held| *held == card)
            .ok_or(PlayError::NotInPile(card))?;
        Ok(self.cards.remove(position))
    }

    /// Removes one instance of each requested card and returns them.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::NotInPile`] when a requested card (counting
    /// multiplicity) is missing. Cards removed before the failure rejoin
    /// the collection, so no card is lost.
    pub fn play_cards(&mut self, cards: &Self) -> Result<Self, PlayError> {
        let mut played = Self::empty();
        for &card in cards {
            match self.play(card) {
                Ok(card) => played.push(card),
                Err(missing) => {
                    self.cards.append(&mut played.cards);
                    return Err(missing);
                }
            }
        }
        Ok(played)
    }

    /// Removes and returns one card chosen uniformly at random, or `None`
    /// when empty.
    pub fn play_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let position = rng.random_range(0..self.cards.len());
        Some(self.cards.remove(position))
    }

    /// Removes and returns every card, leaving the collection empty.
    pub fn play_all(&mut self) -> Self {
        Self {
            cards: mem::take(&mut self.cards),
        }
    }

    /// Shuffles the collection in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Sums the counting values of all cards.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.cards.iter().map(|card| u32::from(card.value())).sum()
    }

    /// Finds every flush whose length lies within `min_len..=max_len`.
    ///
    /// A flush here is all held cards of one suit, so only maximal flushes
    /// are returned: five hearts yield one five-card flush, not the
    /// five four-card subsets.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::Cards;
    ///
    /// let cards: Cards = "2H 8H JH 3C".parse().unwrap();
    /// assert_eq!(cards.flushes(3, 5).len(), 1);
    /// assert_eq!(cards.flushes(4, 5).len(), 0);
    /// ```
    #[must_use]
    pub fn flushes(&self, min_len: usize, max_len: usize) -> Vec<Self> {
        let mut found = Vec::new();
        for suit in Suit::suits() {
            let matching: Vec<Card> = self
                .cards
                .iter()
                .copied()
                .filter(|card| card.suit == suit)
                .collect();
            if (min_len..=max_len).contains(&matching.len()) {
                found.push(Self { cards: matching });
            }
        }
        found
    }

    /// Returns `true` when the collection holds a flush of exactly `len`
    /// cards.
    #[must_use]
    pub fn contains_flush(&self, len: usize) -> bool {
        !self.flushes(len, len).is_empty()
    }

    /// Finds every straight whose length lies within `min_len..=max_len`.
    ///
    /// Cards are grouped by rank and the distinct ranks are split into
    /// maximal runs of consecutive values. Only whole runs are kept, so a
    /// run of four does not also count as two runs of three. Each run is
    /// then expanded into one straight per way of picking a card from each
    /// rank group: a pair inside a run doubles the straights it yields.
    /// Ace is always low and straights never wrap around from King to Ace.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::Cards;
    ///
    /// let cards: Cards = "5S 5D 6H 7C".parse().unwrap();
    /// assert_eq!(cards.straights(3, 5).len(), 2);
    /// assert_eq!(cards.straights(4, 5).len(), 0);
    /// ```
    #[must_use]
    pub fn straights(&self, min_len: usize, max_len: usize) -> Vec<Self> {
        let mut by_rank: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
        for &card in &self.cards {
            by_rank.entry(card.rank).or_default().push(card);
        }

        // Split the ascending distinct ranks into maximal consecutive runs.
        let mut runs: Vec<Vec<Rank>> = Vec::new();
        let mut current: Vec<Rank> = Vec::new();
        for &rank in by_rank.keys() {
            match current.last() {
                Some(&previous) if rank as u8 == previous as u8 + 1 => current.push(rank),
                Some(_) => {
                    let mut next = Vec::new();
                    next.push(rank);
                    runs.push(mem::replace(&mut current, next));
                }
                None => current.push(rank),
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }

        let mut found = Vec::new();
        for run in runs {
            if !(min_len..=max_len).contains(&run.len()) {
                continue;
            }
            // One straight per way of picking a card from each rank group.
            let mut combos: Vec<Vec<Card>> = Vec::new();
            combos.push(Vec::new());
            for rank in &run {
                let group = &by_rank[rank];
                let mut extended = Vec::with_capacity(combos.len() * group.len());
                for combo in &combos {
                    for &card in group {
                        let mut next = combo.clone();
                        next.push(card);
                        extended.push(next);
                    }
                }
                combos = extended;
            }
            found.extend(combos.into_iter().map(|cards| Self { cards }));
        }
        found
    }

    /// Returns `true` when the collection holds a straight of exactly
    /// `len` cards.
    #[must_use]
    pub fn contains_straight(&self, len: usize) -> bool {
        !self.straights(len, len).is_empty()
    }
}

impl fmt::Display for Cards {
    /// Formats the cards as space-separated card text, for example
    /// `"AH 2D TC"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Cards {
    type Err = ParseCardError;

    /// Parses whitespace-separated card text, for example `"AH 2D TC"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl From<Vec<Card>> for Cards {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Cards {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Cards {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Cards {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cards {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
