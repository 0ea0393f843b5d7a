//! Show scoring and pegging-play scoring.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::cards::Cards;
use crate::result::{HandScore, PegScore};

/// Count at which a pegging sequence must stop.
pub const PEGGING_LIMIT: u32 = 31;

/// Scores a four-card hand against the starter card.
///
/// The hand and starter are scored together as five cards for fifteens,
/// pairs, runs, and five-card flushes. A four-card flush in the hand alone
/// counts only outside the crib, and the Jack of the starter's suit scores
/// one for nobs.
///
/// # Example
///
/// ```
/// use cribrs::{Cards, score_hand};
///
/// let hand: Cards = "5H 5D 5S JC".parse().unwrap();
/// let starter = "5C".parse().unwrap();
/// assert_eq!(score_hand(&hand, starter, false).total(), 29);
/// ```
#[must_use]
pub fn score_hand(hand: &Cards, starter: Card, is_crib: bool) -> HandScore {
    let mut effective = hand.clone();
    effective.push(starter);

    HandScore {
        fifteens: score_fifteens(&effective),
        pairs: score_pairs(&effective),
        flush: score_flush(hand, &effective, is_crib),
        runs: score_runs(&effective),
        nobs: score_nobs(hand, starter),
    }
}

/// Two points per subset of two or more cards whose values sum to fifteen.
fn score_fifteens(cards: &Cards) -> u32 {
    let values: Vec<u32> = cards.iter().map(|card| u32::from(card.value())).collect();
    let mut points = 0;
    for mask in 1u32..(1 << values.len()) {
        if mask.count_ones() < 2 {
            continue;
        }
        let sum: u32 = values
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, value)| value)
            .sum();
        if sum == 15 {
            points += 2;
        }
    }
    points
}

/// Two points per pair, so a triple scores six and a quad twelve.
fn score_pairs(cards: &Cards) -> u32 {
    let cards = cards.cards();
    let mut points = 0;
    for (i, first) in cards.iter().enumerate() {
        for second in &cards[i + 1..] {
            if first.rank == second.rank {
                points += 2;
            }
        }
    }
    points
}

fn score_flush(hand: &Cards, effective: &Cards, is_crib: bool) -> u32 {
    if effective.contains_flush(5) {
        5
    } else if !is_crib && hand.contains_flush(4) {
        4
    } else {
        0
    }
}

/// One point per card in every maximal run of three, four, or five.
fn score_runs(cards: &Cards) -> u32 {
    cards.straights(3, 5).iter().map(|run| run.len() as u32).sum()
}

fn score_nobs(hand: &Cards, starter: Card) -> u32 {
    hand.iter()
        .filter(|card| card.rank == Rank::Jack && card.suit == starter.suit)
        .count() as u32
}

/// Scores the newest card of a pegging sequence.
///
/// `sequence` holds the cards played since the count last reset, newest
/// card last. Pairs and runs only count when formed by an unbroken block
/// of trailing cards, and a run of four does not also score as a run of
/// three. Reaching a count of exactly fifteen or thirty-one scores two;
/// `last_card` awards the go point when the sequence ends short of
/// thirty-one.
///
/// # Example
///
/// ```
/// use cribrs::{Cards, score_pegging_play};
///
/// let sequence: Cards = "2C 4H 5D 6S".parse().unwrap();
/// let score = score_pegging_play(&sequence, false);
/// assert_eq!(score.runs, 3);
/// assert_eq!(score.total(), 3);
/// ```
#[must_use]
pub fn score_pegging_play(sequence: &Cards, last_card: bool) -> PegScore {
    let total = sequence.value();
    PegScore {
        pairs: pegging_pairs(sequence),
        runs: pegging_runs(sequence),
        fifteen: if total == 15 { 2 } else { 0 },
        thirty_one: if total == PEGGING_LIMIT { 2 } else { 0 },
        last_card: u32::from(last_card && total != PEGGING_LIMIT),
    }
}

/// Counts the trailing block of equal-rank cards: a pair scores two, a
/// triple six, a quad twelve.
fn pegging_pairs(sequence: &Cards) -> u32 {
    let cards = sequence.cards();
    let Some(newest) = cards.last() else {
        return 0;
    };
    let matched = cards
        .iter()
        .rev()
        .take_while(|card| card.rank == newest.rank)
        .count() as u32;
    if matched >= 2 { matched * (matched - 1) } else { 0 }
}

/// Length of the longest trailing window that forms a run, in any order.
fn pegging_runs(sequence: &Cards) -> u32 {
    let cards = sequence.cards();
    for len in (3..=cards.len()).rev() {
        let window: Cards = cards[cards.len() - len..].iter().copied().collect();
        if window.contains_straight(len) {
            return len as u32;
        }
    }
    0
}
