//! Card, parsing, and combinatorics integration tests.

use std::collections::BTreeSet;

use cribrs::{Card, Cards, ParseCardError, PlayError, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(text: &str) -> Card {
    text.parse().unwrap()
}

fn cards(text: &str) -> Cards {
    text.parse().unwrap()
}

#[test]
fn card_text_round_trips_for_all_fifty_two() {
    for suit in Suit::suits() {
        for rank in Rank::ranks() {
            let original = Card::new(rank, suit);
            let parsed: Card = original.to_string().parse().unwrap();
            assert_eq!(parsed, original);
        }
    }
}

#[test]
fn card_text_accepts_lowercase() {
    assert_eq!(card("ah"), card("AH"));
    assert_eq!(card("tc").to_string(), "TC");
}

#[test]
fn card_text_rejects_malformed_input() {
    for text in ["", "5", "H", "AAH", "9CC"] {
        assert_eq!(text.parse::<Card>().unwrap_err(), ParseCardError::Length);
    }
    assert_eq!(
        "1D".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownRank('1')
    );
    assert_eq!(
        "H6".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownRank('H')
    );
    assert_eq!(
        "5X".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownSuit('X')
    );
}

#[test]
fn card_values_cap_at_ten() {
    assert_eq!(card("AH").value(), 1);
    assert_eq!(card("9C").value(), 9);
    assert_eq!(card("TD").value(), 10);
    assert_eq!(card("JD").value(), 10);
    assert_eq!(card("QS").value(), 10);
    assert_eq!(card("KC").value(), 10);
}

#[test]
fn card_ordering_is_rank_major() {
    let mut hand = vec![card("KC"), card("2H"), card("TS"), card("AD")];
    hand.sort();
    let ranks: Vec<Rank> = hand.iter().map(|card| card.rank).collect();
    assert_eq!(ranks, [Rank::Ace, Rank::Two, Rank::Ten, Rank::King]);
}

#[test]
fn standard_deck_holds_fifty_two_unique_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = Cards::standard_deck(&mut rng);
    assert_eq!(deck.len(), 52);
    let unique: BTreeSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn cards_text_round_trips() {
    let pile = cards("ah 2d tc");
    assert_eq!(pile.to_string(), "AH 2D TC");
    assert_eq!(cards(""), Cards::empty());
}

#[test]
fn deal_takes_from_the_front() {
    let mut pile = cards("AH 2D 3C");
    assert_eq!(pile.deal(), Some(card("AH")));
    assert_eq!(pile.deal(), Some(card("2D")));
    assert_eq!(pile.len(), 1);
    assert_eq!(Cards::empty().deal(), None);
}

#[test]
fn play_removes_exactly_one_instance() {
    let mut pile = cards("5H 5H 2D");
    pile.play(card("5H")).unwrap();
    assert_eq!(pile.len(), 2);
    assert!(pile.contains(card("5H")));
    pile.play(card("5H")).unwrap();
    assert!(!pile.contains(card("5H")));
    assert_eq!(
        pile.play(card("5H")).unwrap_err(),
        PlayError::NotInPile(card("5H"))
    );
}

#[test]
fn play_cards_keeps_the_pile_whole_on_failure() {
    let mut pile = cards("AH 2D 3C");
    let wanted = cards("AH 9S");
    assert_eq!(
        pile.play_cards(&wanted).unwrap_err(),
        PlayError::NotInPile(card("9S"))
    );
    assert_eq!(pile.len(), 3);
    assert!(pile.contains(card("AH")));

    let taken = pile.play_cards(&cards("3C AH")).unwrap();
    assert_eq!(taken.len(), 2);
    assert_eq!(pile.len(), 1);
}

#[test]
fn play_all_empties_the_pile() {
    let mut pile = cards("AH 5D KC JH");
    assert_eq!(pile.value(), 26);
    let all = pile.play_all();
    assert!(pile.is_empty());
    assert_eq!(all.len(), 4);
}

#[test]
fn play_random_draws_from_the_pile() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut pile = cards("7D");
    assert_eq!(pile.play_random(&mut rng), Some(card("7D")));
    assert_eq!(pile.play_random(&mut rng), None);
}

#[test]
fn flushes_are_maximal_per_suit() {
    let pile = cards("2H 8H JH 3C");
    assert_eq!(pile.flushes(3, 5).len(), 1);
    assert_eq!(pile.flushes(4, 5).len(), 0);
    assert_eq!(pile.flushes(1, 5).len(), 2);
    assert!(pile.contains_flush(3));

    let hearts = cards("2H 4H 8H JH KH");
    assert_eq!(hearts.flushes(5, 5).len(), 1);
    // The five-card flush does not also count as its four-card subsets.
    assert_eq!(hearts.flushes(4, 4).len(), 0);
}

#[test]
fn straights_expand_rank_duplicates() {
    let pile = cards("5S 5D 6H 7C");
    let straights = pile.straights(3, 5);
    assert_eq!(straights.len(), 2);
    assert!(straights.iter().all(|run| run.len() == 3));
    assert_eq!(pile.straights(4, 5).len(), 0);
}

#[test]
fn straights_split_around_rank_gaps() {
    let pile = cards("AD 2S 3H JH TS QD");
    let straights = pile.straights(3, 5);
    assert_eq!(straights.len(), 2);
    assert!(straights.iter().all(|run| run.len() == 3));
}

#[test]
fn straights_are_maximal_runs_only() {
    let pile = cards("7C 8D 9H TC");
    let straights = pile.straights(3, 4);
    assert_eq!(straights.len(), 1);
    assert_eq!(straights[0].len(), 4);
    // The four-card run does not also count as runs of three.
    assert_eq!(pile.straights(3, 3).len(), 0);
    assert!(pile.contains_straight(4));
    assert!(!pile.contains_straight(3));
}

#[test]
fn straights_never_wrap_from_king_to_ace() {
    let pile = cards("QH KH AH");
    assert_eq!(pile.straights(3, 5).len(), 0);
}
