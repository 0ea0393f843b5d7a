//! Command-line cribbage: play a full game between bots, or take a seat
//! yourself with `--interactive`.

use std::io::{self, Write};

use clap::Parser;
use log::{LevelFilter, error};

use cribrs::{
    Card, Cards, Game, GameOptions, PEGGING_LIMIT, Player, Players, RandomStrategy, Strategy,
};

const BOT_NAMES: [&str; 4] = ["Alice", "Bob", "Charlie", "Dave"];

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players at the table.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=4))]
    players: u8,
    /// Seed for the shuffle and the bot strategies.
    #[clap(long, short, default_value_t = 42)]
    seed: u64,
    /// Points needed to win.
    #[clap(long, default_value_t = 121)]
    winning_points: u32,
    /// Take seat 0 yourself instead of watching bots.
    #[clap(long, short)]
    interactive: bool,
}

fn main() {
    let cli = Cli::parse();

    // Debug logging doubles as the play-by-play commentary.
    env_logger::builder()
        .filter_level(if cli.interactive {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let mut seated = Vec::new();
    for seat in 0..usize::from(cli.players) {
        let player = if cli.interactive && seat == 0 {
            Player::new("You", Box::new(ConsoleStrategy))
        } else {
            Player::new(
                BOT_NAMES[seat],
                Box::new(RandomStrategy::new(cli.seed.wrapping_add(seat as u64))),
            )
        };
        seated.push(player);
    }

    let options = GameOptions::default().with_winning_points(cli.winning_points);
    let mut game = match Game::new(Players::new(seated), options, cli.seed) {
        Ok(game) => game,
        Err(err) => {
            error!("{err}");
            return;
        }
    };

    match game.play() {
        Ok(result) => {
            println!(
                "\n{} wins with {} points after {} deals",
                result.winner_name, result.scores[result.winner_seat], result.deals
            );
            for (seat, score) in result.scores.iter().enumerate() {
                println!("  {}: {score}", game.players[seat].name);
            }
        }
        Err(err) => error!("{err}"),
    }
}

/// Strategy that asks the terminal for every decision. If stdin closes
/// mid-game it stops prompting and plays the first legal choice instead.
struct ConsoleStrategy;

impl Strategy for ConsoleStrategy {
    fn choose_crib_discards(&mut self, hand: &Cards, count: usize) -> Cards {
        println!("\nYour hand: {hand}");
        loop {
            let Some(input) =
                prompt_line(&format!("Give {count} card(s) to the crib (e.g. 5H JD): "))
            else {
                let picks = auto_discards(hand, count);
                println!("(input closed, sending {picks} to the crib)");
                return picks;
            };
            match parse_discards(hand, count, &input) {
                Ok(picks) => return picks,
                Err(problem) => println!("{problem}"),
            }
        }
    }

    fn choose_pegging_card(&mut self, hand: &Cards, sequence: &Cards) -> Card {
        let total = sequence.value();
        if sequence.is_empty() {
            println!("\nNew sequence. Your cards: {hand}");
        } else {
            println!("\nSequence: {sequence} (count {total}). Your cards: {hand}");
        }
        loop {
            let Some(input) = prompt_line("Card to play: ") else {
                let card = auto_play(hand, total);
                println!("(input closed, playing {card})");
                return card;
            };
            match parse_play(hand, total, &input) {
                Ok(card) => return card,
                Err(problem) => println!("{problem}"),
            }
        }
    }
}

/// Reads one trimmed line, or `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input).ok()?;
    if bytes == 0 {
        return None;
    }
    Some(input.trim().to_string())
}

fn parse_discards(hand: &Cards, count: usize, input: &str) -> Result<Cards, String> {
    let picks: Cards = input.parse().map_err(|err| format!("{err}"))?;
    if picks.len() != count {
        return Err(format!("Pick exactly {count} card(s)."));
    }
    if hand.clone().play_cards(&picks).is_err() {
        return Err("Those cards are not all in your hand.".to_string());
    }
    Ok(picks)
}

fn parse_play(hand: &Cards, total: u32, input: &str) -> Result<Card, String> {
    let card: Card = input.parse().map_err(|err| format!("{err}"))?;
    if !hand.contains(card) {
        return Err(format!("{card} is not in your hand."));
    }
    if total + u32::from(card.value()) > PEGGING_LIMIT {
        return Err(format!("{card} would take the count past {PEGGING_LIMIT}."));
    }
    Ok(card)
}

fn auto_discards(hand: &Cards, count: usize) -> Cards {
    hand.iter().copied().take(count).collect()
}

fn auto_play(hand: &Cards, total: u32) -> Card {
    hand.iter()
        .copied()
        .find(|card| total + u32::from(card.value()) <= PEGGING_LIMIT)
        .expect("the pegging phase only asks players holding a playable card")
}
