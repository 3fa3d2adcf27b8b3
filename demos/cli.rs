//! CLI matching game example.
//!
//! Run with `cargo run --example cli_matchdeck -- --packs 2 --seed 7`.
//! Set `RUST_LOG=debug` to also see the engine's own log lines.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use matchdeck::{Game, GameOptions, Hand, TurnAction, TurnError, TurnReport, parse_pack_count};

#[derive(Parser)]
#[command(author, version, about = "Two-player rank-or-suit matching game", long_about = None)]
struct Args {
    /// Number of packs to shuffle together (1-10). Asked for when omitted.
    #[arg(long)]
    packs: Option<u8>,
    /// Seed for the shuffles. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many turns.
    #[arg(long)]
    turn_limit: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let packs = match args.packs {
        Some(packs) => packs,
        None => match prompt_packs() {
            Some(packs) => packs,
            None => return,
        },
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = GameOptions::default()
        .with_packs(packs)
        .with_turn_limit(args.turn_limit);
    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Options error: {err}");
            return;
        }
    };

    if let Err(err) = game.deal() {
        println!("Deal error: {err}");
        return;
    }

    for (label, hand) in [("Player 1", &game.hands[0]), ("Player 2", &game.hands[1])] {
        println!("{label}'s cards:");
        print_hand(hand);
        println!();
    }

    println!("Game started!");

    while game.outcome().is_none() {
        if options
            .turn_limit
            .is_some_and(|limit| game.turns_taken() >= limit)
        {
            println!("\nTurn limit reached.");
            break;
        }

        match game.take_turn() {
            Ok(report) => print_turn(&game, &report),
            Err(TurnError::Stalled) => {
                println!("\nNo card is left to reveal or draw. The game cannot continue.");
                break;
            }
            Err(err) => {
                println!("\nTurn error: {err}");
                break;
            }
        }
    }

    println!("\nGame over!");
    if let Some(outcome) = game.outcome() {
        println!(
            "{} has no cards left after {} turns.",
            outcome.emptied, outcome.turns
        );
    }
}

fn prompt_packs() -> Option<u8> {
    loop {
        print!("Enter the number of packs of cards from one to ten: ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        match parse_pack_count(&input) {
            Ok(packs) => return Some(packs),
            Err(err) => println!("{err}"),
        }
    }
}

fn print_turn(game: &Game, report: &TurnReport) {
    let player = report.player;
    if report.revealed {
        println!("\n{player}'s turn - Top card: {}", report.top_card);
    } else {
        println!(
            "\n{player}'s turn - Top card: {} (last played)",
            report.top_card
        );
    }

    match report.action {
        TurnAction::Played(card) => println!("{player} played card {card}"),
        TurnAction::Drew(_) => println!("{player} picks a card from the hidden deck"),
    }

    println!("\n{player}'s cards:");
    print_hand(game.hand(player));

    if report.reshuffled {
        println!("\nReshuffling the deck!");
    }
}

fn print_hand(hand: &Hand) {
    if hand.is_empty() {
        println!("(no cards)");
    } else {
        print!("{hand}");
    }
}
