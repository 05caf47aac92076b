//! Interactive terminal game against the engine.
//!
//! The human plays White from the standard starting position; the engine
//! answers as Black with a fixed-depth search. Moves are entered as
//! 4-character coordinate text ("e2e4"). Malformed or illegal input is
//! reported and re-prompted without touching the board.

use anyhow::Result;
use clap::Parser;
use patzer_core::{parse_move_text, Color};
use patzer_engine::{find_best_move, find_move, generate_moves, Position, SearchError};
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Play chess against a fixed-depth material-counting engine.
#[derive(Parser)]
#[command(name = "patzer")]
#[command(about = "Play chess against a fixed-depth material-counting engine")]
struct Args {
    /// Search depth in plies; deeper is stronger but slower
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u8).range(1..=8))]
    depth: u8,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut position = Position::startpos();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match position.side_to_move() {
            Color::White => {
                if generate_moves(&position, Color::White).is_empty() {
                    println!("White has no moves - game over.");
                    break;
                }

                println!();
                println!("{}", position);
                println!();
                print!("Your move (e.g. e2e4, or 'quit'): ");
                io::stdout().flush()?;

                let line = match lines.next() {
                    Some(line) => line?,
                    None => break, // EOF ends the game
                };
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if input == "quit" {
                    break;
                }

                let (from, to) = match parse_move_text(input) {
                    Ok(squares) => squares,
                    Err(e) => {
                        println!("Error: {}", e);
                        continue;
                    }
                };

                match find_move(&position, Color::White, from, to) {
                    Some(m) => {
                        position.apply(m);
                    }
                    None => {
                        println!("Illegal move, try again.");
                    }
                }
            }
            Color::Black => {
                println!("Engine is thinking...");
                let started = Instant::now();

                match find_best_move(&mut position, args.depth) {
                    Ok(result) => {
                        tracing::info!(
                            "depth {} search: score {} after {} nodes in {}ms",
                            args.depth,
                            result.score,
                            result.nodes,
                            started.elapsed().as_millis()
                        );
                        position.apply(result.best_move);
                        println!("Engine plays {}.", result.best_move);
                    }
                    Err(SearchError::NoMoveAvailable(side)) => {
                        println!("{} has no moves - game over.", side);
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}
