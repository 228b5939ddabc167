mod board;
mod minimax;
mod session;

use std::io::{self, Write};

use anyhow::bail;
use log::info;

use crate::board::{Mark, Outcome, GRID_SIZE};
use crate::minimax::Minimax;
use crate::session::Session;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let engine = Minimax::default();
    let mut session = Session::new();
    let stdin = io::stdin();

    println!("You are X, the computer is O.");

    loop {
        println!("{}", session.board());

        match session.status() {
            Outcome::Ongoing => {}
            outcome => {
                println!("{}", outcome_message(outcome));
                if !ask_new_game(&stdin)? {
                    break;
                }
                session.new_game();
                continue;
            }
        }

        match session.current_player() {
            Mark::X => {
                let (row, col) = read_move(&stdin)?;
                session.cell_selected(row, col);
            }
            Mark::O => {
                if let Some((row, col)) = engine.select_move(session.board(), Mark::O) {
                    info!("computer plays ({}, {})", row, col);
                    session.cell_selected(row, col);
                }
            }
        }
    }

    Ok(())
}

fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::XWins => "X wins!",
        Outcome::OWins => "Computer wins!",
        _ => "Draw!",
    }
}

// Keep prompting until the input parses as a move on the grid
fn read_move(stdin: &io::Stdin) -> anyhow::Result<(usize, usize)> {
    loop {
        print!("your move (row col): ");
        io::stdout().flush()?;
        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            bail!("stdin closed");
        }
        match parse_move(&input) {
            Some(position) => return Ok(position),
            None => println!("enter two numbers between 0 and {}", GRID_SIZE - 1),
        }
    }
}

fn parse_move(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row >= GRID_SIZE || col >= GRID_SIZE {
        return None;
    }
    Some((row, col))
}

fn ask_new_game(stdin: &io::Stdin) -> anyhow::Result<bool> {
    print!("play again? [y/N] ");
    io::stdout().flush()?;
    let mut input = String::new();
    if stdin.read_line(&mut input)? == 0 {
        return Ok(false);
    }
    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}
