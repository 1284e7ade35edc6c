//! Console host for the noughts game core
//!
//! Plays the role the original UI layer fills in a graphical host: it maps
//! input to cell indices, renders the board, simulates the opponent's
//! thinking pause, and turns game events into console cues. All game rules
//! live in the library.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use noughts::{Cell, GameEvent, GameObserver, MoveOutcome, Seat, Session};
use rand::Rng;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Play tic-tac-toe against the win/block opponent", long_about = None)]
struct Cli {
    /// Display name for the human player
    #[arg(long, default_value = "Player 1")]
    name: String,

    /// Display name for the automated opponent
    #[arg(long, default_value = "AI")]
    opponent: String,

    /// RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum thinking pause in milliseconds (0 disables the pause)
    #[arg(long, default_value_t = 1500)]
    delay: u64,
}

/// Prints move cues, standing in for the original select/win/draw sounds
struct ConsoleCues;

impl GameObserver for ConsoleCues {
    fn on_event(&mut self, event: &GameEvent) -> noughts::Result<()> {
        if let GameEvent::MoveApplied { mark, position, .. } = event {
            writeln!(io::stdout(), "  {mark} -> cell {position}")?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut session = match cli.seed {
        Some(seed) => Session::with_seed(seed),
        None => Session::new(),
    };
    session.add_observer(Box::new(ConsoleCues));

    let mut rng = rand::rng();
    loop {
        session.start_new_game(&cli.name, &cli.opponent)?;
        println!(
            "New game: {} (O) vs {} (X). {} moves first.",
            cli.opponent, cli.name, cli.opponent
        );
        play_one_game(&mut session, &mut rng, cli.delay)?;

        if !prompt_yes_no("Play again? [y/N] ")? {
            break;
        }
    }

    Ok(())
}

fn play_one_game(session: &mut Session, rng: &mut impl Rng, delay: u64) -> Result<()> {
    while !session.is_game_over() {
        let outcome = match session.active_seat() {
            Seat::Machine => {
                let ticket = session.turn_ticket();
                if delay > 0 {
                    let pause = rng.random_range(delay / 2..=delay);
                    thread::sleep(Duration::from_millis(pause));
                }
                let (_, outcome) = session.play_automated(ticket)?;
                outcome
            }
            Seat::Human => {
                print_board(session);
                let position = prompt_cell(session)?;
                match session.request_move(Seat::Human, position) {
                    Ok(outcome) => outcome,
                    Err(err) if err.is_invalid_move() => {
                        println!("{err}");
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        };

        match outcome {
            MoveOutcome::Continued { next } => {
                println!("{}'s turn...", session.player(next).name());
            }
            MoveOutcome::Won { winner, line } => {
                print_board(session);
                println!(
                    "{} Wins!! (cells {}, {}, {})",
                    session.player(winner).name(),
                    line[0],
                    line[1],
                    line[2]
                );
            }
            MoveOutcome::Draw => {
                print_board(session);
                println!("Draw!!");
            }
        }
    }

    Ok(())
}

/// Render the board with cell indices in the empty cells
fn print_board(session: &Session) {
    let cells = session.board_snapshot();
    println!();
    for row in 0..3 {
        let rendered: Vec<String> = (0..3)
            .map(|col| {
                let idx = row * 3 + col;
                match cells[idx] {
                    Cell::Empty => ((b'0' + idx as u8) as char).to_string(),
                    cell => cell.to_char().to_string(),
                }
            })
            .collect();
        println!("  {}", rendered.join(" "));
    }
    println!();
}

fn prompt_cell(session: &Session) -> Result<usize> {
    loop {
        print!("{}: pick a cell (0-8): ", session.player(Seat::Human).name());
        if let Some(input) = read_line()? {
            match input.parse::<usize>() {
                Ok(position) => return Ok(position),
                Err(_) => println!("Enter a number between 0 and 8."),
            }
        }
    }
}

fn prompt_yes_no(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    let answer = read_line()?.unwrap_or_default();
    Ok(matches!(answer.as_str(), "y" | "Y" | "yes"))
}

/// Read one trimmed line from stdin; `None` for blank input
fn read_line() -> Result<Option<String>> {
    io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    if io::stdin()
        .read_line(&mut line)
        .context("read console input")?
        == 0
    {
        bail!("input stream closed");
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
