use anyhow::Context;
use clap::{Parser, Subcommand};
use sinta_chess::core::settings_persistence::{
    read_settings_if_present, save_settings, settings_path, settle_settings,
};
use sinta_chess::core::GameSettings;
use sinta_chess::game::puzzle::{verify_combination, PuzzleId};
use sinta_chess::game::rules::notate;
use sinta_chess::game::session::parse_move;
use sinta_chess::game::types::Square;
use sinta_chess::game::{new_game, GameState, MoveOutcome, RejectReason};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sinta-chess", version, about = "Chess rules and puzzles in the terminal")]
struct Cli {
    /// Settings file to use instead of the one in the config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Let either side move at any time
    #[arg(long, global = true)]
    no_turns: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Free play from the starting position
    Play,
    /// Solve one of the built-in puzzles
    Puzzle { name: String },
    /// List the built-in puzzles
    List,
    /// Check the three clue numbers
    Unlock { first: u32, second: u32, third: u32 },
    /// Change saved settings, or print them when no option is given
    Config {
        /// Enforce turn order
        #[arg(long)]
        turns: Option<bool>,
        /// Print the move log after every move
        #[arg(long)]
        notation: Option<bool>,
        /// Log filter used when RUST_LOG is not set
        #[arg(long)]
        log_filter: Option<String>,
        /// Puzzle started when no command is given
        #[arg(long, conflicts_with = "clear_default_puzzle")]
        default_puzzle: Option<String>,
        /// Start free play when no command is given
        #[arg(long)]
        clear_default_puzzle: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(settings_path);
    let loaded = read_settings_if_present(&path);

    let log_filter = match &loaded {
        Ok(Some(settings)) => settings.log_filter.clone(),
        _ => GameSettings::default().log_filter,
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = settle_settings(&path, loaded);

    let command = match cli.command {
        Some(command) => command,
        None => match &settings.default_puzzle {
            Some(name) => Command::Puzzle { name: name.clone() },
            None => Command::Play,
        },
    };

    match command {
        Command::List => {
            for id in PuzzleId::ALL {
                println!("{id}");
            }
            Ok(())
        }
        Command::Unlock { first, second, third } => {
            if verify_combination([first, second, third]) {
                println!("Unlocked!");
            } else {
                println!("That is not the combination.");
            }
            Ok(())
        }
        Command::Config {
            turns,
            notation,
            log_filter,
            default_puzzle,
            clear_default_puzzle,
        } => {
            let mut settings = settings;
            let mut changed = false;

            if let Some(turns) = turns {
                settings.enforce_turns = turns;
                changed = true;
            }
            if let Some(notation) = notation {
                settings.show_notation = notation;
                changed = true;
            }
            if let Some(filter) = log_filter {
                EnvFilter::try_new(&filter).with_context(|| format!("invalid log filter: {filter}"))?;
                settings.log_filter = filter;
                changed = true;
            }
            if let Some(name) = default_puzzle {
                let id: PuzzleId = name.parse()?;
                settings.default_puzzle = Some(id.name().to_string());
                changed = true;
            }
            if clear_default_puzzle {
                settings.default_puzzle = None;
                changed = true;
            }

            if changed {
                save_settings(&settings, &path)
                    .with_context(|| format!("failed to save settings to {}", path.display()))?;
            }
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
        Command::Play => run(new_game(None)?, &settings, cli.no_turns),
        Command::Puzzle { name } => run(new_game(Some(name.as_str()))?, &settings, cli.no_turns),
    }
}

fn run(game: GameState, settings: &GameSettings, no_turns: bool) -> anyhow::Result<()> {
    let mut game = game.with_turn_enforcement(settings.enforce_turns && !no_turns);

    println!("Enter moves like e2e4. `moves e2` lists moves, `log` prints the game, `quit` exits.");
    prompt(&game)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let input = line.trim();

        match input {
            "" => {}
            "quit" | "exit" => break,
            "log" => println!("{}", game.board.notation.trim_end()),
            _ if input.starts_with("moves ") => show_moves(&mut game, &input["moves ".len()..]),
            _ => match parse_move(input) {
                Ok((from, to)) => {
                    report(game.attempt_move(from, to));
                    if settings.show_notation {
                        println!("{}", game.board.notation.trim_end());
                    }
                }
                Err(e) => println!("{e}"),
            },
        }

        if game.board.is_game_over {
            if let Some(clue) = game.revealed_clue() {
                println!("Puzzle solved! Your clue is {clue}.");
            }
            break;
        }
        prompt(&game)?;
    }

    Ok(())
}

fn show_moves(game: &mut GameState, text: &str) {
    match Square::from_algebraic(text) {
        Some(square) => {
            let moves: Vec<String> = game.select(square).into_iter().map(Square::to_algebraic).collect();
            if moves.is_empty() {
                println!("No moves from {square}");
            } else {
                println!("{}", moves.join(" "));
            }
        }
        None => println!("Not a square: {text}"),
    }
}

fn report(outcome: MoveOutcome) {
    match outcome {
        MoveOutcome::Applied(applied) => {
            if let Some(captured) = applied.captured {
                println!("Captured {}", captured.name);
            }
            if let Some(reply) = applied.opponent_move {
                println!("Opponent replies {}", notate(&reply));
            }
        }
        MoveOutcome::Rejected(reason) => {
            let text = match reason {
                RejectReason::NoPiece => "There is no piece there.",
                RejectReason::NotYourTurn => "It is not that side's turn.",
                RejectReason::GameOver => "The game is over.",
                RejectReason::Illegal => "That move is not allowed.",
                RejectReason::WrongPuzzleMove => "That is not the right move. Try again.",
            };
            println!("{text}");
        }
    }
}

fn prompt(game: &GameState) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{} to move> ", game.board.side_to_move())?;
    stdout.flush()
}
