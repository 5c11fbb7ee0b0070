//! Scripted puzzles
//!
//! A puzzle is a starting position and a fixed line of play: each step holds
//! the move the player must find and, except for the last step, the reply the
//! opponent plays. Validation is exact matching against the current step;
//! there is no search for alternative solutions.
//!
//! Solving a puzzle reveals its clue number. The three clues, in puzzle
//! order, form the combination checked by [`verify_combination`].

pub mod catalog;


use crate::game::components::Move;
use crate::game::error::{GameError, GameResult};
use crate::game::rules::BoardState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleId {
    First,
    Second,
    Third,
}

impl PuzzleId {
    pub const ALL: [PuzzleId; 3] = [PuzzleId::First, PuzzleId::Second, PuzzleId::Third];

    pub fn name(self) -> &'static str {
        match self {
            PuzzleId::First => "first",
            PuzzleId::Second => "second",
            PuzzleId::Third => "third",
        }
    }

    /// Number revealed once the puzzle is solved
    pub fn clue(self) -> u32 {
        match self {
            PuzzleId::First => 43,
            PuzzleId::Second => 20,
            PuzzleId::Third => 3,
        }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PuzzleId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PuzzleId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownPuzzle {
                name: wanted.to_string(),
            })
    }
}

/// One step of a puzzle's solution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolutionStep {
    pub player_move: Move,
    /// Scripted reply; `None` on the final step
    pub opponent_move: Option<Move>,
}

#[derive(Clone, Debug)]
pub struct Puzzle {
    pub id: PuzzleId,
    pub initial_state: BoardState,
    pub solution: Vec<SolutionStep>,
}

impl Puzzle {
    pub fn new(id: PuzzleId) -> Self {
        catalog::build(id)
    }

    pub fn step(&self, index: usize) -> Option<&SolutionStep> {
        self.solution.get(index)
    }

    pub fn len(&self) -> usize {
        self.solution.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solution.is_empty()
    }
}

/// Look a puzzle up by name
pub fn find_puzzle(name: &str) -> GameResult<Puzzle> {
    let id: PuzzleId = name.parse()?;
    Ok(Puzzle::new(id))
}

/// Whether `attempted` is exactly the player move expected at `step`.
///
/// Source, destination and the capture flag must all match. A step past the
/// end of the script never matches.
pub fn validate_move(puzzle: &Puzzle, step: usize, attempted: &Move) -> bool {
    let Some(expected) = puzzle.step(step) else {
        debug!("[PUZZLE] {} has no step {}", puzzle.id, step);
        return false;
    };

    let expected = expected.player_move;
    let matches = attempted.from == expected.from
        && attempted.to == expected.to
        && attempted.is_capture == expected.is_capture;

    if !matches {
        debug!(
            "[PUZZLE] {} step {}: expected {}{}, got {}{}",
            puzzle.id, step, expected.from, expected.to, attempted.from, attempted.to
        );
    }

    matches
}

/// Whether `numbers` are the clues of all puzzles, in puzzle order
pub fn verify_combination(numbers: [u32; 3]) -> bool {
    PuzzleId::ALL
        .iter()
        .zip(numbers)
        .all(|(id, number)| id.clue() == number)
}
