//! Game session - the state a host drives move by move
//!
//! A [`GameState`] owns the live board, the active puzzle (if any) and the
//! position in that puzzle's script. The host translates its input into a
//! pair of squares and calls [`GameState::attempt_move`]; everything else
//! (turn gate, legality or script matching, captures, the move log, the
//! scripted reply) happens here.
//!
//! A session is not shared: callers hold it by value or `&mut` and run one
//! move at a time.

use crate::game::components::{Move, Piece, PieceId};
use crate::game::error::{GameError, GameResult};
use crate::game::puzzle::{validate_move, Puzzle, PuzzleId};
use crate::game::rules::{can_move, is_capture, notate, possible_moves, BoardState};
use crate::game::types::Square;
use tracing::{debug, info, warn};

/// Why a move attempt left the board unchanged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Nothing stands on the source square
    NoPiece,
    /// The piece belongs to the side not on move
    NotYourTurn,
    /// The game or puzzle has already ended
    GameOver,
    /// Free play: the rules forbid the move
    Illegal,
    /// Puzzle: not the move the script expects
    WrongPuzzleMove,
}

/// A move that was played, with anything it triggered
#[derive(Clone, Debug)]
pub struct AppliedMove {
    pub player_move: Move,
    pub captured: Option<Piece>,
    /// Scripted reply played right after, if the puzzle has one
    pub opponent_move: Option<Move>,
    /// The puzzle was completed by this move
    pub solved: bool,
}

#[derive(Clone, Debug)]
pub enum MoveOutcome {
    Rejected(RejectReason),
    Applied(AppliedMove),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Active board, optional puzzle and the current step into its script
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: BoardState,
    pub puzzle: Option<Puzzle>,
    pub current_step: usize,
    pub enforce_turns: bool,
}

impl GameState {
    /// Free play from the standard starting position
    pub fn free_play() -> Self {
        GameState {
            board: BoardState::standard(),
            puzzle: None,
            current_step: 0,
            enforce_turns: true,
        }
    }

    /// A puzzle at step 0 on its own starting board
    pub fn for_puzzle(id: PuzzleId) -> Self {
        let puzzle = Puzzle::new(id);
        GameState {
            board: puzzle.initial_state.clone(),
            puzzle: Some(puzzle),
            current_step: 0,
            enforce_turns: true,
        }
    }

    pub fn with_turn_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_turns = enforce;
        self
    }

    /// Whether a puzzle is active and its script has been played through
    pub fn is_solved(&self) -> bool {
        self.puzzle
            .as_ref()
            .is_some_and(|puzzle| self.board.is_game_over && self.current_step >= puzzle.len())
    }

    /// Clue revealed by the active puzzle once it is solved
    pub fn revealed_clue(&self) -> Option<u32> {
        match &self.puzzle {
            Some(puzzle) if self.is_solved() => Some(puzzle.id.clue()),
            _ => None,
        }
    }

    /// Select the piece on `square` and list where it may go.
    ///
    /// Empty squares clear the selection and yield no moves. In a puzzle the
    /// only destination offered is the scripted one, and only for the piece
    /// the script expects to move.
    pub fn select(&mut self, square: Square) -> Vec<Square> {
        let Some(piece) = self.board.get_piece_at(square) else {
            self.board.selected_piece = None;
            return Vec::new();
        };
        let id = piece.id;

        let moves = match &self.puzzle {
            Some(puzzle) => puzzle
                .step(self.current_step)
                .map(|step| step.player_move)
                .filter(|expected| expected.from == square && !self.board.is_game_over)
                .map(|expected| vec![expected.to])
                .unwrap_or_default(),
            None => possible_moves(piece, &self.board),
        };

        self.board.selected_piece = Some(id);
        moves
    }

    pub fn selected(&self) -> Option<PieceId> {
        self.board.selected_piece
    }

    /// Try to move the piece on `from` to `to`.
    ///
    /// Rejections leave the session untouched. In a puzzle the move must be
    /// the scripted one; free-play legality is not consulted there.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if self.board.is_game_over {
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }

        let Some(piece) = self.board.get_piece_at(from).cloned() else {
            debug!("[SESSION] No piece on {}", from);
            return MoveOutcome::Rejected(RejectReason::NoPiece);
        };

        if self.enforce_turns && piece.color != self.board.side_to_move() {
            debug!("[SESSION] {} moved out of turn", piece.name);
            return MoveOutcome::Rejected(RejectReason::NotYourTurn);
        }

        let player_move = Move::new(from, to).with_capture(is_capture(&piece, &self.board, to));

        match &self.puzzle {
            Some(puzzle) => {
                if !validate_move(puzzle, self.current_step, &player_move) {
                    return MoveOutcome::Rejected(RejectReason::WrongPuzzleMove);
                }
            }
            None => {
                if !can_move(&piece, &self.board, to) {
                    return MoveOutcome::Rejected(RejectReason::Illegal);
                }
            }
        }

        let captured = self.play(&piece, player_move);
        info!("[SESSION] {} plays {}", piece.name, notate(&player_move));

        let mut applied = AppliedMove {
            player_move,
            captured,
            opponent_move: None,
            solved: false,
        };

        let script = self.puzzle.as_ref().map(|puzzle| {
            let reply = puzzle
                .step(self.current_step)
                .and_then(|step| step.opponent_move);
            (puzzle.id, reply)
        });

        if let Some((id, reply)) = script {
            match reply {
                Some(reply) => applied.opponent_move = self.play_scripted(reply),
                None => {
                    self.board.is_game_over = true;
                    applied.solved = true;
                    info!("[PUZZLE] {} solved, clue {}", id, id.clue());
                }
            }
            self.current_step += 1;
        }

        MoveOutcome::Applied(applied)
    }

    /// Apply an approved move: capture, relocate, log, pass the turn
    fn play(&mut self, piece: &Piece, mv: Move) -> Option<Piece> {
        let captured = self.board.capture_at(mv.to, piece.color);
        self.board.relocate(piece.id, mv.to);
        self.board.record(&mv);
        self.board.toggle_turn();
        self.board.selected_piece = None;
        captured
    }

    /// Apply a scripted reply exactly as written, without validating it.
    ///
    /// A reply whose source square is empty is skipped, but the turn still
    /// passes back to the player.
    fn play_scripted(&mut self, reply: Move) -> Option<Move> {
        let Some(piece) = self.board.get_piece_at(reply.from).cloned() else {
            warn!("[PUZZLE] Scripted reply has no piece on {}, skipping", reply.from);
            self.board.toggle_turn();
            return None;
        };

        self.play(&piece, reply);
        info!("[PUZZLE] {} replies {}", piece.name, notate(&reply));
        Some(reply)
    }
}

/// Free play on the standard board, or the named puzzle
pub fn new_game(puzzle: Option<&str>) -> GameResult<GameState> {
    match puzzle {
        None => Ok(GameState::free_play()),
        Some(name) => new_puzzle_game(name),
    }
}

/// The named puzzle at step 0, or [`GameError::UnknownPuzzle`]
pub fn new_puzzle_game(name: &str) -> GameResult<GameState> {
    let id: PuzzleId = name.parse()?;
    Ok(GameState::for_puzzle(id))
}

/// Parse a square pair such as `e2e4`, `e2 e4` or `e2-e4`
pub fn parse_move(text: &str) -> GameResult<(Square, Square)> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if compact.chars().count() != 4 || !compact.is_ascii() {
        return Err(GameError::InvalidMoveText {
            input: text.to_string(),
        });
    }

    let (from, to) = compact.split_at(2);
    let parse = |s: &str| {
        Square::from_algebraic(s).ok_or_else(|| GameError::InvalidSquare {
            input: s.to_string(),
        })
    };
    Ok((parse(from)?, parse(to)?))
}
