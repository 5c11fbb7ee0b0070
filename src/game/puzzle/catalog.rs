//! Built-in puzzles
//!
//! Each puzzle is a starting position plus the exact line the player has to
//! find. Layouts are static tables; boards are built from them on demand.

use super::{Puzzle, PuzzleId, SolutionStep};
use crate::game::components::{Move, Piece, PieceColor, PieceType};
use crate::game::rules::BoardState;
use crate::game::types::Square;

use PieceColor::{Black, White};
use PieceType::{Bishop, King, Pawn, Queen, Rook};

type PieceSpec = (&'static str, PieceColor, PieceType, Square);
type StepSpec = (Move, Option<Move>);

struct PuzzleLayout {
    pieces: &'static [PieceSpec],
    solution: &'static [StepSpec],
}

const fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
    Move::new(Square::at(from.0, from.1), Square::at(to.0, to.1))
}

static FIRST: PuzzleLayout = PuzzleLayout {
    pieces: &[
        ("whiteKing", White, King, Square::at(3, 7)),
        ("blackKing", Black, King, Square::at(3, 5)),
        ("whiteBishop1", White, Bishop, Square::at(2, 3)),
        ("blackPawn1", Black, Pawn, Square::at(3, 0)),
        ("whiteQueen", White, Queen, Square::at(5, 1)),
        ("blackQueen", Black, Queen, Square::at(6, 6)),
    ],
    solution: &[
        (mv((5, 1), (1, 5)), Some(mv((3, 5), (4, 4)))),
        (mv((1, 5), (1, 1)), None),
    ],
};

static SECOND: PuzzleLayout = PuzzleLayout {
    pieces: &[
        ("whiteKing", White, King, Square::at(5, 7)),
        ("blackKing", Black, King, Square::at(5, 5)),
        ("whiteBishop1", White, Bishop, Square::at(5, 2)),
        ("blackPawn1", Black, Pawn, Square::at(3, 0)),
        ("blackQueen", Black, Queen, Square::at(5, 1)),
        ("whiteQueen", White, Queen, Square::at(4, 3)),
    ],
    solution: &[
        (mv((4, 3), (5, 3)), Some(mv((5, 5), (4, 5)))),
        (mv((5, 2), (6, 3)), None),
    ],
};

static THIRD: PuzzleLayout = PuzzleLayout {
    pieces: &[
        ("whiteKing", White, King, Square::at(2, 3)),
        ("blackKing", Black, King, Square::at(0, 7)),
        ("whiteBishop1", White, Bishop, Square::at(4, 1)),
        ("whiteBishop2", White, Bishop, Square::at(4, 2)),
        ("blackRook1", Black, Rook, Square::at(3, 5)),
    ],
    solution: &[
        (mv((4, 1), (5, 2)), Some(mv((0, 7), (1, 7)))),
        (mv((4, 2), (5, 3)), Some(mv((1, 7), (2, 6)))),
        (mv((2, 3), (2, 4)), None),
    ],
};

fn layout(id: PuzzleId) -> &'static PuzzleLayout {
    match id {
        PuzzleId::First => &FIRST,
        PuzzleId::Second => &SECOND,
        PuzzleId::Third => &THIRD,
    }
}

/// Build the puzzle for `id` with a fresh starting board
pub fn build(id: PuzzleId) -> Puzzle {
    let layout = layout(id);

    let pieces = layout
        .pieces
        .iter()
        .zip(1u64..)
        .map(|(&(name, color, piece_type, square), piece_id)| {
            Piece::new(piece_id, name, color, piece_type, square)
        })
        .collect();

    let solution = layout
        .solution
        .iter()
        .map(|&(player_move, opponent_move)| SolutionStep {
            player_move,
            opponent_move,
        })
        .collect();

    Puzzle {
        id,
        initial_state: BoardState::with_pieces(pieces),
        solution,
    }
}
