//! Chess piece movement rules
//!
//! One predicate per piece type. Each answers only "does this piece's move
//! pattern reach `to` on this board": turn order, friendly pieces on the
//! destination and self-check are handled in [`super::legality`].
//! Pure functions with no side effects.

use super::board_state::BoardState;
use crate::game::components::{Piece, PieceType};
use crate::game::types::Square;

/// Whether `piece` can reach `to` by its movement pattern.
///
/// The same answer is used for "may move there" and "threatens that square".
/// For pawns those differ in real chess (a pawn threatens diagonally but not
/// straight ahead); here a pawn's forward step onto the king's square would
/// count as an attack.
pub fn can_attack(piece: &Piece, board: &BoardState, to: Square) -> bool {
    match piece.piece_type {
        PieceType::Pawn => pawn_can_move(piece, board, to),
        PieceType::Knight => knight_can_move(piece, to),
        PieceType::Bishop => bishop_can_move(piece, board, to),
        PieceType::Rook => rook_can_move(piece, board, to),
        PieceType::Queen => queen_can_move(piece, board, to),
        PieceType::King => king_can_move(piece, to),
    }
}

pub fn pawn_can_move(piece: &Piece, board: &BoardState, to: Square) -> bool {
    let direction = piece.color.forward();
    let (dx, dy) = piece.square.delta(to);

    // Forward move
    if dx == 0 && dy == direction {
        return board.is_empty(to);
    }

    // Double move from the starting rank
    if dx == 0 && dy == 2 * direction && piece.square.rank.index() == piece.color.pawn_start_rank()
    {
        return match piece.square.offset(0, direction) {
            Some(intermediate) => board.is_empty(intermediate) && board.is_empty(to),
            None => false,
        };
    }

    // Capture diagonally, no en passant
    if dx.abs() == 1 && dy == direction {
        return board
            .get_piece_color(to)
            .is_some_and(|target| target != piece.color);
    }

    false
}

pub fn knight_can_move(piece: &Piece, to: Square) -> bool {
    let (dx, dy) = piece.square.delta(to);
    let (dx, dy) = (dx.abs(), dy.abs());
    (dx == 2 && dy == 1) || (dx == 1 && dy == 2)
}

pub fn bishop_can_move(piece: &Piece, board: &BoardState, to: Square) -> bool {
    let (dx, dy) = piece.square.delta(to);

    // Must move diagonally
    if dx.abs() != dy.abs() {
        return false;
    }

    is_path_clear(piece.square, to, board)
}

pub fn rook_can_move(piece: &Piece, board: &BoardState, to: Square) -> bool {
    let (dx, dy) = piece.square.delta(to);

    // Must move horizontally or vertically
    if dx != 0 && dy != 0 {
        return false;
    }

    is_path_clear(piece.square, to, board)
}

pub fn queen_can_move(piece: &Piece, board: &BoardState, to: Square) -> bool {
    bishop_can_move(piece, board, to) || rook_can_move(piece, board, to)
}

/// One square in any direction. A king "moving" onto its own square passes.
pub fn king_can_move(piece: &Piece, to: Square) -> bool {
    let (dx, dy) = piece.square.delta(to);
    dx.abs() <= 1 && dy.abs() <= 1
}

/// Every square strictly between `from` and `to` is empty.
///
/// Callers guarantee the two squares share a line or diagonal.
fn is_path_clear(from: Square, to: Square, board: &BoardState) -> bool {
    let (dx, dy) = from.delta(to);
    let (step_x, step_y) = (dx.signum(), dy.signum());

    let mut current = from;
    loop {
        match current.offset(step_x, step_y) {
            Some(next) if next != to => {
                if !board.is_empty(next) {
                    return false;
                }
                current = next;
            }
            _ => return true,
        }
    }
}
