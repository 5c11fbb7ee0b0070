//! Free-play legality

use super::board_state::BoardState;
use super::check::would_be_in_check;
use super::piece_moves::can_attack;
use crate::game::components::Piece;
use crate::game::types::Square;
use tracing::debug;

/// Whether `piece` may legally move to `to` in free play.
///
/// The move pattern must reach `to`, the destination must not hold a piece
/// of the mover's color, and the mover's king must not be attacked
/// afterwards. Whose turn it is stays the caller's business.
pub fn can_move(piece: &Piece, board: &BoardState, to: Square) -> bool {
    if !can_attack(piece, board, to) {
        debug!("[RULES] {} {} cannot reach {}", piece.color, piece.piece_type, to);
        return false;
    }

    if board.get_piece_color(to) == Some(piece.color) {
        debug!("[RULES] {} is occupied by a friendly piece", to);
        return false;
    }

    if would_be_in_check(piece, board, to) {
        debug!("[RULES] {} to {} would expose the {} king", piece.square, to, piece.color);
        return false;
    }

    true
}

/// Whether an opposing piece currently stands on `to`
pub fn is_capture(piece: &Piece, board: &BoardState, to: Square) -> bool {
    board
        .pieces
        .iter()
        .any(|other| other.square == to && other.color != piece.color)
}

/// Every square `piece` may legally move to
pub fn possible_moves(piece: &Piece, board: &BoardState) -> Vec<Square> {
    Square::all()
        .filter(|&to| can_move(piece, board, to))
        .collect()
}
