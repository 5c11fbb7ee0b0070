//! Self-check detection

use super::board_state::BoardState;
use super::piece_moves::can_attack;
use crate::game::components::Piece;
use crate::game::types::Square;

/// Whether moving `piece` to `to` leaves its own king attacked.
///
/// Plays the move on a detached copy of the board and asks every live
/// opposing piece whether it reaches the king's square. An opposing piece
/// standing on `to` counts as captured and is ignored. A side without a king
/// is never in check, and a piece missing from the board cannot put its king
/// in check.
pub fn would_be_in_check(piece: &Piece, board: &BoardState, to: Square) -> bool {
    let mut simulated = board.simulation_copy();

    if !simulated.relocate(piece.id, to) {
        return false;
    }

    let Some(king_square) = simulated.king_square(piece.color) else {
        return false;
    };

    simulated
        .pieces
        .iter()
        .filter(|opponent| opponent.color != piece.color && opponent.is_alive)
        .filter(|opponent| opponent.square != to)
        .any(|opponent| can_attack(opponent, &simulated, king_square))
}
