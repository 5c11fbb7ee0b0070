//! Board state representation for move validation

use crate::game::components::{Move, Piece, PieceColor, PieceId, PieceType};
use crate::game::types::Square;
use serde::{Deserialize, Serialize};

/// Back rank order from file a to file h
const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Represents the state of the board for move validation
///
/// `is_checkmate`, `is_stalemate` and `is_draw` are never derived by the
/// rules; they stay `false` unless a caller sets them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardState {
    pub pieces: Vec<Piece>,
    pub white_to_move: bool,
    pub is_game_over: bool,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_draw: bool,
    pub selected_piece: Option<PieceId>,
    pub notation: String,
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::with_pieces(Vec::new())
    }
}

impl BoardState {
    /// A fresh board holding `pieces`, white to move
    pub fn with_pieces(pieces: Vec<Piece>) -> Self {
        BoardState {
            pieces,
            white_to_move: true,
            is_game_over: false,
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
            is_draw: false,
            selected_piece: None,
            notation: String::new(),
        }
    }

    /// The 32-piece starting layout
    pub fn standard() -> Self {
        let mut pieces = Vec::with_capacity(32);
        let mut next_id = 1u64;

        for color in [PieceColor::White, PieceColor::Black] {
            let (back_rank, pawn_rank, prefix) = match color {
                PieceColor::White => (0, 1, "white"),
                PieceColor::Black => (7, 6, "black"),
            };

            for file in 0..8u8 {
                let name = format!("{prefix}Pawn{}", file + 1);
                pieces.push(Piece::new(
                    next_id,
                    name,
                    color,
                    PieceType::Pawn,
                    Square::at(file, pawn_rank),
                ));
                next_id += 1;
            }

            for (file, piece_type) in BACK_ROW.iter().copied().enumerate() {
                let name = back_rank_name(prefix, piece_type, file as u8);
                pieces.push(Piece::new(
                    next_id,
                    name,
                    color,
                    piece_type,
                    Square::at(file as u8, back_rank),
                ));
                next_id += 1;
            }
        }

        BoardState::with_pieces(pieces)
    }

    pub fn is_empty(&self, pos: Square) -> bool {
        !self.pieces.iter().any(|p| p.square == pos)
    }

    pub fn get_piece_color(&self, pos: Square) -> Option<PieceColor> {
        self.get_piece_at(pos).map(|piece| piece.color)
    }

    pub fn get_piece_at(&self, pos: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == pos)
    }

    pub fn get_piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// Square of `color`'s king, if that side still has one
    pub fn king_square(&self, color: PieceColor) -> Option<Square> {
        self.pieces
            .iter()
            .find(|p| p.piece_type == PieceType::King && p.color == color)
            .map(|p| p.square)
    }

    /// Color whose turn it is
    pub fn side_to_move(&self) -> PieceColor {
        if self.white_to_move {
            PieceColor::White
        } else {
            PieceColor::Black
        }
    }

    /// Copy of the piece records for a throwaway simulation.
    ///
    /// Visual links are left behind and the notation log is not copied.
    pub fn simulation_copy(&self) -> BoardState {
        BoardState {
            pieces: self.pieces.iter().map(Piece::detached).collect(),
            selected_piece: None,
            notation: String::new(),
            ..*self
        }
    }

    /// Move the piece with `id` to `to` without any checks
    pub fn relocate(&mut self, id: PieceId, to: Square) -> bool {
        match self.pieces.iter_mut().find(|p| p.id == id) {
            Some(piece) => {
                piece.square = to;
                true
            }
            None => false,
        }
    }

    /// Remove a piece of the opposite color to `mover` standing on `pos`
    pub fn capture_at(&mut self, pos: Square, mover: PieceColor) -> Option<Piece> {
        let index = self
            .pieces
            .iter()
            .position(|p| p.square == pos && p.color != mover)?;
        let mut captured = self.pieces.remove(index);
        captured.is_alive = false;
        captured.visual = None;
        Some(captured)
    }

    /// Append a move to the space-separated notation log
    pub fn record(&mut self, mv: &Move) {
        self.notation.push_str(&super::notation::notate(mv));
        self.notation.push(' ');
    }

    pub fn toggle_turn(&mut self) {
        self.white_to_move = !self.white_to_move;
    }
}

fn back_rank_name(prefix: &str, piece_type: PieceType, file: u8) -> String {
    let kind = match piece_type {
        PieceType::Rook => "Rook",
        PieceType::Knight => "Knight",
        PieceType::Bishop => "Bishop",
        PieceType::Queen => "Queen",
        PieceType::King => "King",
        PieceType::Pawn => "Pawn",
    };
    match piece_type {
        PieceType::Queen | PieceType::King => format!("{prefix}{kind}"),
        _ if file < 4 => format!("{prefix}{kind}1"),
        _ => format!("{prefix}{kind}2"),
    }
}
