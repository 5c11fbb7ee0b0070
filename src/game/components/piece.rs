//! Piece records

use crate::game::types::Square;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank delta of a pawn step for this side
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    /// Rank index this side's pawns start on
    pub fn pawn_start_rank(self) -> u8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => 6,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "white"),
            PieceColor::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        };
        f.write_str(name)
    }
}

/// Identity of a piece, unique among the live pieces of one board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u64);

/// Weak link to whatever the rendering host draws for a piece.
///
/// The rules never look inside it. The host owns the strong reference and
/// may drop it at any time; the board only carries the link around.
#[derive(Clone)]
pub struct VisualHandle(Weak<dyn Any + Send + Sync>);

impl VisualHandle {
    pub fn new<T: Any + Send + Sync>(visual: &Arc<T>) -> Self {
        let strong: Arc<dyn Any + Send + Sync> = visual.clone();
        VisualHandle(Arc::downgrade(&strong))
    }

    /// Whether the host still holds the visual
    pub fn is_attached(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Upgrade for the host's own use
    pub fn upgrade(&self) -> Option<Arc<dyn Any + Send + Sync>> {
        self.0.upgrade()
    }
}

impl fmt::Debug for VisualHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// A piece on the board
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub name: String,
    pub color: PieceColor,
    pub piece_type: PieceType,
    pub square: Square,
    pub is_alive: bool,
    #[serde(skip)]
    pub visual: Option<VisualHandle>,
}

impl Piece {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        color: PieceColor,
        piece_type: PieceType,
        square: Square,
    ) -> Self {
        Piece {
            id: PieceId(id),
            name: name.into(),
            color,
            piece_type,
            square,
            is_alive: true,
            visual: None,
        }
    }

    /// Copy of the rules-relevant fields, without the visual link
    pub fn detached(&self) -> Self {
        Piece {
            visual: None,
            ..self.clone()
        }
    }
}
