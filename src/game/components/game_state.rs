//! Move records

use crate::game::types::Square;
use serde::{Deserialize, Serialize};

/// A move from one square to another.
///
/// Only `is_capture` is ever computed. The remaining flags exist so a move
/// record has the usual shape, but nothing sets them: castling, en passant,
/// promotion and check marking are not part of these rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub is_capture: bool,
    #[serde(skip)]
    pub is_en_passant: bool,
    #[serde(skip)]
    pub is_promotion: bool,
    #[serde(skip)]
    pub is_castle: bool,
    #[serde(skip)]
    pub is_check: bool,
    #[serde(skip, default = "valid_by_default")]
    pub is_valid: bool,
}

fn valid_by_default() -> bool {
    true
}

impl Move {
    /// A non-capturing move
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            is_capture: false,
            is_en_passant: false,
            is_promotion: false,
            is_castle: false,
            is_check: false,
            is_valid: true,
        }
    }

    /// A capturing move
    pub const fn capture(from: Square, to: Square) -> Self {
        Move {
            is_capture: true,
            ..Move::new(from, to)
        }
    }

    pub const fn with_capture(self, is_capture: bool) -> Self {
        Move { is_capture, ..self }
    }
}
