//! Chess rules module - pure game logic
//!
//! Move validation over a plain [`BoardState`], with no rendering types
//! involved. The host maps its own input to board squares and asks these
//! functions for a yes/no answer.
//!
//! # Module Structure
//!
//! - `board_state` - Board representation and the starting layout
//! - `piece_moves` - Movement rules for each piece type and the attack dispatcher
//! - `check` - Self-check detection on a simulated board
//! - `legality` - Composite free-play legality and capture queries
//! - `notation` - Move log text
//!
//! Castling, en passant, promotion, checkmate, stalemate and draws are not
//! implemented; the matching flags on [`BoardState`] and
//! [`Move`](crate::game::components::Move) are never set by these rules.

pub mod board_state;
pub mod check;
pub mod legality;
pub mod notation;
pub mod piece_moves;


pub use board_state::BoardState;
pub use check::would_be_in_check;
pub use legality::{can_move, is_capture, possible_moves};
pub use notation::notate;
pub use piece_moves::can_attack;
