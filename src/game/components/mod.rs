//! Plain data types the rules operate on: pieces and moves.

pub mod piece;
pub mod game_state;


pub use game_state::*;
pub use piece::*;
