//! Chess game logic
//!
//! Rules and puzzle validation for a board driven by an outside host (a 3D
//! scene, a terminal, a test). The host hands over board squares and gets
//! back decisions; nothing in here knows how pieces are drawn.
//!
//! # Module Organization
//!
//! - `types` - File, rank and square coordinates
//! - `components` - Piece and move records
//! - `rules` - Pure move validation, check detection and notation
//! - `puzzle` - Built-in puzzles and exact-match validation
//! - `session` - The per-game state a host drives move by move
//! - `error` - Game error type

pub mod components;
pub mod error;
pub mod puzzle;
pub mod rules;
pub mod session;
pub mod types;

pub use error::{GameError, GameResult};
pub use session::{new_game, new_puzzle_game, GameState, MoveOutcome, RejectReason};
