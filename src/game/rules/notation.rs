//! Move notation for the board's move log
//!
//! Moves render as source and destination squares, joined by `x` when the
//! move captures: `a1a2`, `e2xd3`. The log is only ever displayed.

use crate::game::components::Move;

pub fn notate(mv: &Move) -> String {
    if mv.is_capture {
        format!("{}x{}", mv.from, mv.to)
    } else {
        format!("{}{}", mv.from, mv.to)
    }
}
