//! User settings

use serde::{Deserialize, Serialize};

/// Settings that shape how a session is driven
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Reject moves by the side that is not on move
    pub enforce_turns: bool,

    /// Print the move log after every move
    pub show_notation: bool,

    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,

    /// Puzzle to start when none is named on the command line
    pub default_puzzle: Option<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            enforce_turns: true,
            show_notation: true,
            log_filter: "info".to_string(),
            default_puzzle: None,
        }
    }
}
