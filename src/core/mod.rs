//! Core module - settings and their persistence
//!
//! - [`GameSettings`] - user preferences for a session
//! - [`settings_persistence`] - JSON load/save in the platform config directory
//! - [`CoreError`] - errors from the above

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use resources::*;
