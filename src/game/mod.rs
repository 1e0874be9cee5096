//! Game rules and state for Othello
//!
//! This module implements the rule set for Othello including:
//! - The flanking/capture algorithm (legal moves, disc flips)
//! - Turn sequencing with the pass rule
//! - Positional queries used by the AI (corners, stability)

pub mod error;
pub mod rules;
pub mod state;

use crate::board::Disc;

// Re-exports for convenient access
pub use error::{OthelloError, Result};
pub use rules::{flips_for, is_legal_move, playable_tiles};
pub use state::GameState;

/// Identity of one of the two competitors: a display name plus the disc
/// color played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub disc: Disc,
}

impl Player {
    pub fn new(name: impl Into<String>, disc: Disc) -> Self {
        Self {
            name: name.into(),
            disc,
        }
    }
}
