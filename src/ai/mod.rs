//! Positional evaluation and move selection
//!
//! The AI is deliberately shallow: one-ply lookahead over the candidate
//! moves plus a static, one-sided positional evaluation. No minimax, no
//! pruning; every candidate is simulated on a sandboxed copy of the game.

pub mod mind;

pub use mind::{AiMind, GamestateScore, MoveResult};
