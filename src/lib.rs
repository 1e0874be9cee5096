//! Othello (Reversi) with a heuristic AI opponent
//!
//! A desktop Othello game: standard 8x8 board, flanking captures, the pass
//! rule, and an AI that picks its move by one-ply lookahead over a weighted
//! positional evaluation (mobility, stability, corner control, flip count).
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: the 8x8 tile grid and geometric queries
//! - [`game`]: flanking rules, turn sequencing, positional queries
//! - [`ai`]: positional evaluator and move selector
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use othello::{AiMind, Disc, GameState, TilePoint};
//!
//! let mut state = GameState::new_standard();
//!
//! // Dark opens with one of its four legal moves
//! let flipped = state.place_piece(Disc::Black, TilePoint::new(3, 4), false).unwrap();
//! assert_eq!(flipped, 1);
//!
//! // The AI answers for light
//! let ai = AiMind::default();
//! let result = ai.choose_move(Disc::White, &state);
//! assert!(result.best_move.is_some());
//! ```
//!
//! # AI
//!
//! The AI is deliberately shallow: every candidate move is applied on an
//! isolated clone of the game state, the resulting layout is scored for the
//! mover only, and the best-scoring candidate wins. No minimax, no
//! alpha-beta, no opponent modeling.

pub mod ai;
pub mod board;
pub mod game;
pub mod ui;

// Re-export commonly used types for convenience
pub use ai::{AiMind, GamestateScore, MoveResult};
pub use board::{Board, Disc, Tile, TilePoint, BOARD_SIZE};
pub use game::{GameState, OthelloError, Player};
