//! Heuristic move selection for the AI opponent.

use std::time::Instant;

use crate::board::{Disc, TilePoint};
use crate::game::{GameState, OthelloError, Result};

/// Positional score for one evaluated layout: four weighted sub-scores and
/// their sum. Built fresh per evaluation and immediately consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamestateScore {
    pub mobility_score: u32,
    pub stability_score: u32,
    pub corner_control_score: u32,
    pub power_score: u32,
    pub total_score: u32,
}

impl GamestateScore {
    #[inline]
    pub fn sum(&self) -> u32 {
        self.mobility_score + self.stability_score + self.corner_control_score + self.power_score
    }
}

/// Outcome of one AI move computation, handed back to the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Option<TilePoint>,
    pub score: u32,
    pub candidates: usize,
    pub time_ms: u64,
}

/// The AI opponent: a positional evaluator with fixed integer weights.
///
/// Evaluation is a linear combination of counts times weights, computed for
/// the mover only. There is no opponent-score subtraction and no
/// normalization; the heuristic is one-sided by design.
#[derive(Debug, Clone, Copy)]
pub struct AiMind {
    mobility_weight: u32,
    stability_weight: u32,
    corner_weight: u32,
    power_weight: u32,
}

impl AiMind {
    pub fn new(
        mobility_weight: u32,
        stability_weight: u32,
        corner_weight: u32,
        power_weight: u32,
    ) -> Self {
        Self {
            mobility_weight,
            stability_weight,
            corner_weight,
            power_weight,
        }
    }

    /// Score a layout for `side` after a move that flipped `flipped` discs.
    ///
    /// Mobility counts the legal moves open to `side`, stability the discs
    /// the heuristic deems unflippable, corner control the owned corners;
    /// the power score is proportional to the flip count of the move that
    /// produced the layout.
    pub fn eval_gamestate_score(&self, side: Disc, layout: &GameState, flipped: usize) -> u32 {
        let mobility = layout.playable_tiles(side).len() as u32;

        let mut corner_pieces = 0u32;
        let mut stable = 0u32;
        for pt in layout.player_tiles(side) {
            if layout.is_corner_tile(pt) {
                corner_pieces += 1;
            }
            if layout.disc_is_stable(pt, side) {
                stable += 1;
            }
        }

        let mut score = GamestateScore {
            mobility_score: mobility * self.mobility_weight,
            stability_score: stable * self.stability_weight,
            corner_control_score: corner_pieces * self.corner_weight,
            power_score: flipped as u32 * self.power_weight,
            total_score: 0,
        };
        score.total_score = score.sum();
        score.total_score
    }

    /// Pick the best candidate move for `side` by one-ply lookahead.
    ///
    /// Each candidate is applied in simulate mode on an independent sandbox
    /// clone of `state`, the resulting layout is scored, and the index of
    /// the strictly best-scoring candidate is returned (first seen wins
    /// ties). The live state is never mutated.
    ///
    /// An empty candidate list is a precondition violation and yields
    /// [`OthelloError::NoLegalMoves`].
    pub fn best_move_heuristic(
        &self,
        side: Disc,
        state: &GameState,
        candidates: &[TilePoint],
    ) -> Result<usize> {
        if candidates.is_empty() {
            return Err(OthelloError::NoLegalMoves);
        }

        let mut best_index = 0usize;
        let mut best_score = 0u32;
        for (i, &mv) in candidates.iter().enumerate() {
            let mut sandbox = state.clone();
            let flipped = sandbox.place_piece(side, mv, true)?;
            let score = self.eval_gamestate_score(side, &sandbox, flipped);

            if score > best_score {
                best_index = i;
                best_score = score;
            }
        }
        Ok(best_index)
    }

    /// Compute a full move for `side`: candidate scan, heuristic selection,
    /// timing. Used by the GUI's worker thread.
    pub fn choose_move(&self, side: Disc, state: &GameState) -> MoveResult {
        let start = Instant::now();
        let candidates = state.playable_tiles(side);

        let best = match self.best_move_heuristic(side, state, &candidates) {
            Ok(index) => Some(index),
            Err(_) => None,
        };

        let (best_move, score) = match best {
            Some(index) => {
                let mv = candidates[index];
                let mut sandbox = state.clone();
                let score = sandbox
                    .place_piece(side, mv, true)
                    .map(|flipped| self.eval_gamestate_score(side, &sandbox, flipped))
                    .unwrap_or(0);
                (Some(mv), score)
            }
            None => (None, 0),
        };

        MoveResult {
            best_move,
            score,
            candidates: candidates.len(),
            time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for AiMind {
    /// Shipped tuning: corners dominate, then mobility and stability, with
    /// a small preference for large flips.
    fn default() -> Self {
        Self::new(5, 3, 20, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_gamestate_score_sum() {
        let score = GamestateScore {
            mobility_score: 3,
            stability_score: 4,
            corner_control_score: 20,
            power_score: 2,
            total_score: 0,
        };
        assert_eq!(score.sum(), 29);
    }

    #[test]
    fn test_eval_counts_mobility() {
        let ai = AiMind::new(1, 0, 0, 0);
        let state = GameState::new_standard();
        // Dark has exactly 4 legal moves at the standard start
        assert_eq!(ai.eval_gamestate_score(Disc::Black, &state, 0), 4);
    }

    #[test]
    fn test_eval_counts_corners_and_power() {
        let ai = AiMind::new(0, 0, 10, 2);
        let mut board = Board::standard_setup();
        board.set_disc(TilePoint::new(1, 1), Disc::Black);
        board.set_disc(TilePoint::new(8, 8), Disc::Black);
        let state = GameState::from_board(board, Disc::Black);

        // 2 corners * 10 + 3 flips * 2
        assert_eq!(ai.eval_gamestate_score(Disc::Black, &state, 3), 26);
    }

    #[test]
    fn test_mobility_weighted_selection() {
        // With only the mobility weight set, the AI must pick the candidate
        // that leaves it the most legal replies.
        let ai = AiMind::new(1, 0, 0, 0);
        let state = GameState::new_standard();
        let candidates = state.playable_tiles(Disc::Black);

        let best = ai.best_move_heuristic(Disc::Black, &state, &candidates).unwrap();

        let mut scores = Vec::new();
        for &mv in &candidates {
            let mut sandbox = state.clone();
            let flipped = sandbox.place_piece(Disc::Black, mv, true).unwrap();
            scores.push(ai.eval_gamestate_score(Disc::Black, &sandbox, flipped));
        }
        let max = *scores.iter().max().unwrap();
        assert_eq!(scores[best], max);
        // First-seen wins ties: no earlier candidate may match the max
        assert!(scores[..best].iter().all(|&s| s < max));
    }

    #[test]
    fn test_prefers_higher_mobility_candidate() {
        // Hand-built position, black to move. Playing (4,3) captures the
        // white disc at (4,2) and leaves black three replies against the
        // white disc at (5,5); playing (6,6) captures (5,5) and leaves only
        // one reply against (4,2). Both moves flip exactly one disc, so
        // with only the mobility weight set the AI must pick (4,3).
        let ai = AiMind::new(1, 0, 0, 0);
        let mut board = Board::new();
        board.set_disc(TilePoint::new(4, 1), Disc::Black);
        board.set_disc(TilePoint::new(4, 2), Disc::White);
        board.set_disc(TilePoint::new(4, 4), Disc::Black);
        board.set_disc(TilePoint::new(4, 5), Disc::Black);
        board.set_disc(TilePoint::new(5, 4), Disc::Black);
        board.set_disc(TilePoint::new(5, 5), Disc::White);
        let state = GameState::from_board(board, Disc::Black);

        // Lower-mobility candidate listed first: a tie would pick index 0,
        // so index 1 proves the mobility comparison drove the choice.
        let candidates = vec![TilePoint::new(6, 6), TilePoint::new(4, 3)];
        let best = ai.best_move_heuristic(Disc::Black, &state, &candidates).unwrap();
        assert_eq!(best, 1);
    }

    #[test]
    fn test_simulation_isolation() {
        let ai = AiMind::default();
        let state = GameState::new_standard();
        let snapshot = state.clone();
        let candidates = state.playable_tiles(Disc::Black);

        ai.best_move_heuristic(Disc::Black, &state, &candidates).unwrap();
        ai.choose_move(Disc::Black, &state);

        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_empty_candidates_is_an_error() {
        let ai = AiMind::default();
        let state = GameState::new_standard();
        assert_eq!(
            ai.best_move_heuristic(Disc::Black, &state, &[]),
            Err(OthelloError::NoLegalMoves)
        );
    }

    #[test]
    fn test_choose_move_reports_candidates() {
        let ai = AiMind::default();
        let state = GameState::new_standard();
        let result = ai.choose_move(Disc::Black, &state);

        assert_eq!(result.candidates, 4);
        let best = result.best_move.unwrap();
        assert!(state.playable_tiles(Disc::Black).contains(&best));
    }
}
