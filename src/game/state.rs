//! Game state: turn sequencing, move application, positional queries.

use crate::board::{Board, Disc, TilePoint};

use super::error::{OthelloError, Result};
use super::rules::{self, flips_for};
use super::Player;

/// The four corner coordinates.
const CORNERS: [TilePoint; 4] = [
    TilePoint { row: 1, col: 1 },
    TilePoint { row: 1, col: 8 },
    TilePoint { row: 8, col: 1 },
    TilePoint { row: 8, col: 8 },
];

/// Full game state: an owned board, the two players, and the turn machine.
///
/// Cloning a `GameState` yields a fully independent sandbox (its own tile
/// matrix and players); the AI simulates candidate moves on such clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current_turn: Disc,
    game_over: bool,
}

impl GameState {
    /// Start a new game from the standard Othello opening; dark moves first.
    pub fn new(white: Player, black: Player) -> Self {
        Self {
            board: Board::standard_setup(),
            players: [white, black],
            current_turn: Disc::Black,
            game_over: false,
        }
    }

    /// New game with default player names.
    pub fn new_standard() -> Self {
        Self::new(
            Player::new("White", Disc::White),
            Player::new("Black", Disc::Black),
        )
    }

    /// Build a state over an existing piece layout; `to_move` plays next.
    /// Used to replicate a live layout into an analysis position.
    pub fn from_board(board: Board, to_move: Disc) -> Self {
        Self {
            board,
            players: [
                Player::new("White", Disc::White),
                Player::new("Black", Disc::Black),
            ],
            current_turn: to_move,
            game_over: false,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Disc {
        self.current_turn
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The player identity for a side.
    pub fn player(&self, side: Disc) -> Option<&Player> {
        self.players.iter().find(|p| p.disc == side)
    }

    /// All legal moves for `side` in row-major scan order.
    pub fn playable_tiles(&self, side: Disc) -> Vec<TilePoint> {
        rules::playable_tiles(&self.board, side)
    }

    /// Place a disc for `side` at `pt`, flipping every flanked run.
    ///
    /// Validation happens before any mutation: an occupied tile or a
    /// placement that flips nothing is rejected with `InvalidMove` and the
    /// board is left untouched. On success the number of flipped discs is
    /// returned (always >= 1).
    ///
    /// With `simulate` set the turn-ownership and game-over gates are
    /// skipped and the turn machine is not advanced; capture validity is
    /// still required. This is the AI lookahead mode, only meaningful on a
    /// sandbox clone.
    pub fn place_piece(&mut self, side: Disc, pt: TilePoint, simulate: bool) -> Result<usize> {
        if !TilePoint::is_valid(pt.row as i32, pt.col as i32) {
            return Err(OthelloError::OutOfRange(pt));
        }
        if !simulate && (self.game_over || side != self.current_turn) {
            return Err(OthelloError::InvalidMove(pt));
        }

        let flipped = flips_for(&self.board, pt, side);
        if flipped.is_empty() {
            return Err(OthelloError::InvalidMove(pt));
        }

        self.board.set_disc(pt, side);
        for run_pt in &flipped {
            self.board.set_disc(*run_pt, side);
        }

        if !simulate {
            self.advance_turn(side);
        }

        Ok(flipped.len())
    }

    /// Advance the turn machine after a successful move by `mover`.
    ///
    /// The turn passes to the opponent unless they have no legal move, in
    /// which case it stays with the mover (pass rule); if neither side can
    /// move the game is over.
    fn advance_turn(&mut self, mover: Disc) {
        let opponent = mover.opponent();
        if rules::has_any_move(&self.board, opponent) {
            self.current_turn = opponent;
        } else if rules::has_any_move(&self.board, mover) {
            self.current_turn = mover;
        } else {
            self.game_over = true;
        }
    }

    /// Coordinates of every tile currently owned by `side`, row-major.
    pub fn player_tiles(&self, side: Disc) -> Vec<TilePoint> {
        self.board
            .tiles()
            .filter(|t| t.disc == side)
            .map(|t| t.pos)
            .collect()
    }

    /// True iff `pt` is one of the four board corners.
    #[inline]
    pub fn is_corner_tile(&self, pt: TilePoint) -> bool {
        CORNERS.contains(&pt)
    }

    /// Heuristic stability test: whether the disc at `pt` is deemed
    /// unflippable for the rest of the game.
    ///
    /// A corner disc is stable. Any other disc counts as stable iff every
    /// on-board neighbor is owned by the same side, so no opposing sandwich
    /// can form through it. This is an approximation, not a full stability
    /// proof, and the AI is tuned around it.
    pub fn disc_is_stable(&self, pt: TilePoint, owner: Disc) -> bool {
        if owner == Disc::Empty || self.board.disc_at(pt) != owner {
            return false;
        }
        if self.is_corner_tile(pt) {
            return true;
        }
        self.board
            .neighbors(pt)
            .iter()
            .all(|tile| tile.disc == owner)
    }

    /// Number of discs of one color on the board.
    #[inline]
    pub fn disc_count(&self, side: Disc) -> usize {
        self.board.disc_count(side)
    }

    /// The side with more discs, or `None` while in progress or on a tie.
    pub fn winner(&self) -> Option<Disc> {
        if !self.game_over {
            return None;
        }
        let black = self.disc_count(Disc::Black);
        let white = self.disc_count(Disc::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    #[test]
    fn test_new_game_starts_with_black() {
        let state = GameState::new_standard();
        assert_eq!(state.current_turn(), Disc::Black);
        assert!(!state.is_game_over());
        assert_eq!(state.player(Disc::Black).unwrap().name, "Black");
        assert_eq!(state.player(Disc::White).unwrap().name, "White");
    }

    #[test]
    fn test_place_piece_flips_and_advances_turn() {
        let mut state = GameState::new_standard();
        let flipped = state.place_piece(Disc::Black, TilePoint::new(3, 4), false).unwrap();

        assert_eq!(flipped, 1);
        assert_eq!(state.board().disc_at(TilePoint::new(4, 4)), Disc::Black);
        // Flips change color in place: one new disc, 4 -> 5 occupied tiles,
        // and the mover's count rises by 1 + flipped (2 -> 4)
        assert_eq!(state.board().occupied_count(), 5);
        assert_eq!(state.disc_count(Disc::Black), 4);
        assert_eq!(state.disc_count(Disc::White), 1);
        assert_eq!(state.current_turn(), Disc::White);
    }

    #[test]
    fn test_disc_count_accounting() {
        let mut state = GameState::new_standard();
        let before = state.board().occupied_count();
        let flipped = state.place_piece(Disc::Black, TilePoint::new(3, 4), false).unwrap();

        // One new disc plus the flips, which only change color
        assert_eq!(state.board().occupied_count(), before + 1);
        assert!(flipped >= 1);
        assert_eq!(state.disc_count(Disc::Black), 2 + 1 + flipped);
        assert_eq!(state.disc_count(Disc::White), 2 - flipped);
    }

    #[test]
    fn test_place_piece_rejects_illegal_moves() {
        let mut state = GameState::new_standard();
        let snapshot = state.clone();

        // Occupied tile
        let err = state.place_piece(Disc::Black, TilePoint::new(4, 4), false);
        assert_eq!(err, Err(OthelloError::InvalidMove(TilePoint::new(4, 4))));

        // Empty tile that flips nothing
        let err = state.place_piece(Disc::Black, TilePoint::new(1, 1), false);
        assert_eq!(err, Err(OthelloError::InvalidMove(TilePoint::new(1, 1))));

        // Out of turn
        let err = state.place_piece(Disc::White, TilePoint::new(3, 5), false);
        assert_eq!(err, Err(OthelloError::InvalidMove(TilePoint::new(3, 5))));

        // No partial mutation on any rejection
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_simulate_skips_turn_gate_but_not_capture_validity() {
        let mut sandbox = GameState::new_standard();

        // White may move out of turn in simulate mode
        let flipped = sandbox.place_piece(Disc::White, TilePoint::new(3, 5), true).unwrap();
        assert_eq!(flipped, 1);
        // Turn machine untouched
        assert_eq!(sandbox.current_turn(), Disc::Black);

        // A non-flanking placement is still rejected
        let err = sandbox.place_piece(Disc::White, TilePoint::new(8, 8), true);
        assert_eq!(err, Err(OthelloError::InvalidMove(TilePoint::new(8, 8))));
    }

    #[test]
    fn test_pass_rule_keeps_turn_with_mover() {
        // Row 4 before the move: . W B _ W B B (cols 2-8). Black plays
        // (4,5) and flips (4,6); afterwards white's lone disc at (4,3) has
        // no legal move while black can still play (4,2), so the turn stays
        // with black.
        let mut state = GameState::new_standard();
        state.board = Board::new();
        state.board.set_disc(TilePoint::new(4, 3), Disc::White);
        state.board.set_disc(TilePoint::new(4, 4), Disc::Black);
        state.board.set_disc(TilePoint::new(4, 6), Disc::White);
        state.board.set_disc(TilePoint::new(4, 7), Disc::Black);
        state.board.set_disc(TilePoint::new(4, 8), Disc::Black);

        let flipped = state.place_piece(Disc::Black, TilePoint::new(4, 5), false).unwrap();
        assert_eq!(flipped, 1);
        assert!(state.playable_tiles(Disc::White).is_empty());
        assert!(!state.is_game_over());
        assert_eq!(state.current_turn(), Disc::Black);
        assert!(state.playable_tiles(Disc::Black).contains(&TilePoint::new(4, 2)));
    }

    #[test]
    fn test_game_over_when_neither_side_can_move() {
        // Wiping out the opponent with no empty flankable tiles ends the game
        let mut state = GameState::new_standard();
        state.board = Board::new();
        state.board.set_disc(TilePoint::new(1, 1), Disc::Black);
        state.board.set_disc(TilePoint::new(1, 2), Disc::White);

        state.place_piece(Disc::Black, TilePoint::new(1, 3), false).unwrap();
        assert_eq!(state.disc_count(Disc::White), 0);
        // Black alone on the board has no legal flank either
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(Disc::Black));
    }

    #[test]
    fn test_corner_census() {
        let state = GameState::new_standard();
        let mut corners = 0;
        for row in 1..=BOARD_SIZE as u8 {
            for col in 1..=BOARD_SIZE as u8 {
                if state.is_corner_tile(TilePoint::new(row, col)) {
                    corners += 1;
                }
            }
        }
        assert_eq!(corners, 4);
        assert!(state.is_corner_tile(TilePoint::new(1, 1)));
        assert!(state.is_corner_tile(TilePoint::new(1, 8)));
        assert!(state.is_corner_tile(TilePoint::new(8, 1)));
        assert!(state.is_corner_tile(TilePoint::new(8, 8)));
        assert!(!state.is_corner_tile(TilePoint::new(4, 4)));
    }

    #[test]
    fn test_corner_disc_is_stable() {
        let mut state = GameState::new_standard();
        state.board.set_disc(TilePoint::new(1, 1), Disc::Black);
        assert!(state.disc_is_stable(TilePoint::new(1, 1), Disc::Black));
        assert!(!state.disc_is_stable(TilePoint::new(1, 1), Disc::White));
    }

    #[test]
    fn test_surrounded_disc_is_stable() {
        let mut state = GameState::new_standard();
        state.board = Board::new();
        let center = TilePoint::new(4, 4);
        state.board.set_disc(center, Disc::Black);
        for tile in state.board.neighbors(center) {
            state.board.set_disc(tile.pos, Disc::Black);
        }
        assert!(state.disc_is_stable(center, Disc::Black));
    }

    #[test]
    fn test_frontier_disc_is_not_stable() {
        let state = GameState::new_standard();
        // Opening discs all border empty tiles
        assert!(!state.disc_is_stable(TilePoint::new(4, 5), Disc::Black));
        assert!(!state.disc_is_stable(TilePoint::new(4, 4), Disc::White));
    }

    #[test]
    fn test_player_tiles_row_major() {
        let state = GameState::new_standard();
        assert_eq!(
            state.player_tiles(Disc::Black),
            vec![TilePoint::new(4, 5), TilePoint::new(5, 4)]
        );
        assert_eq!(
            state.player_tiles(Disc::White),
            vec![TilePoint::new(4, 4), TilePoint::new(5, 5)]
        );
    }

    #[test]
    fn test_out_of_range_placement() {
        let mut state = GameState::new_standard();
        let err = state.place_piece(Disc::Black, TilePoint { row: 9, col: 1 }, false);
        assert_eq!(
            err,
            Err(OthelloError::OutOfRange(TilePoint { row: 9, col: 1 }))
        );
    }
}
