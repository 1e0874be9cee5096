//! Board grid: an owned 8x8 matrix of tiles with geometric queries.
//!
//! Every `Board` owns its tile matrix outright, so cloning one yields a
//! fully independent snapshot. AI lookahead relies on this: a sandbox board
//! can be mutated freely without touching the live game.

use super::{Disc, TilePoint, BOARD_SIZE, TOTAL_TILES};

/// One board cell: its coordinate plus current occupancy.
///
/// All 64 tiles are created at board construction and mutated in place;
/// tiles are never added or removed during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub pos: TilePoint,
    pub disc: Disc,
}

/// Neighbor offsets, cardinal + diagonal, row-major order.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed 8x8 game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; TOTAL_TILES],
}

impl Board {
    /// Create an empty board with all 64 tiles populated.
    pub fn new() -> Self {
        let mut tiles = [Tile {
            pos: TilePoint { row: 1, col: 1 },
            disc: Disc::Empty,
        }; TOTAL_TILES];
        for (idx, tile) in tiles.iter_mut().enumerate() {
            tile.pos = TilePoint::from_index(idx);
        }
        Self { tiles }
    }

    /// Create a board with the standard Othello opening layout:
    /// light discs at (4,4) and (5,5), dark discs at (4,5) and (5,4).
    pub fn standard_setup() -> Self {
        let mut board = Self::new();
        board.set_disc(TilePoint::new(4, 4), Disc::White);
        board.set_disc(TilePoint::new(5, 5), Disc::White);
        board.set_disc(TilePoint::new(4, 5), Disc::Black);
        board.set_disc(TilePoint::new(5, 4), Disc::Black);
        board
    }

    /// Clamp a possibly out-of-range coordinate into [1, 8].
    ///
    /// Lookups beyond the top edge clamp to the max valid index instead of
    /// failing; this permissive policy is deliberate and callers must not
    /// rely on it for correctness.
    #[inline]
    fn clamp_point(at: TilePoint) -> TilePoint {
        TilePoint {
            row: at.row.clamp(1, BOARD_SIZE as u8),
            col: at.col.clamp(1, BOARD_SIZE as u8),
        }
    }

    /// Get the tile at a 1-indexed coordinate, clamping out-of-range
    /// coordinates to the nearest valid index.
    #[inline]
    pub fn tile(&self, at: TilePoint) -> Tile {
        self.tiles[Self::clamp_point(at).to_index()]
    }

    /// Occupancy at a coordinate (clamped like [`Board::tile`]).
    #[inline]
    pub fn disc_at(&self, at: TilePoint) -> Disc {
        self.tile(at).disc
    }

    /// Set the occupancy of a tile.
    #[inline]
    pub fn set_disc(&mut self, at: TilePoint, disc: Disc) {
        self.tiles[Self::clamp_point(at).to_index()].disc = disc;
    }

    /// Tiles adjacent to `at` (up to 8, fewer at edges and corners),
    /// in row-major order of their coordinates.
    pub fn neighbors(&self, at: TilePoint) -> Vec<Tile> {
        let mut out = Vec::with_capacity(8);
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = at.row as i32 + dr;
            let c = at.col as i32 + dc;
            if TilePoint::is_valid(r, c) {
                out.push(self.tile(TilePoint::new(r as u8, c as u8)));
            }
        }
        out
    }

    /// Iterate all 64 tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of discs of one color on the board.
    pub fn disc_count(&self, disc: Disc) -> usize {
        self.tiles.iter().filter(|t| t.disc == disc).count()
    }

    /// Total number of occupied tiles.
    pub fn occupied_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.disc != Disc::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
