//! Board representation for Othello

pub mod grid;


// Re-exports
pub use grid::{Board, Tile};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_TILES: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Disc colors / tile occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Empty,
    White,
    Black,
}

impl Disc {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Disc {
        match self {
            Disc::White => Disc::Black,
            Disc::Black => Disc::White,
            Disc::Empty => Disc::Empty,
        }
    }
}

/// Position on the board, 1-indexed: rows and columns run from 1 to 8.
///
/// The backing tile array is 0-indexed; `to_index`/`from_index` are the only
/// places where the two coordinate systems meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePoint {
    pub row: u8,
    pub col: u8,
}

impl TilePoint {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(
            (1..=BOARD_SIZE as u8).contains(&row) && (1..=BOARD_SIZE as u8).contains(&col)
        );
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        (self.row as usize - 1) * BOARD_SIZE + (self.col as usize - 1)
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8 + 1,
            col: (idx % BOARD_SIZE) as u8 + 1,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 1 && row <= BOARD_SIZE as i32 && col >= 1 && col <= BOARD_SIZE as i32
    }
}

impl PartialOrd for TilePoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TilePoint {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
