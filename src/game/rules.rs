//! Flanking rules for Othello.
//!
//! A move is legal if, walking outward from the placed disc in some
//! direction, there is a contiguous run of one or more opponent discs
//! immediately followed by a disc of the mover's color. Every such run is
//! captured (flipped) when the move is applied.

use crate::board::{Board, Disc, TilePoint};

/// Direction vectors for flank scanning (cardinal + diagonal)
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Find every disc that would be flipped by placing `side` at `pt`.
///
/// Returns an empty vector when the tile is occupied or no direction forms
/// a flank. The result lists captured positions direction by direction,
/// nearest disc first within each direction.
pub fn flips_for(board: &Board, pt: TilePoint, side: Disc) -> Vec<TilePoint> {
    let mut flipped = Vec::new();
    if side == Disc::Empty || board.disc_at(pt) != Disc::Empty {
        return flipped;
    }
    let opponent = side.opponent();

    for (dr, dc) in DIRECTIONS {
        let mut run = Vec::new();
        let mut r = pt.row as i32 + dr;
        let mut c = pt.col as i32 + dc;

        // Walk over the contiguous opponent run
        while TilePoint::is_valid(r, c) && board.disc_at(TilePoint::new(r as u8, c as u8)) == opponent
        {
            run.push(TilePoint::new(r as u8, c as u8));
            r += dr;
            c += dc;
        }

        // The run is captured only if terminated by one of our own discs
        if !run.is_empty()
            && TilePoint::is_valid(r, c)
            && board.disc_at(TilePoint::new(r as u8, c as u8)) == side
        {
            flipped.append(&mut run);
        }
    }

    flipped
}

/// Check whether placing `side` at `pt` is a legal move.
#[inline]
pub fn is_legal_move(board: &Board, pt: TilePoint, side: Disc) -> bool {
    if side == Disc::Empty || board.disc_at(pt) != Disc::Empty {
        return false;
    }
    let opponent = side.opponent();

    for (dr, dc) in DIRECTIONS {
        let mut r = pt.row as i32 + dr;
        let mut c = pt.col as i32 + dc;
        let mut saw_opponent = false;

        while TilePoint::is_valid(r, c) {
            match board.disc_at(TilePoint::new(r as u8, c as u8)) {
                d if d == opponent => {
                    saw_opponent = true;
                    r += dr;
                    c += dc;
                }
                d if d == side => {
                    if saw_opponent {
                        return true;
                    }
                    break;
                }
                _ => break,
            }
        }
    }

    false
}

/// All legal moves for `side`, in row-major board scan order.
///
/// Never includes an occupied tile. Returns a fresh vector each call.
pub fn playable_tiles(board: &Board, side: Disc) -> Vec<TilePoint> {
    let mut moves = Vec::new();
    for tile in board.tiles() {
        if tile.disc == Disc::Empty && is_legal_move(board, tile.pos, side) {
            moves.push(tile.pos);
        }
    }
    moves
}

/// Whether `side` has at least one legal move.
#[inline]
pub fn has_any_move(board: &Board, side: Disc) -> bool {
    board
        .tiles()
        .any(|t| t.disc == Disc::Empty && is_legal_move(board, t.pos, side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_start_black_moves() {
        let board = Board::standard_setup();
        let moves = playable_tiles(&board, Disc::Black);

        assert_eq!(
            moves,
            vec![
                TilePoint::new(3, 4),
                TilePoint::new(4, 3),
                TilePoint::new(5, 6),
                TilePoint::new(6, 5),
            ]
        );
    }

    #[test]
    fn test_standard_start_white_moves() {
        let board = Board::standard_setup();
        let moves = playable_tiles(&board, Disc::White);

        assert_eq!(
            moves,
            vec![
                TilePoint::new(3, 5),
                TilePoint::new(4, 6),
                TilePoint::new(5, 3),
                TilePoint::new(6, 4),
            ]
        );
    }

    #[test]
    fn test_playable_tiles_never_occupied() {
        let board = Board::standard_setup();
        for side in [Disc::Black, Disc::White] {
            for pt in playable_tiles(&board, side) {
                assert_eq!(board.disc_at(pt), Disc::Empty);
            }
        }
    }

    #[test]
    fn test_flips_for_standard_opening_move() {
        let board = Board::standard_setup();
        let flipped = flips_for(&board, TilePoint::new(3, 4), Disc::Black);
        assert_eq!(flipped, vec![TilePoint::new(4, 4)]);
    }

    #[test]
    fn test_flips_for_occupied_tile_is_empty() {
        let board = Board::standard_setup();
        assert!(flips_for(&board, TilePoint::new(4, 4), Disc::Black).is_empty());
    }

    #[test]
    fn test_flips_require_own_disc_terminator() {
        // A run of opponent discs reaching the edge is not captured
        let mut board = Board::new();
        board.set_disc(TilePoint::new(1, 2), Disc::White);
        board.set_disc(TilePoint::new(1, 1), Disc::White);
        assert!(flips_for(&board, TilePoint::new(1, 3), Disc::Black).is_empty());
        assert!(!is_legal_move(&board, TilePoint::new(1, 3), Disc::Black));
    }

    #[test]
    fn test_flips_multiple_directions() {
        // Black at (4,4) flanks west and north runs simultaneously
        let mut board = Board::new();
        board.set_disc(TilePoint::new(4, 3), Disc::White);
        board.set_disc(TilePoint::new(4, 2), Disc::White);
        board.set_disc(TilePoint::new(4, 1), Disc::Black);
        board.set_disc(TilePoint::new(3, 4), Disc::White);
        board.set_disc(TilePoint::new(2, 4), Disc::Black);

        let mut flipped = flips_for(&board, TilePoint::new(4, 4), Disc::Black);
        flipped.sort();
        assert_eq!(
            flipped,
            vec![
                TilePoint::new(3, 4),
                TilePoint::new(4, 2),
                TilePoint::new(4, 3),
            ]
        );
    }

    #[test]
    fn test_adjacent_own_disc_is_not_a_flank() {
        let mut board = Board::new();
        board.set_disc(TilePoint::new(4, 4), Disc::Black);
        assert!(!is_legal_move(&board, TilePoint::new(4, 5), Disc::Black));
    }

    #[test]
    fn test_has_any_move_matches_playable_tiles() {
        let board = Board::standard_setup();
        assert!(has_any_move(&board, Disc::Black));
        assert!(has_any_move(&board, Disc::White));

        let empty = Board::new();
        assert!(!has_any_move(&empty, Disc::Black));
    }
}
