//! Board rendering for the Othello GUI

use crate::{Board, Disc, TilePoint, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board.
///
/// It also owns the pixel<->board coordinate transforms: the cell size is
/// recomputed from the available pane each frame, and `screen_to_board` /
/// `board_to_screen` convert between click positions and tile coordinates.
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked tile, if any
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Disc,
        legal_moves: &[TilePoint],
        last_move: Option<TilePoint>,
        suggested_move: Option<TilePoint>,
        game_over: bool,
        accepts_input: bool,
    ) -> Option<TilePoint> {
        let available_size = ui.available_size();

        // Fit the board into the available pane, preserving aspect ratio
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        // Draw the 64 tiles
        self.draw_tiles(&painter, board);

        // Draw coordinate labels
        self.draw_coordinates(&painter);

        // Draw legal move hints for the side to move
        if !game_over {
            for &pt in legal_moves {
                self.draw_legal_hint(&painter, pt);
            }
        }

        // Draw last move marker
        if let Some(pt) = last_move {
            self.draw_last_move_marker(&painter, pt);
        }

        // Draw suggested move
        if let Some(pt) = suggested_move {
            self.draw_suggestion(&painter, pt, current_turn);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !game_over && accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = legal_moves.contains(&board_pos);

                    self.draw_hover_preview(&painter, board_pos, current_turn, is_valid);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 8x8 tile grid with placed discs
    fn draw_tiles(&self, painter: &Painter, board: &Board) {
        for tile in board.tiles() {
            let rect = self.tile_rect(tile.pos);
            painter.rect_filled(rect.shrink(TILE_GAP / 2.0), CornerRadius::same(2), TILE_FILL);
            painter.rect_stroke(
                rect,
                CornerRadius::ZERO,
                Stroke::new(1.0, TILE_BORDER),
                egui::StrokeKind::Inside,
            );

            if tile.disc != Disc::Empty {
                self.draw_disc(painter, tile.pos, tile.disc);
            }
        }
    }

    /// Draw coordinate labels (a-h, 1-8)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        // Column labels (a-h) along the top
        for col in 1..=BOARD_SIZE as u8 {
            let letter = (b'a' + col - 1) as char;
            let center = self.board_to_screen(TilePoint::new(1, col));
            let pos = Pos2::new(center.x, self.board_rect.min.y + 10.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), TEXT_MUTED);
        }

        // Row labels (1-8) along the left
        for row in 1..=BOARD_SIZE as u8 {
            let center = self.board_to_screen(TilePoint::new(row, 1));
            let pos = Pos2::new(self.board_rect.min.x + 10.0, center.y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{}", row),
                font.clone(),
                TEXT_MUTED,
            );
        }
    }

    /// Draw a single disc with visual polish
    fn draw_disc(&self, painter: &Painter, pt: TilePoint, disc: Disc) {
        let center = self.board_to_screen(pt);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        match disc {
            Disc::Black => {
                // Shadow
                painter.circle_filled(
                    center + Vec2::new(2.0, 2.0),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );

                // Main disc
                painter.circle_filled(center, radius, BLACK_DISC);

                // Highlight
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Disc::White => {
                // Shadow
                painter.circle_filled(
                    center + Vec2::new(2.0, 2.0),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );

                // Main disc
                painter.circle_filled(center, radius, WHITE_DISC);

                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_DISC_SHADOW),
                );
            }
            Disc::Empty => {}
        }
    }

    /// Draw a legal-move hint dot
    fn draw_legal_hint(&self, painter: &Painter, pt: TilePoint) {
        let center = self.board_to_screen(pt);
        painter.circle_filled(center, self.cell_size * HINT_RADIUS_RATIO, legal_hint());
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pt: TilePoint) {
        let center = self.board_to_screen(pt);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pt: TilePoint, turn: Disc) {
        let center = self.board_to_screen(pt);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        let color = match turn {
            Disc::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 100),
            Disc::White => Color32::from_rgba_unmultiplied(240, 240, 240, 100),
            Disc::Empty => return,
        };

        painter.circle_filled(center, radius, color);

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(14.0),
            if turn == Disc::Black { WHITE_DISC } else { BLACK_DISC },
        );
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pt: TilePoint, turn: Disc, is_valid: bool) {
        let center = self.board_to_screen(pt);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Disc::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Disc::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Disc::Empty => return,
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Screen rectangle covering one tile
    fn tile_rect(&self, pt: TilePoint) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + (pt.col - 1) as f32 * self.cell_size,
                BOARD_MARGIN + (pt.row - 1) as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<TilePoint> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32 + 1;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32 + 1;

        if TilePoint::is_valid(row, col) {
            Some(TilePoint::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert a board position to the screen center of its tile
    pub fn board_to_screen(&self, pt: TilePoint) -> Pos2 {
        self.tile_rect(pt).center()
    }
}
