//! Theme constants for the Othello GUI

use egui::Color32;

// Board colors - green felt
pub const BOARD_BG: Color32 = Color32::from_rgb(20, 95, 50);
pub const TILE_FILL: Color32 = Color32::from_rgb(30, 120, 65);
pub const TILE_BORDER: Color32 = Color32::from_rgb(12, 60, 32);

// Disc colors
pub const BLACK_DISC: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(75, 75, 85);
pub const WHITE_DISC: Color32 = Color32::from_rgb(248, 248, 250);
pub const WHITE_DISC_SHADOW: Color32 = Color32::from_rgb(185, 185, 190);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn legal_hint() -> Color32 {
    Color32::from_rgba_unmultiplied(250, 250, 210, 70)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const DISC_RADIUS_RATIO: f32 = 0.4;
pub const TILE_GAP: f32 = 2.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const HINT_RADIUS_RATIO: f32 = 0.16;
