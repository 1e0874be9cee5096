//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::session::{GameMode, GameSession};
use super::theme::*;
use crate::Disc;

/// Main Othello application
pub struct OthelloApp {
    session: GameSession,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self {
            session: GameSession::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl OthelloApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Dark)").clicked() {
                        self.session = GameSession::new(GameMode::PvE {
                            human_color: Disc::Black,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Light)").clicked() {
                        self.session = GameSession::new(GameMode::PvE {
                            human_color: Disc::White,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.session = GameSession::new(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode {
                        GameMode::PvE { human_color } => {
                            format!(
                                "PvE - You: {}",
                                if human_color == Disc::Black { "Dark" } else { "Light" }
                            )
                        }
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.session.state.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("●○")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(180, 180, 185)),
            );
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Reversi").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.session.state.current_turn() == Disc::Black;
            let (disc_char, color_name, accent) = if is_black {
                ("●", "DARK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "LIGHT", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let disc_color = if is_black {
                    TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    disc_char,
                    egui::FontId::proportional(28.0),
                    disc_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.session.state.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.session.is_ai_turn() {
                        ("AI to move", TEXT_SECONDARY)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render disc-count score card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let black = self.session.state.disc_count(Disc::Black);
            let white = self.session.state.disc_count(Disc::White);

            self.render_score_row(ui, true, black, black >= white);
            ui.add_space(6.0);
            self.render_score_row(ui, false, white, white >= black);
        });
    }

    /// Render one score row with a disc icon and count
    fn render_score_row(&self, ui: &mut egui::Ui, is_black: bool, count: usize, leading: bool) {
        let (symbol, color, name) = if is_black {
            ("●", egui::Color32::from_rgb(60, 60, 65), "Dark")
        } else {
            ("○", egui::Color32::from_rgb(200, 200, 205), "Light")
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(symbol).size(18.0).color(color));
            ui.add_space(4.0);
            ui.label(RichText::new(name).size(12.0).color(TEXT_SECONDARY));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let text = if leading {
                    RichText::new(format!("{}", count)).size(16.0).strong().color(TEXT_PRIMARY)
                } else {
                    RichText::new(format!("{}", count)).size(16.0).color(TEXT_SECONDARY)
                };
                ui.label(text);
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if self.session.is_ai_thinking() {
                if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                    let secs = elapsed.as_secs_f32();
                    ui.label(
                        RichText::new(format!("{:.2}s", secs))
                            .size(28.0)
                            .strong()
                            .color(TIMER_WARNING),
                    );
                }
            } else {
                let elapsed = self.session.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.session.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui
                        .add(
                            egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        self.session.undo();
                    }
                });

                ui.add_space(4.0);

                if let GameMode::PvP = self.session.mode {
                    btn_frame.show(ui, |ui| {
                        if ui
                            .add(
                                egui::Label::new(
                                    RichText::new("Hint").size(12.0).color(TEXT_PRIMARY),
                                )
                                .sense(egui::Sense::click()),
                            )
                            .clicked()
                        {
                            self.session.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Move #{}", self.session.move_history.len()))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            });
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.session.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{} candidates", result.candidates))
                                    .size(11.0)
                                    .strong()
                                    .color(TIMER_NORMAL),
                            );
                            ui.label(
                                RichText::new(format!("Score: {}", result.score))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.label(
                                RichText::new(format!("{}ms", result.time_ms))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                    });

                    if let Some(pt) = result.best_move {
                        let col = (b'a' + pt.col - 1) as char;
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("-> {}{}", col, pt.row))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let black = self.session.state.disc_count(Disc::Black);
        let white = self.session.state.disc_count(Disc::White);
        let (winner, symbol, accent) = match self.session.state.winner() {
            Some(Disc::Black) => ("DARK", "●", egui::Color32::from_rgb(70, 70, 75)),
            Some(Disc::White) => ("LIGHT", "○", egui::Color32::from_rgb(220, 220, 225)),
            _ => ("TIE", "●○", egui::Color32::from_rgb(150, 150, 155)),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 60.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(winner).size(18.0).strong().color(TEXT_PRIMARY));
                            if winner != "TIE" {
                                ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                            }
                        });
                    });

                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} - {}", black, white))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui
                                .add(
                                    egui::Label::new(
                                        RichText::new("New Game")
                                            .size(14.0)
                                            .strong()
                                            .color(TEXT_PRIMARY),
                                    )
                                    .sense(egui::Sense::click()),
                                )
                                .clicked()
                            {
                                self.session.reset();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("!").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let legal_moves = self.session.legal_moves();
            let accepts_input = self.session.is_human_turn() && !self.session.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                self.session.state.board(),
                self.session.state.current_turn(),
                &legal_moves,
                self.session.last_move,
                self.session.suggested_move,
                self.session.state.is_game_over(),
                accepts_input,
            );

            if let Some(pt) = clicked {
                if let Err(msg) = self.session.try_place_disc(pt) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Get hint (PvP mode)
            if i.key_pressed(egui::Key::H) {
                if let GameMode::PvP = self.session.mode {
                    self.session.request_suggestion();
                }
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_input(ctx);

        // Check AI result
        self.session.check_ai_result();

        // Start AI thinking if needed
        if self.session.is_ai_turn()
            && !self.session.is_ai_thinking()
            && !self.session.state.is_game_over()
        {
            self.session.start_ai_thinking();
        }

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Request repaint while the AI is thinking
        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
