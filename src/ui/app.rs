//! Main application for the Blind Omok GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::{notation, BoardScene, BoardView};
use super::theme::*;
use crate::config::AiConfig;
use crate::controller::GameController;
use crate::session::HUMAN;
use crate::Stone;

/// Main Blind Omok application
pub struct OmokApp {
    controller: GameController,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for OmokApp {
    fn default() -> Self {
        Self::with_config(AiConfig::default())
    }
}

impl OmokApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AiConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: AiConfig) -> Self {
        Self {
            controller: GameController::new(config),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.controller.new_game();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: Black  |  AI depth {}", self.controller.config().depth));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.controller.is_revealed() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.controller.message() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("BLIND OMOK").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Stones stay hidden until the end").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let color = if self.controller.is_revealed() {
                WIN_HIGHLIGHT
            } else if self.controller.is_ai_thinking() {
                TIMER_WARNING
            } else {
                TIMER_NORMAL
            };
            ui.label(RichText::new(self.controller.status_text()).size(18.0).strong().color(color));
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.controller.ai_thinking_elapsed() {
                Some(elapsed) => {
                    let secs = elapsed.as_secs_f32();
                    let color = if secs < 0.5 {
                        TIMER_NORMAL
                    } else if secs < 1.0 {
                        TIMER_WARNING
                    } else {
                        TIMER_CRITICAL
                    };
                    ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
                }
                None => {
                    ui.label(RichText::new("-").size(24.0).color(TEXT_PRIMARY));
                }
            }

            if let Some(ai_time) = self.controller.last_ai_time() {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        let scores = self.controller.scores();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for (label, wins) in [("You", scores.get(Stone::Black)), ("AI", scores.get(Stone::White))] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(14.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(wins.to_string()).size(14.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(egui::Color32::from_rgb(50, 53, 58))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                let label = egui::Label::new(RichText::new("New Game").size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(label).clicked() {
                    self.controller.new_game();
                }
            });

            ui.add_space(8.0);
            let moves = self.controller.session().history().len();
            ui.label(RichText::new(format!("Move #{moves}")).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let config = self.controller.config();
                ui.label(RichText::new(format!("Depth: {}", config.depth)).size(10.0).color(TEXT_SECONDARY));
                ui.label(
                    RichText::new(format!("Game #{}", self.controller.session().generation() + 1))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );

                // Cell only; the color stays secret during play
                if let Some(event) = self.controller.last_event() {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Last move: {}", notation(event.pos)))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.controller.session().winner() {
            Some(winner) if winner == HUMAN => "YOU WIN!",
            Some(_) => "AI WINS!",
            None => "DRAW",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new("All stones revealed").size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY))
                                .sense(egui::Sense::click());
                            if ui.add(label).clicked() {
                                self.controller.new_game();
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let session = self.controller.session();
            let winning_line = session.winning_line();
            let accepting_input = !session.is_game_over()
                && !self.controller.is_ai_thinking()
                && session.current_player() == HUMAN;

            let scene = BoardScene {
                board: session.board(),
                revealed: self.controller.is_revealed(),
                last_move: session.last_move().map(|m| m.pos),
                winning_line: winning_line.as_deref(),
                accepting_input,
            };
            let clicked = self.board_view.show(ui, &scene);

            if let Some(pos) = clicked {
                self.controller.request_human_move(pos.row as usize, pos.col as usize);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_debug) = ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::D)));
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.controller.new_game();
        }
    }
}

impl eframe::App for OmokApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.controller.poll_ai();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.controller.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
