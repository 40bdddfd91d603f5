//! Board rendering for the Blind Omok GUI

use crate::{Board, Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view needs to draw one frame
pub struct BoardScene<'a> {
    pub board: &'a Board,
    /// Show stone colors (game over)
    pub revealed: bool,
    pub last_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Whether clicks should be reported
    pub accepting_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, scene.board, scene.revealed);

        if let Some(pos) = scene.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = scene.winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked_pos = None;

        if scene.accepting_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = scene.board.is_empty(board_pos);
                    self.draw_hover_preview(&painter, board_pos, is_valid);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (A-O, 1-15)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..BOARD_SIZE {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

            let top = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let bottom = Pos2::new(x, self.board_rect.max.y - 12.0);
            painter.text(bottom, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        // Row labels (15-1, displayed top to bottom)
        for row in 0..BOARD_SIZE {
            let label = row_label(row as u8);
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            let left = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            let right = Pos2::new(self.board_rect.max.x - 12.0, y);
            painter.text(right, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board, revealed: bool) {
        for pos in Pos::all() {
            let stone = board.get(pos);
            if stone == Stone::Empty {
                continue;
            }
            if revealed {
                self.draw_stone(painter, pos, stone);
            } else {
                self.draw_hidden_stone(painter, pos);
            }
        }
    }

    /// Occupied cell whose color is not disclosed yet
    fn draw_hidden_stone(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 50),
        );
        painter.circle_filled(center, radius, HIDDEN_STONE);
        painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, HIDDEN_STONE_RIM));
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    /// Neutral preview: the human never sees colors during play
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let color = if is_valid { hover_valid() } else { hover_invalid() };
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        if x < 0.0 || y < 0.0 {
            return None;
        }
        Pos::try_new(y.floor() as usize, x.floor() as usize)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Board notation for a cell, e.g. `H8` for the center
pub fn notation(pos: Pos) -> String {
    format!("{}{}", (b'A' + pos.col) as char, row_label(pos.row))
}

fn row_label(row: u8) -> String {
    (BOARD_SIZE - row as usize).to_string()
}
