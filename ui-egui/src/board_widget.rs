// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board widget for rendering the three-sector board.
//!
//! Draws the full frame (squares, highlights, glyphs, coordinate
//! labels, player panels) from a [`BoardSnapshot`] and turns the
//! response's pointer state into [`InputEvent`]s. Painting is
//! idempotent; nothing here mutates game state.

use std::sync::Arc;

use eframe::egui::epaint::{Galley, TextShape};
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use trichess_core::{Color, Piece, Position};

use crate::geometry::BoardGeometry;
use crate::input::{Button, InputEvent};
use crate::snapshot::BoardSnapshot;

const LABEL_FONT_SIZE: f32 = 16.0;
const NAME_FONT_SIZE: f32 = 24.0;
const PIECE_FONT_SIZE: f32 = 32.0;
const CAPTURED_FONT_SIZE: f32 = 24.0;
const NAME_MAX_LEN: usize = 20;
const CAPTURED_PER_ROW: usize = 11;
const BORDER_WIDTH: f32 = 3.0;
const BACKGROUND: Color32 = Color32::from_rgb(211, 211, 211);

/// Text and piece tone for a player.
fn dark_tone(color: Color) -> Color32 {
    match color {
        Color::Blue => Color32::from_rgb(0, 0, 127),
        Color::Green => Color32::from_rgb(0, 127, 0),
        Color::Red => Color32::from_rgb(127, 0, 0),
    }
}

/// Fill for even-parity squares of a sector.
fn bright_tone(color: Color) -> Color32 {
    match color {
        Color::Blue => Color32::from_rgb(102, 102, 255),
        Color::Green => Color32::from_rgb(102, 255, 102),
        Color::Red => Color32::from_rgb(255, 102, 102),
    }
}

/// Fill for odd-parity squares; also the glyph outline tone.
fn light_tone(color: Color) -> Color32 {
    match color {
        Color::Blue => Color32::from_rgb(204, 204, 255),
        Color::Green => Color32::from_rgb(204, 255, 204),
        Color::Red => Color32::from_rgb(255, 204, 204),
    }
}

fn truncate_name(name: String, max: usize) -> String {
    if name.chars().count() > max {
        name.chars().take(max).collect()
    } else {
        name
    }
}

/// Captured glyphs wrapped into fixed-width rows, capture order kept.
fn roster_rows(pieces: &[Piece]) -> std::slice::Chunks<'_, Piece> {
    pieces.chunks(CAPTURED_PER_ROW)
}

/// Widget for rendering and interacting with the board surface.
pub struct BoardWidget {
    geometry: BoardGeometry,
    size: f32,
    players: [String; 3],
}

impl BoardWidget {
    pub fn new(size: f32, players: [String; 3]) -> Self {
        Self {
            geometry: BoardGeometry::new(size),
            size,
            players: players.map(|name| truncate_name(name, NAME_MAX_LEN)),
        }
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Allocate the fixed surface, paint the frame, and report the
    /// pointer events that happened over it.
    pub fn show(&self, ui: &mut egui::Ui, snap: &BoardSnapshot) -> Vec<InputEvent> {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), Sense::click());
        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, snap);
        }
        self.events(rect, &response)
    }

    fn events(&self, rect: Rect, response: &egui::Response) -> Vec<InputEvent> {
        let resolve = |p: Pos2| self.geometry.square_at(p - rect.min.to_vec2());
        let mut events = vec![InputEvent::PointerMoved(
            response.hover_pos().and_then(resolve),
        )];
        for (egui_button, button) in [
            (egui::PointerButton::Primary, Button::Primary),
            (egui::PointerButton::Secondary, Button::Secondary),
            (egui::PointerButton::Middle, Button::Middle),
        ] {
            if response.clicked_by(egui_button) {
                let at = response.interact_pointer_pos().and_then(resolve);
                tracing::debug!(?button, ?at, "board click");
                events.push(InputEvent::Released { button, at });
            }
        }
        events
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect, snap: &BoardSnapshot) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);
        let origin = rect.min.to_vec2();
        for pos in Position::all() {
            self.paint_square(&painter, origin, pos, snap);
        }
        self.paint_coordinate_labels(&painter, origin);
        for color in Color::ALL {
            self.paint_player_panel(&painter, origin, color, snap);
        }
    }

    fn paint_square(
        &self,
        painter: &egui::Painter,
        origin: Vec2,
        pos: Position,
        snap: &BoardSnapshot,
    ) {
        let poly = self.geometry.square(pos);
        let corners: Vec<Pos2> = poly.corners.iter().map(|c| *c + origin).collect();
        let sector = pos.sector();
        let fill = if pos.even_parity() {
            bright_tone(sector)
        } else {
            light_tone(sector)
        };
        painter.add(Shape::convex_polygon(corners.clone(), fill, Stroke::NONE));

        if snap.show_legal_moves && snap.legal_from_selection(pos) {
            let inset: Vec<Pos2> = poly.highlight.iter().map(|c| *c + origin).collect();
            painter.add(Shape::closed_line(
                inset,
                Stroke::new(BORDER_WIDTH, Color32::WHITE),
            ));
        }
        painter.add(Shape::closed_line(
            corners,
            Stroke::new(BORDER_WIDTH, Color32::BLACK),
        ));

        if let Some(piece) = snap.piece_at(pos) {
            let centre = poly.centre + origin;
            let glyph = piece.kind.glyph().to_string();
            let font = FontId::proportional(PIECE_FONT_SIZE);
            let outline = if snap.selection == Some(pos) {
                Color32::WHITE
            } else {
                light_tone(sector)
            };
            // Outline-then-fill keeps glyphs readable on either parity.
            for dx in -1..=1 {
                for dy in -1..=1 {
                    if dx != 0 || dy != 0 {
                        painter.text(
                            centre + Vec2::new(dx as f32, dy as f32),
                            Align2::CENTER_CENTER,
                            &glyph,
                            font.clone(),
                            outline,
                        );
                    }
                }
            }
            painter.text(
                centre,
                Align2::CENTER_CENTER,
                &glyph,
                font,
                dark_tone(piece.owner),
            );
        }
    }

    /// File letters and rank digits along each sector's edges. The
    /// fractions are the fixed layout of the board outline in twentieth
    /// (`h`) and `h * sqrt(3)` (`v`) units.
    fn paint_coordinate_labels(&self, painter: &egui::Painter, origin: Vec2) {
        let h = self.size / 20.0;
        let v = h * 3.0f32.sqrt();
        let font = FontId::proportional(LABEL_FONT_SIZE);
        let text = |x: f32, y: f32, label: &str, color: Color| {
            painter.text(
                Pos2::new(x, y) + origin,
                Align2::LEFT_BOTTOM,
                label,
                font.clone(),
                dark_tone(color),
            );
        };
        for i in 0..8 {
            let label = ((b'A' + i as u8) as char).to_string();
            let fi = i as f32;
            text((27.0 - 2.0 * fi) * h / 2.0, 15.0 * v / 8.0, &label, Color::Blue);
            text((7.0 + 2.0 * fi) * h / 4.0, (13.0 + fi) * v / 2.0, &label, Color::Red);
            text((29.0 + fi) * h / 2.0, (20.0 - fi) * v / 2.0, &label, Color::Green);
        }
        for i in 0..4 {
            let label = (i + 1).to_string();
            let fi = i as f32;
            text((21.0 - 2.0 * fi) * h / 4.0, (9.0 + 2.0 * fi) * v / 4.0, &label, Color::Blue);
            text((29.0 + fi) * h / 2.0, (9.0 + 2.0 * fi) * v / 4.0, &label, Color::Blue);
            text((7.0 + 2.0 * fi) * h / 4.0, (23.0 - 2.0 * fi) * v / 4.0, &label, Color::Red);
            text((13.0 + 2.0 * fi) * h / 2.0, 83.0 * v / 8.0, &label, Color::Red);
            text((27.0 - 2.0 * fi) * h / 2.0, 83.0 * v / 8.0, &label, Color::Green);
            text((36.0 - fi) * h / 2.0, (23.0 - 2.0 * fi) * v / 4.0, &label, Color::Green);
        }
    }

    /// One rotated panel per player: name, clock seconds, turn marker,
    /// winner emphasis, and the wrapped captured roster.
    fn paint_player_panel(
        &self,
        painter: &egui::Painter,
        origin: Vec2,
        color: Color,
        snap: &BoardSnapshot,
    ) {
        let h = self.size / 20.0;
        let v = h * 3.0f32.sqrt();
        let (anchor, angle) = match color {
            Color::Blue => (Pos2::new(self.size / 2.0, 1.25 * v), 0.0),
            Color::Green => (Pos2::new(17.0 * h, 8.5 * v), -std::f32::consts::FRAC_PI_3),
            Color::Red => (Pos2::new(3.0 * h, 8.5 * v), std::f32::consts::FRAC_PI_3),
        };
        let center = anchor + origin;
        let tone = dark_tone(color);
        let is_winner = snap.winner == Some(color);
        let is_active = !snap.game_over && snap.turn == color;

        let title = format!(
            "{}: {}",
            self.players[color.index()],
            snap.time_left[color.index()].as_secs()
        );
        let name_font = FontId::proportional(NAME_FONT_SIZE);
        let galley = painter.layout_no_wrap(title, name_font.clone(), tone);
        let name_size = galley.size();
        rotated_galley(painter, center, angle, Vec2::ZERO, galley.clone());
        if is_winner {
            // Only one proportional face ships by default; emulate the
            // bold cut by over-painting with a sub-pixel offset.
            rotated_galley(painter, center, angle, Vec2::new(0.6, 0.0), galley);
        }
        if is_active {
            let star = painter.layout_no_wrap("*".to_owned(), name_font, tone);
            let offset = Vec2::new(-(name_size.x + star.size().x) / 2.0, 0.0);
            rotated_galley(painter, center, angle, offset, star);
        }

        // Blue's roster grows upward, away from the board; the others
        // grow downward.
        let row_advance = if color == Color::Blue { -1.0 } else { 1.0 };
        let glyph_font = FontId::proportional(CAPTURED_FONT_SIZE);
        for (row_idx, row) in roster_rows(&snap.captured[color.index()]).enumerate() {
            let galleys: Vec<Arc<Galley>> = row
                .iter()
                .map(|piece| {
                    painter.layout_no_wrap(
                        piece.kind.glyph().to_string(),
                        glyph_font.clone(),
                        dark_tone(piece.owner),
                    )
                })
                .collect();
            let row_width: f32 = galleys.iter().map(|g| g.size().x).sum();
            let row_height = galleys.iter().map(|g| g.size().y).fold(0.0, f32::max);
            let row_y = row_advance * row_height * (row_idx as f32 + 1.0);
            let mut x = -row_width / 2.0;
            for galley in galleys {
                let w = galley.size().x;
                rotated_galley(painter, center, angle, Vec2::new(x + w / 2.0, row_y), galley);
                x += w;
            }
        }
    }
}

/// Paint a galley centred `local` away from `center`, rotated with the
/// panel. `TextShape` rotates around its anchor, so the anchor is the
/// galley's rotated top-left corner.
fn rotated_galley(
    painter: &egui::Painter,
    center: Pos2,
    angle: f32,
    local: Vec2,
    galley: Arc<Galley>,
) {
    let (sin, cos) = angle.sin_cos();
    let top_left = local - galley.size() / 2.0;
    let rotated = Vec2::new(
        cos * top_left.x - sin * top_left.y,
        sin * top_left.x + cos * top_left.y,
    );
    let mut shape = TextShape::new(center + rotated, galley, Color32::BLACK);
    shape.angle = angle;
    painter.add(shape);
}

#[cfg(test)]
mod tests {
    use super::*;
    use trichess_core::PieceType;

    #[test]
    fn roster_wraps_at_eleven_glyphs_per_row() {
        let pieces: Vec<Piece> = (0..23)
            .map(|i| {
                Piece::new(
                    if i % 2 == 0 { PieceType::Pawn } else { PieceType::Rook },
                    Color::ALL[i % 3],
                )
            })
            .collect();
        let rows: Vec<&[Piece]> = roster_rows(&pieces).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 11);
        assert_eq!(rows[1].len(), 11);
        assert_eq!(rows[2].len(), 1);
        // capture order is preserved across the wrap
        assert_eq!(rows[1][0], pieces[11]);
        assert_eq!(rows[2][0], pieces[22]);
    }

    #[test]
    fn empty_roster_has_no_rows() {
        assert_eq!(roster_rows(&[]).count(), 0);
    }

    #[test]
    fn long_names_are_truncated() {
        let name = "abcdefghijklmnopqrstuvwxyz".to_owned();
        assert_eq!(truncate_name(name, NAME_MAX_LEN).len(), 20);
        assert_eq!(truncate_name("short".to_owned(), NAME_MAX_LEN), "short");
    }
}
