// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-frame copy of the game state.
//!
//! The UI thread takes one short lock on the engine per frame, copies
//! everything the renderer and the input machine need, and lets go.
//! Nothing here aliases engine-owned data.

use std::time::Duration;

use trichess_core::position::BOARD_SQUARES;
use trichess_core::{Color, GameView, Piece, Position};

/// Read-only frame data pulled from a [`GameView`].
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub pieces: [Option<Piece>; BOARD_SQUARES],
    pub turn: Color,
    pub captured: [Vec<Piece>; 3],
    pub time_left: [Duration; 3],
    pub winner: Option<Color>,
    pub game_over: bool,
    pub show_legal_moves: bool,
    /// The square the user has picked as a move source, if any.
    pub selection: Option<Position>,
    /// Legal destinations of `selection`; all false when none is set.
    pub legal_targets: [bool; BOARD_SQUARES],
}

impl BoardSnapshot {
    /// Copy out everything the display needs for one frame.
    ///
    /// When a source square is selected this probes the oracle once per
    /// square; the board is 96 squares, so the probe stays cheap.
    pub fn capture<V: GameView + ?Sized>(view: &V, selection: Option<Position>) -> Self {
        let mut pieces = [None; BOARD_SQUARES];
        for pos in Position::all() {
            pieces[pos.ordinal()] = view.piece_at(pos);
        }
        let mut legal_targets = [false; BOARD_SQUARES];
        if let Some(from) = selection {
            for to in Position::all() {
                legal_targets[to.ordinal()] = view.is_legal_move(from, to);
            }
        }
        Self {
            pieces,
            turn: view.turn(),
            captured: Color::ALL.map(|c| view.captured(c).to_vec()),
            time_left: Color::ALL.map(|c| view.time_left(c)),
            winner: view.winner(),
            game_over: view.game_over(),
            show_legal_moves: view.show_legal_moves(),
            selection,
            legal_targets,
        }
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.pieces[pos.ordinal()]
    }

    /// Whether `to` is a legal destination of the selected source.
    pub fn legal_from_selection(&self, to: Position) -> bool {
        self.selection.is_some() && self.legal_targets[to.ordinal()]
    }
}
