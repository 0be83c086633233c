// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main application state and per-frame wiring.
//!
//! The UI thread owns the widget, the selection machine, and the only
//! mutable display state. Each frame it copies a snapshot out of the
//! engine under one short lock, paints, then feeds the frame's pointer
//! events through the machine and completes the move request when a
//! full move falls out.

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use eframe::egui;
use parking_lot::Mutex;
use trichess_core::Game;

use crate::board_widget::BoardWidget;
use crate::geometry::SURFACE_SIZE;
use crate::input::{CursorHint, InputEvent, MoveInput, Outcome};
use crate::move_request::MoveRequest;
use crate::snapshot::BoardSnapshot;

/// Main application state.
pub struct App {
    /// Engine state shared with the game loop
    game: Arc<Mutex<Game>>,
    /// Move handoff shared with the game loop
    request: Arc<MoveRequest>,
    /// Board widget for rendering
    widget: BoardWidget,
    /// In-progress move selection
    input: MoveInput,
    /// Game loop thread handle for clean shutdown
    worker: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(
        game: Arc<Mutex<Game>>,
        request: Arc<MoveRequest>,
        players: [String; 3],
        worker: Option<JoinHandle<()>>,
    ) -> Self {
        Self {
            game,
            request,
            widget: BoardWidget::new(SURFACE_SIZE, players),
            input: MoveInput::new(),
            worker,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let armed = self.request.is_armed();
        if !armed {
            // a selection only exists while a move is being solicited
            self.input.clear();
        }
        let snap = {
            let game = self.game.lock();
            BoardSnapshot::capture(&*game, self.input.source())
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let events = self.widget.show(ui, &snap);
                let mut hover = None;
                for event in events {
                    if let InputEvent::PointerMoved(at) = event {
                        hover = at;
                    }
                    match self.input.on_event(armed, event, &snap) {
                        Outcome::MoveChosen { from, to } => {
                            if let Err(error) = self.request.complete(from, to) {
                                tracing::error!(%error, %from, %to, "failed to deliver selected move");
                            }
                        }
                        Outcome::IllegalAttempt { from, to } => {
                            tracing::warn!(%from, %to, "illegal move, try again");
                        }
                        Outcome::SourceChosen(source) => {
                            tracing::debug!(%source, "move source selected");
                        }
                        Outcome::SelectionCleared | Outcome::Idle => {}
                    }
                }
                if self.input.cursor_hint(armed, hover, &snap) == CursorHint::Pointer {
                    ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                }
            });

        if !snap.game_over {
            // the active player's clock counts down between input events
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Release a game loop blocked on a pending request, then join.
        self.request.close();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("game loop thread panicked");
            }
        }
    }
}
