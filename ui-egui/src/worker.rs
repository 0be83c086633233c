// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game loop thread: solicit human moves and apply them to the engine.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use eframe::egui;
use parking_lot::Mutex;
use trichess_core::{Game, GameView};

use crate::move_request::{MoveCancelled, MoveRequest, RequestError};

/// Spawn the game loop thread.
pub fn spawn_game_loop(
    game: Arc<Mutex<Game>>,
    request: Arc<MoveRequest>,
    repaint: egui::Context,
) -> anyhow::Result<JoinHandle<()>> {
    let handle = thread::Builder::new()
        .name("game-loop".to_owned())
        .spawn(move || {
            if let Err(error) = run_game_loop(game, request, repaint) {
                tracing::error!(%error, "game loop stopped with an error");
            }
        })?;
    Ok(handle)
}

fn run_game_loop(
    game: Arc<Mutex<Game>>,
    request: Arc<MoveRequest>,
    repaint: egui::Context,
) -> anyhow::Result<()> {
    loop {
        if game.lock().game_over() {
            tracing::info!("game over, leaving the move loop");
            break;
        }
        let ticket = match request.arm() {
            Ok(ticket) => ticket,
            // display shut down between moves
            Err(RequestError::Closed) => break,
            Err(error) => return Err(error.into()),
        };
        repaint.request_repaint();

        let (from, to) = match ticket.wait() {
            Ok(pair) => pair,
            Err(MoveCancelled) => {
                tracing::info!("pending move request cancelled");
                break;
            }
        };
        {
            let mut game = game.lock();
            match game.apply_move(from, to) {
                Ok(()) => tracing::info!(%from, %to, "move applied"),
                Err(error) => tracing::warn!(%error, "engine rejected a delivered move"),
            }
        }
        repaint.request_repaint();
    }
    repaint.request_repaint();
    Ok(())
}
