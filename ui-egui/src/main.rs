// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the trichess display.

use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use eframe::egui;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;
use trichess_core::Game;

use trichess_ui_egui::app::App;
use trichess_ui_egui::geometry::SURFACE_SIZE;
use trichess_ui_egui::move_request::MoveRequest;
use trichess_ui_egui::worker;

#[derive(Parser)]
#[command(name = "trichess")]
#[command(about = "Three-player chess board with mouse-driven move entry")]
struct Args {
    /// Name shown on the blue player's panel
    #[arg(long, default_value = "Blue")]
    blue: String,

    /// Name shown on the green player's panel
    #[arg(long, default_value = "Green")]
    green: String,

    /// Name shown on the red player's panel
    #[arg(long, default_value = "Red")]
    red: String,

    /// Starting clock per player, in seconds
    #[arg(long, default_value_t = 600)]
    clock_secs: u64,

    /// Do not mark legal destinations of the selected piece
    #[arg(long)]
    hide_legal_moves: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let game = Arc::new(Mutex::new(Game::new(
        Duration::from_secs(args.clock_secs),
        !args.hide_legal_moves,
    )));
    let request = Arc::new(MoveRequest::new());
    let players = [args.blue, args.green, args.red];

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([SURFACE_SIZE, SURFACE_SIZE])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "trichess",
        options,
        Box::new(move |cc| {
            let worker =
                worker::spawn_game_loop(game.clone(), request.clone(), cc.egui_ctx.clone())
                    .map_err(|error| tracing::error!(%error, "failed to spawn the game loop"))
                    .ok();
            Box::new(App::new(game, request, players, worker))
        }),
    )
    .map_err(|e| anyhow!("failed to run eframe: {e}"))
}
