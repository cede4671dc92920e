use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::RosterApp;

#[derive(Parser, Debug)]
#[command(name = "roster-gui", about = "Desktop window for activity rosters")]
struct Args {
    /// Base URL of the activities API. Overrides roster.toml and ROSTER_SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    tracing::info!(server_url = %settings.server_url, "starting roster gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mergington High School Activities")
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Mergington High School Activities",
        options,
        Box::new(|_cc| Ok(Box::new(RosterApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("gui event loop failed: {err}"))
}
