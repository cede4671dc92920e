use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, HttpActivitiesApi, LoadOutcome, RemovalOutcome, RosterClient, SignupOutcome,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::TerminalSurface;

#[derive(Parser, Debug)]
#[command(name = "roster", about = "Browse and edit activity rosters")]
struct Args {
    /// Base URL of the activities API. Overrides roster.toml and ROSTER_SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every activity with its participants.
    List,
    /// Sign a participant up for an activity.
    Signup {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
    /// Remove a participant from an activity.
    Unregister {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    debug!(server_url = %settings.server_url, "using activities API");

    let api = HttpActivitiesApi::new(&settings.server_url)
        .with_context(|| format!("cannot use server url '{}'", settings.server_url))?;
    let client = RosterClient::new(
        Arc::new(api),
        Arc::new(TerminalSurface::stdout()),
        &settings,
    );

    let succeeded = match args.command {
        Command::List => matches!(client.start().await, LoadOutcome::Rendered { .. }),
        Command::Signup { activity, email } => {
            client.submit_signup(&activity, &email).await == SignupOutcome::SignedUp
        }
        Command::Unregister { activity, email } => {
            client.remove_participant(&activity, &email).await == RemovalOutcome::Removed
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
