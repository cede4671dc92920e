//! Backend worker thread: owns the tokio runtime and the roster client, and
//! turns queued UI commands into roster operations.

use std::{sync::Arc, thread};

use client_core::{ClientSettings, HttpActivitiesApi, RosterClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{ChannelSurface, UiEvent};

pub fn launch(
    settings: ClientSettings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let api = match HttpActivitiesApi::new(&settings.server_url) {
            Ok(api) => api,
            Err(err) => {
                tracing::error!(server_url = %settings.server_url, "unusable server url: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(err.to_string()));
                return;
            }
        };
        let client = Arc::new(RosterClient::new(
            Arc::new(api),
            Arc::new(ChannelSurface::new(ui_tx)),
            &settings,
        ));

        // The status hide timers are spawned on this runtime, so client calls
        // must run inside it.
        {
            let client = Arc::clone(&client);
            runtime.spawn(async move {
                client.start().await;
            });
        }

        // Each command runs as its own task so user actions can overlap.
        for cmd in cmd_rx.iter() {
            let client = Arc::clone(&client);
            runtime.spawn(async move { run_command(&client, cmd).await });
        }
        tracing::debug!("ui command queue closed; backend worker exiting");
    })
}

async fn run_command(client: &RosterClient, cmd: BackendCommand) {
    tracing::debug!(command = cmd.name(), "running backend command");
    match cmd {
        BackendCommand::LoadActivities => {
            client.load_activities().await;
        }
        BackendCommand::RemoveParticipant { activity, email } => {
            client.remove_participant(&activity, &email).await;
        }
        BackendCommand::SubmitSignup { activity, email } => {
            client.submit_signup(&activity, &email).await;
        }
    }
}
