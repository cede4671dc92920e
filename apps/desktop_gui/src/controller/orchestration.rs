//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub const QUEUE_FULL_MESSAGE: &str = "UI command queue is full; please retry";
pub const BACKEND_DISCONNECTED_MESSAGE: &str =
    "Backend worker is not running (possible startup failure); restart the app";

/// Queues `cmd` for the backend thread. Queue problems are reported through
/// `queue_status`, which the app shows under the signup form.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    queue_status: &mut Option<String>,
) {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *queue_status = Some(QUEUE_FULL_MESSAGE.to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            *queue_status = Some(BACKEND_DISCONNECTED_MESSAGE.to_string());
        }
    }
}
