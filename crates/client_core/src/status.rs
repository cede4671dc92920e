use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use tracing::debug;

use crate::surface::{RosterSurface, StatusMessage};

pub const DEFAULT_STATUS_HIDE_AFTER: Duration = Duration::from_secs(5);

/// Transient status region with an auto-hide timer per message.
///
/// Every shown message gets a fresh id. A hide timer only hides the area when
/// its message is still the latest one, so an older timer never clears a
/// newer message.
#[derive(Clone)]
pub struct StatusArea {
    surface: Arc<dyn RosterSurface>,
    hide_after: Duration,
    latest: Arc<AtomicU64>,
}

impl StatusArea {
    pub fn new(surface: Arc<dyn RosterSurface>, hide_after: Duration) -> Self {
        Self {
            surface,
            hide_after,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Shows `status` immediately and schedules its hide timer on the current
    /// tokio runtime. Returns the message id.
    pub fn show(&self, status: StatusMessage) -> u64 {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.surface.show_status(&status);

        let surface = Arc::clone(&self.surface);
        let latest = Arc::clone(&self.latest);
        let hide_after = self.hide_after;
        tokio::spawn(async move {
            tokio::time::sleep(hide_after).await;
            if latest.load(Ordering::SeqCst) == id {
                surface.hide_status();
            } else {
                debug!(id, "status hide timer superseded by a newer message");
            }
        });
        id
    }

    #[cfg(test)]
    pub(crate) fn latest_id(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub fn hide_after(&self) -> Duration {
        self.hide_after
    }
}

#[cfg(test)]
#[path = "tests/status_tests.rs"]
mod tests;
