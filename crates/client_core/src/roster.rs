use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError,
    },
    time::Duration,
};

use shared::domain::SignupRequest;
use tracing::{debug, error, info};

use crate::{
    api::ActivitiesApi,
    config::ClientSettings,
    error::RosterError,
    render::{activity_options, render_cards, LOAD_FAILURE_MESSAGE},
    status::StatusArea,
    surface::{RosterSurface, StatusMessage},
};

pub const SIGNUP_FAILURE_MESSAGE: &str = "Failed to sign up. Please try again.";
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const UNREGISTER_REJECTED_FALLBACK: &str = "Failed to unregister participant";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { activities: usize },
    Failed,
    /// A response from a later load was already rendered; this one was dropped.
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    SignedUp,
    Rejected,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    Rejected,
    Failed,
}

/// Activity roster client bound to one API and one UI surface.
///
/// All user actions may overlap. Mutations are never deduplicated; loads are
/// ordered by ticket so that a slow, older response cannot overwrite a newer
/// render.
pub struct RosterClient {
    api: Arc<dyn ActivitiesApi>,
    surface: Arc<dyn RosterSurface>,
    status: StatusArea,
    issued_loads: AtomicU64,
    rendered_load: Mutex<u64>,
}

impl RosterClient {
    pub fn new(
        api: Arc<dyn ActivitiesApi>,
        surface: Arc<dyn RosterSurface>,
        settings: &ClientSettings,
    ) -> Self {
        Self::with_status_hide_after(api, surface, settings.status_hide_after)
    }

    pub fn with_status_hide_after(
        api: Arc<dyn ActivitiesApi>,
        surface: Arc<dyn RosterSurface>,
        status_hide_after: Duration,
    ) -> Self {
        let status = StatusArea::new(Arc::clone(&surface), status_hide_after);
        Self {
            api,
            surface,
            status,
            issued_loads: AtomicU64::new(0),
            rendered_load: Mutex::new(0),
        }
    }

    /// Initial fetch-and-render cycle.
    pub async fn start(&self) -> LoadOutcome {
        info!("starting activity roster");
        self.load_activities().await
    }

    /// Fetches the whole collection and replaces the cards and the activity
    /// options with it. Failures are logged and shown as a static message.
    pub async fn load_activities(&self) -> LoadOutcome {
        let ticket = self.issued_loads.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(ticket, "loading activities");

        let result = self.api.list_activities().await;
        if let Err(err) = &result {
            error!(ticket, error = %err, "error fetching activities");
        }

        let mut rendered = self
            .rendered_load
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *rendered > ticket {
            debug!(ticket, rendered = *rendered, "dropping superseded activities response");
            return LoadOutcome::Superseded;
        }
        *rendered = ticket;

        match result {
            Ok(collection) => {
                let cards = render_cards(&collection);
                self.surface.replace_activities(&cards);
                self.surface
                    .replace_activity_options(&activity_options(&collection));
                LoadOutcome::Rendered {
                    activities: cards.len(),
                }
            }
            Err(_) => {
                self.surface.show_load_failure(LOAD_FAILURE_MESSAGE);
                LoadOutcome::Failed
            }
        }
    }

    /// Unregisters `email` from `activity` and reloads on success. Failures
    /// are only logged.
    pub async fn remove_participant(&self, activity: &str, email: &str) -> RemovalOutcome {
        let request = SignupRequest::new(activity, email);
        match self.api.unregister(&request).await {
            Ok(()) => {
                info!(activity, email, "participant unregistered");
                self.load_activities().await;
                RemovalOutcome::Removed
            }
            Err(err @ RosterError::Rejected { .. }) => {
                error!(
                    activity,
                    email,
                    detail = err.detail().unwrap_or(UNREGISTER_REJECTED_FALLBACK),
                    "error unregistering participant"
                );
                RemovalOutcome::Rejected
            }
            Err(err) => {
                error!(activity, email, error = %err, "error unregistering participant");
                RemovalOutcome::Failed
            }
        }
    }

    /// Signs `email` up for `activity` and reports the outcome in the status
    /// area. On success the form is cleared and the list reloaded.
    pub async fn submit_signup(&self, activity: &str, email: &str) -> SignupOutcome {
        let request = SignupRequest::new(activity, email);
        match self.api.signup(&request).await {
            Ok(response) => {
                self.status.show(StatusMessage::success(response.message));
                self.surface.reset_signup_form();
                self.load_activities().await;
                SignupOutcome::SignedUp
            }
            Err(err @ RosterError::Rejected { .. }) => {
                debug!(activity, email, error = %err, "signup rejected");
                self.status.show(StatusMessage::error(
                    err.detail().unwrap_or(SIGNUP_REJECTED_FALLBACK),
                ));
                SignupOutcome::Rejected
            }
            Err(err) => {
                error!(activity, email, error = %err, "error signing up");
                self.status.show(StatusMessage::error(SIGNUP_FAILURE_MESSAGE));
                SignupOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/roster_tests.rs"]
mod tests;
