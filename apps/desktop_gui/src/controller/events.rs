//! UI events produced by the backend worker and the surface that emits them.

use client_core::{ActivityCard, RosterSurface, StatusMessage};
use crossbeam_channel::Sender;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ActivitiesReplaced(Vec<ActivityCard>),
    ActivityOptionsReplaced(Vec<String>),
    LoadFailed(String),
    StatusShown(StatusMessage),
    StatusHidden,
    SignupFormReset,
    BackendUnavailable(String),
}

/// Roster surface living on the backend thread. Every call becomes a
/// [`UiEvent`] that the egui app drains on its next frame.
///
/// Each event replaces UI state, so none may be dropped: a full queue blocks
/// the sending task until the app drains it.
pub struct ChannelSurface {
    ui_tx: Sender<UiEvent>,
}

impl ChannelSurface {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }

    fn forward(&self, event: UiEvent) {
        if self.ui_tx.send(event).is_err() {
            tracing::debug!("ui event receiver closed");
        }
    }
}

impl RosterSurface for ChannelSurface {
    fn replace_activities(&self, cards: &[ActivityCard]) {
        self.forward(UiEvent::ActivitiesReplaced(cards.to_vec()));
    }

    fn replace_activity_options(&self, names: &[String]) {
        self.forward(UiEvent::ActivityOptionsReplaced(names.to_vec()));
    }

    fn show_load_failure(&self, message: &str) {
        self.forward(UiEvent::LoadFailed(message.to_string()));
    }

    fn show_status(&self, status: &StatusMessage) {
        self.forward(UiEvent::StatusShown(status.clone()));
    }

    fn hide_status(&self) {
        self.forward(UiEvent::StatusHidden);
    }

    fn reset_signup_form(&self) {
        self.forward(UiEvent::SignupFormReset);
    }
}
