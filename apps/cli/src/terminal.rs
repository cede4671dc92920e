//! Plain-text rendition of the roster surface.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use client_core::{
    render::NO_PARTICIPANTS_PLACEHOLDER, ActivityCard, ParticipantList, RosterSurface,
    StatusMessage,
};

pub struct TerminalSurface {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalSurface {
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn emit(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

pub fn format_card(card: &ActivityCard) -> String {
    let mut text = format!(
        "{}\n  {}\n  Schedule: {}\n  Availability: {}\n  Participants:\n",
        card.name,
        card.description,
        card.schedule,
        card.availability()
    );
    match &card.participants {
        ParticipantList::Placeholder => {
            text.push_str(&format!("    {NO_PARTICIPANTS_PLACEHOLDER}\n"));
        }
        ParticipantList::Rows(rows) => {
            for row in rows {
                text.push_str(&format!("    [{}] {}\n", row.initial, row.email));
            }
        }
    }
    text
}

pub fn format_status(status: &StatusMessage) -> String {
    format!("[{}] {}\n", status.kind.class_name(), status.text)
}

impl RosterSurface for TerminalSurface {
    fn replace_activities(&self, cards: &[ActivityCard]) {
        let text = cards
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join("\n");
        self.emit(&text);
    }

    fn replace_activity_options(&self, names: &[String]) {
        self.emit(&format!("\nSign up for: {}\n", names.join(", ")));
    }

    fn show_load_failure(&self, message: &str) {
        self.emit(&format!("{message}\n"));
    }

    fn show_status(&self, status: &StatusMessage) {
        self.emit(&format_status(status));
    }

    // Printed lines stay on screen; there is nothing to hide or clear.
    fn hide_status(&self) {}

    fn reset_signup_form(&self) {}
}
