//! View model built from an activity collection.
//!
//! Every load produces a complete set of [`ActivityCard`]s which replaces
//! whatever the surface showed before; nothing here is patched in place.

use shared::domain::{Activity, ActivityCollection, SignupRequest};

pub const NO_PARTICIPANTS_PLACEHOLDER: &str = "No participants yet.";
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load activities. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: ParticipantList,
}

impl ActivityCard {
    pub fn from_activity(name: &str, activity: &Activity) -> Self {
        let participants = if activity.participants.is_empty() {
            ParticipantList::Placeholder
        } else {
            ParticipantList::Rows(
                activity
                    .participants
                    .iter()
                    .map(|email| ParticipantRow::new(email))
                    .collect(),
            )
        };

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    /// Number of rows the participants sub-list shows, placeholder included.
    pub fn row_count(&self) -> usize {
        match &self.participants {
            ParticipantList::Placeholder => 1,
            ParticipantList::Rows(rows) => rows.len(),
        }
    }

    /// The unregister request a row's removal control sends.
    pub fn removal_request(&self, row: &ParticipantRow) -> SignupRequest {
        SignupRequest::new(self.name.clone(), row.email.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantList {
    /// Single "No participants yet." entry.
    Placeholder,
    Rows(Vec<ParticipantRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub initial: String,
    pub email: String,
}

impl ParticipantRow {
    pub fn new(email: &str) -> Self {
        Self {
            initial: participant_initial(email),
            email: email.to_string(),
        }
    }
}

/// Upper-cased first character of the trimmed email; empty for a blank email.
pub fn participant_initial(email: &str) -> String {
    email
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

pub fn render_cards(collection: &ActivityCollection) -> Vec<ActivityCard> {
    collection
        .iter()
        .map(|(name, activity)| ActivityCard::from_activity(name, activity))
        .collect()
}

pub fn activity_options(collection: &ActivityCollection) -> Vec<String> {
    collection.names().map(str::to_string).collect()
}
