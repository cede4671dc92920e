//! Client side of the activity roster: talks to the activities HTTP API and
//! drives an injected UI surface (activity cards, signup form, status area).

pub mod api;
pub mod config;
pub mod error;
pub mod render;
mod roster;
pub mod status;
pub mod surface;

pub use api::{ActivitiesApi, HttpActivitiesApi};
pub use config::{load_settings, ClientSettings};
pub use error::{FailureKind, RosterError};
pub use render::{ActivityCard, ParticipantList, ParticipantRow};
pub use roster::{
    LoadOutcome, RemovalOutcome, RosterClient, SignupOutcome, SIGNUP_FAILURE_MESSAGE,
    SIGNUP_REJECTED_FALLBACK, UNREGISTER_REJECTED_FALLBACK,
};
pub use status::StatusArea;
pub use surface::{RosterSurface, StatusKind, StatusMessage};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
