//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadActivities,
    RemoveParticipant { activity: String, email: String },
    SubmitSignup { activity: String, email: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadActivities => "load_activities",
            BackendCommand::RemoveParticipant { .. } => "remove_participant",
            BackendCommand::SubmitSignup { .. } => "submit_signup",
        }
    }
}
