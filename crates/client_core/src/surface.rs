use crate::render::ActivityCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// Styling class the status area uses for this outcome.
    pub fn class_name(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// The UI regions a [`RosterClient`](crate::RosterClient) drives: the
/// activities list, the activity-selection control, the signup form and the
/// status area. Implementations own the actual widgets; the client only
/// pushes complete replacements into them.
pub trait RosterSurface: Send + Sync {
    /// Replaces every activity card currently displayed.
    fn replace_activities(&self, cards: &[ActivityCard]);

    /// Rebuilds the options of the signup form's activity selector.
    fn replace_activity_options(&self, names: &[String]);

    /// Replaces the activities area with a static failure message.
    fn show_load_failure(&self, message: &str);

    fn show_status(&self, status: &StatusMessage);

    fn hide_status(&self);

    /// Clears the signup form fields.
    fn reset_signup_form(&self);
}
