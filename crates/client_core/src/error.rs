use thiserror::Error;

/// Broad failure classes of a roster request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never completed.
    Transport,
    /// The server answered with a non-2xx status.
    Application,
    /// The response body could not be decoded.
    Malformed,
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("invalid server url '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(
        "server responded with status {status}: {}",
        .detail.as_deref().unwrap_or("no detail")
    )]
    Rejected { status: u16, detail: Option<String> },
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl RosterError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidServerUrl { .. } | Self::Transport(_) => FailureKind::Transport,
            Self::Rejected { .. } => FailureKind::Application,
            Self::MalformedBody(_) => FailureKind::Malformed,
        }
    }

    /// Server-provided detail of an application failure, if it sent a usable one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref().filter(|d| !d.is_empty()),
            _ => None,
        }
    }
}
