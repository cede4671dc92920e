use std::{fs, time::Duration};

use serde::Deserialize;
use tracing::warn;

use crate::status::DEFAULT_STATUS_HIDE_AFTER;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    /// How long a signup status stays visible.
    pub status_hide_after: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            status_hide_after: DEFAULT_STATUS_HIDE_AFTER,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    status_hide_after_ms: Option<u64>,
}

/// Defaults, then `roster.toml` in the working directory, then the
/// `ROSTER_*` environment variables.
pub fn load_settings() -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string("roster.toml") {
        apply_file_settings(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("ROSTER_SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("ROSTER_STATUS_HIDE_MS") {
        match v.parse::<u64>() {
            Ok(ms) => settings.status_hide_after = Duration::from_millis(ms),
            Err(error) => warn!(value = %v, %error, "ignoring invalid ROSTER_STATUS_HIDE_MS"),
        }
    }

    settings
}

fn apply_file_settings(settings: &mut ClientSettings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(error) => {
            warn!(%error, "ignoring unreadable roster.toml");
            return;
        }
    };

    if let Some(v) = file_cfg.server_url {
        settings.server_url = v;
    }
    if let Some(ms) = file_cfg.status_hide_after_ms {
        settings.status_hide_after = Duration::from_millis(ms);
    }
}
