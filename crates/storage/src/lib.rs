use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use shared::domain::ActivityCollection;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

mod seed;

pub use seed::seed_catalog;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("activity '{0}' not found")]
    ActivityNotFound(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
    #[error("failed to read activity catalog '{}': {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse activity catalog '{}': {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// In-memory activity roster shared between request handlers.
#[derive(Clone)]
pub struct Storage {
    activities: Arc<RwLock<ActivityCollection>>,
}

impl Storage {
    pub fn new(catalog: ActivityCollection) -> Self {
        Self {
            activities: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn with_seed_catalog() -> Self {
        Self::new(seed_catalog())
    }

    /// Loads a catalog file shaped like the `GET /activities` response.
    pub fn from_catalog_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| StorageError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: ActivityCollection =
            serde_json::from_str(&raw).map_err(|source| StorageError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(path = %path.display(), activities = catalog.len(), "loaded activity catalog");
        Ok(Self::new(catalog))
    }

    pub async fn list_activities(&self) -> ActivityCollection {
        self.activities.read().await.clone()
    }

    pub async fn add_participant(&self, activity: &str, email: &str) -> Result<(), StorageError> {
        let mut guard = self.activities.write().await;
        let entry = guard
            .get_mut(activity)
            .ok_or_else(|| StorageError::ActivityNotFound(activity.to_string()))?;
        if entry.has_participant(email) {
            return Err(StorageError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        entry.participants.push(email.to_string());
        debug!(activity, email, roster = entry.participants.len(), "participant added");
        Ok(())
    }

    pub async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<(), StorageError> {
        let mut guard = self.activities.write().await;
        let entry = guard
            .get_mut(activity)
            .ok_or_else(|| StorageError::ActivityNotFound(activity.to_string()))?;
        let Some(position) = entry.participants.iter().position(|p| p == email) else {
            return Err(StorageError::NotSignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };
        entry.participants.remove(position);
        debug!(activity, email, roster = entry.participants.len(), "participant removed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
