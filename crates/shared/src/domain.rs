use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the roster is over capacity.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Activities keyed by name, in the order the catalog (or the API) lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityCollection(IndexMap<String, Activity>);

impl ActivityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> Option<Activity> {
        self.0.insert(name.into(), activity)
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.0.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Activity)> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Activity)> for ActivityCollection {
    fn from_iter<T: IntoIterator<Item = (String, Activity)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A participant email paired with the activity it refers to. Used for both
/// signups and unregistrations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

impl SignupRequest {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }
}
