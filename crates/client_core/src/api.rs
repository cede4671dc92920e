use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{ActivityCollection, SignupRequest},
    protocol::{ErrorBody, MessageResponse, SIGNUP_ACTION, UNREGISTER_ACTION},
};
use tracing::debug;
use url::Url;

use crate::error::RosterError;

/// The activities backend as the roster client sees it.
#[async_trait]
pub trait ActivitiesApi: Send + Sync {
    async fn list_activities(&self) -> Result<ActivityCollection, RosterError>;
    async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, RosterError>;
    async fn unregister(&self, request: &SignupRequest) -> Result<(), RosterError>;
}

pub struct HttpActivitiesApi {
    http: Client,
    base_url: Url,
}

impl HttpActivitiesApi {
    pub fn new(server_url: &str) -> Result<Self, RosterError> {
        let mut base_url = Url::parse(server_url).map_err(|err| RosterError::InvalidServerUrl {
            url: server_url.to_string(),
            reason: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RosterError::InvalidServerUrl {
                url: server_url.to_string(),
                reason: "url cannot carry a path".to_string(),
            });
        }
        base_url.set_query(None);
        base_url.set_fragment(None);
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `/activities/{name}/{action}?email={email}`, with name and email encoded.
    pub fn roster_action_url(&self, request: &SignupRequest, action: &str) -> Url {
        let mut url = self.endpoint(&["activities", &request.activity, action]);
        url.query_pairs_mut().append_pair("email", &request.email);
        url
    }

    pub fn activities_url(&self) -> Url {
        self.endpoint(&["activities"])
    }
}

#[async_trait]
impl ActivitiesApi for HttpActivitiesApi {
    async fn list_activities(&self) -> Result<ActivityCollection, RosterError> {
        let response = self.http.get(self.activities_url()).send().await?;
        let body = success_body(response).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, RosterError> {
        let url = self.roster_action_url(request, SIGNUP_ACTION);
        debug!(%url, "posting signup");
        let response = self.http.post(url).send().await?;
        let body = success_body(response).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn unregister(&self, request: &SignupRequest) -> Result<(), RosterError> {
        let url = self.roster_action_url(request, UNREGISTER_ACTION);
        debug!(%url, "sending unregister");
        let response = self.http.delete(url).send().await?;
        success_body(response).await?;
        Ok(())
    }
}

/// Body of a 2xx response, or the rejection the server described.
async fn success_body(response: Response) -> Result<Vec<u8>, RosterError> {
    let status = response.status();
    let body = response.bytes().await?;
    if status.is_success() {
        return Ok(body.to_vec());
    }

    // An empty error body counts as a rejection without detail.
    let detail = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        serde_json::from_slice::<ErrorBody>(&body)?.detail
    };
    Err(RosterError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
