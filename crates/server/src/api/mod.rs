//! HTTP surface of the activities API.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use server_api::{signup_route, unregister_route};
use shared::{
    domain::{ActivityCollection, SignupRequest},
    error::{ApiError, ErrorCode},
    protocol::{activities_route, EmailQuery, ErrorBody, MessageResponse},
};
use tracing::warn;

use crate::app_state::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

pub(crate) fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(activities_route(), get(http_list_activities))
        .route(signup_route(), post(http_signup))
        .route(unregister_route(), delete(http_unregister))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityCollection> {
    Json(server_api::list_activities(&state.api).await)
}

async fn http_signup(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<MessageResponse> {
    let request = roster_request(name, query)?;
    server_api::signup(&state.api, &request)
        .await
        .map(Json)
        .map_err(|err| reject(&request, err))
}

async fn http_unregister(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<MessageResponse> {
    let request = roster_request(name, query)?;
    server_api::unregister(&state.api, &request)
        .await
        .map(Json)
        .map_err(|err| reject(&request, err))
}

/// Pairs the path activity with the `email` query. A missing or unreadable
/// query is answered like any other validation failure.
fn roster_request(
    name: String,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<SignupRequest, (StatusCode, Json<ErrorBody>)> {
    match query {
        Ok(Query(query)) => Ok(SignupRequest::new(name, query.email)),
        Err(rejection) => {
            let request = SignupRequest::new(name, String::new());
            Err(reject(&request, ApiError::validation(rejection.body_text())))
        }
    }
}

fn reject(request: &SignupRequest, err: ApiError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!(
        activity = %request.activity,
        email = %request.email,
        status = status.as_u16(),
        detail = %err.detail,
        "roster mutation rejected"
    );
    (status, Json(err.into()))
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
