use shared::{
    domain::{ActivityCollection, SignupRequest},
    error::ApiError,
    protocol::MessageResponse,
};
use storage::{Storage, StorageError};
use tracing::info;

#[derive(Clone)]
pub struct ApiContext {
    pub storage: Storage,
}

pub fn signup_route() -> &'static str {
    "/activities/:name/signup"
}

pub fn unregister_route() -> &'static str {
    "/activities/:name/unregister"
}

pub async fn list_activities(ctx: &ApiContext) -> ActivityCollection {
    ctx.storage.list_activities().await
}

pub async fn signup(ctx: &ApiContext, request: &SignupRequest) -> Result<MessageResponse, ApiError> {
    ctx.storage
        .add_participant(&request.activity, &request.email)
        .await
        .map_err(to_api_error)?;
    info!(activity = %request.activity, email = %request.email, "signed up participant");
    Ok(MessageResponse::new(format!(
        "Signed up {} for {}",
        request.email, request.activity
    )))
}

pub async fn unregister(
    ctx: &ApiContext,
    request: &SignupRequest,
) -> Result<MessageResponse, ApiError> {
    ctx.storage
        .remove_participant(&request.activity, &request.email)
        .await
        .map_err(to_api_error)?;
    info!(activity = %request.activity, email = %request.email, "unregistered participant");
    Ok(MessageResponse::new(format!(
        "Unregistered {} from {}",
        request.email, request.activity
    )))
}

fn to_api_error(err: StorageError) -> ApiError {
    match err {
        StorageError::ActivityNotFound(_) => ApiError::not_found("Activity not found"),
        StorageError::AlreadySignedUp { .. } => {
            ApiError::validation("Student is already signed up")
        }
        StorageError::NotSignedUp { .. } => {
            ApiError::validation("Student is not signed up for this activity")
        }
        other => ApiError::internal(other.to_string()),
    }
}
