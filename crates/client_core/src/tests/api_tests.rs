use super::*;

use axum::http::StatusCode;
use serde_json::json;

use crate::{
    error::FailureKind,
    test_support::{
        chess_club, spawn_scripted_server, unreachable_server_url, RecordedMutation, Reply,
        ScriptedBackend,
    },
};

#[test]
fn roster_action_url_encodes_name_and_email() {
    let api = HttpActivitiesApi::new("http://127.0.0.1:8000").expect("api");
    let url = api.roster_action_url(
        &SignupRequest::new("Chess Club/Advanced?", "a+b@x.com"),
        SIGNUP_ACTION,
    );
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:8000/activities/Chess%20Club%2FAdvanced%3F/signup?email=a%2Bb%40x.com"
    );
}

#[test]
fn endpoints_respect_base_path() {
    let api = HttpActivitiesApi::new("http://roster.local/api/?stale=1").expect("api");
    assert_eq!(api.activities_url().as_str(), "http://roster.local/api/activities");
    let url = api.roster_action_url(&SignupRequest::new("Gym", "g@x.com"), UNREGISTER_ACTION);
    assert_eq!(
        url.as_str(),
        "http://roster.local/api/activities/Gym/unregister?email=g%40x.com"
    );
}

#[test]
fn rejects_unusable_server_urls() {
    for raw in ["not a url", "mailto:someone@x.com"] {
        let err = HttpActivitiesApi::new(raw).err().expect("invalid url");
        assert!(matches!(err, RosterError::InvalidServerUrl { .. }), "{raw}");
    }
}

#[tokio::test]
async fn list_activities_decodes_collection_in_wire_order() {
    // Raw body: `json!` maps are key-sorted and would hide the wire order.
    let backend = ScriptedBackend::new(json!({}));
    backend
        .set_list_default(Reply::raw(
            StatusCode::OK,
            r#"{
                "Tennis Club": {"description": "t", "schedule": "s", "max_participants": 12, "participants": []},
                "Chess Club": {"description": "c", "schedule": "s", "max_participants": 2, "participants": ["a@x.com"]}
            }"#,
        ))
        .await;
    let server_url = spawn_scripted_server(backend.clone()).await.expect("server");
    let api = HttpActivitiesApi::new(&server_url).expect("api");

    let activities = api.list_activities().await.expect("activities");
    let names: Vec<&str> = activities.names().collect();
    assert_eq!(names, vec!["Tennis Club", "Chess Club"]);
    assert_eq!(
        activities.get("Chess Club").expect("chess").participants,
        vec!["a@x.com".to_string()]
    );
    assert_eq!(backend.list_hits(), 1);
}

#[tokio::test]
async fn list_activities_classifies_failures() {
    let backend = ScriptedBackend::new(chess_club());
    let server_url = spawn_scripted_server(backend.clone()).await.expect("server");
    let api = HttpActivitiesApi::new(&server_url).expect("api");

    backend
        .set_list_default(Reply::raw(StatusCode::OK, "<html>oops</html>"))
        .await;
    let err = api.list_activities().await.expect_err("malformed");
    assert_eq!(err.kind(), FailureKind::Malformed);

    backend
        .set_list_default(Reply::json(
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "detail": "maintenance" }),
        ))
        .await;
    let err = api.list_activities().await.expect_err("rejected");
    assert_eq!(err.kind(), FailureKind::Application);
    assert_eq!(err.detail(), Some("maintenance"));

    let offline = HttpActivitiesApi::new(&unreachable_server_url().await.expect("addr"))
        .expect("api");
    let err = offline.list_activities().await.expect_err("transport");
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn signup_posts_decoded_name_and_email() {
    let backend = ScriptedBackend::new(chess_club());
    backend
        .set_signup_reply(Reply::json(
            StatusCode::OK,
            json!({ "message": "Signed up new+kid@x.com for Chess Club" }),
        ))
        .await;
    let server_url = spawn_scripted_server(backend.clone()).await.expect("server");
    let api = HttpActivitiesApi::new(&server_url).expect("api");

    let response = api
        .signup(&SignupRequest::new("Chess Club", "new+kid@x.com"))
        .await
        .expect("signup");
    assert_eq!(response.message, "Signed up new+kid@x.com for Chess Club");
    assert_eq!(
        backend.mutations().await,
        vec![RecordedMutation {
            method: "POST",
            activity: "Chess Club".to_string(),
            email: Some("new+kid@x.com".to_string()),
        }]
    );
}

#[tokio::test]
async fn signup_rejection_carries_server_detail() {
    let backend = ScriptedBackend::new(chess_club());
    backend
        .set_signup_reply(Reply::json(
            StatusCode::BAD_REQUEST,
            json!({ "detail": "Already signed up" }),
        ))
        .await;
    let server_url = spawn_scripted_server(backend).await.expect("server");
    let api = HttpActivitiesApi::new(&server_url).expect("api");

    let err = api
        .signup(&SignupRequest::new("Chess Club", "a@x.com"))
        .await
        .expect_err("rejected");
    assert!(matches!(err, RosterError::Rejected { status: 400, .. }));
    assert_eq!(err.detail(), Some("Already signed up"));
}

#[tokio::test]
async fn unregister_accepts_empty_success_body_and_detail_free_failures() {
    let backend = ScriptedBackend::new(chess_club());
    backend.set_unregister_reply(Reply::raw(StatusCode::OK, "")).await;
    let server_url = spawn_scripted_server(backend.clone()).await.expect("server");
    let api = HttpActivitiesApi::new(&server_url).expect("api");
    let request = SignupRequest::new("Chess Club", "a@x.com");

    api.unregister(&request).await.expect("unregister");

    backend
        .set_unregister_reply(Reply::raw(StatusCode::NOT_FOUND, ""))
        .await;
    let err = api.unregister(&request).await.expect_err("rejected");
    assert!(matches!(
        err,
        RosterError::Rejected {
            status: 404,
            detail: None
        }
    ));
    assert_eq!(err.detail(), None);

    let mutations = backend.mutations().await;
    assert_eq!(mutations.len(), 2);
    assert!(mutations.iter().all(|m| m.method == "DELETE"));
}
