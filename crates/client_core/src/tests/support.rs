use std::{
    collections::{HashMap, VecDeque},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    render::ActivityCard,
    surface::{RosterSurface, StatusMessage},
};

/// Surface double that records every call in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SurfaceCall {
    Activities(Vec<ActivityCard>),
    Options(Vec<String>),
    LoadFailure(String),
    StatusShown(StatusMessage),
    StatusHidden,
    FormReset,
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    calls: std::sync::Mutex<Vec<SurfaceCall>>,
}

impl RecordingSurface {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.lock().expect("surface lock").push(call);
    }

    pub(crate) fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().expect("surface lock").clone()
    }

    pub(crate) fn last_cards(&self) -> Option<Vec<ActivityCard>> {
        self.calls().into_iter().rev().find_map(|call| match call {
            SurfaceCall::Activities(cards) => Some(cards),
            _ => None,
        })
    }

    pub(crate) fn last_options(&self) -> Option<Vec<String>> {
        self.calls().into_iter().rev().find_map(|call| match call {
            SurfaceCall::Options(options) => Some(options),
            _ => None,
        })
    }

    pub(crate) fn last_status(&self) -> Option<StatusMessage> {
        self.calls().into_iter().rev().find_map(|call| match call {
            SurfaceCall::StatusShown(status) => Some(status),
            _ => None,
        })
    }

    /// Whether the most recent status call left the area visible.
    pub(crate) fn status_visible(&self) -> bool {
        self.calls()
            .into_iter()
            .rev()
            .find_map(|call| match call {
                SurfaceCall::StatusShown(_) => Some(true),
                SurfaceCall::StatusHidden => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub(crate) fn count(&self, matches: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }
}

impl RosterSurface for RecordingSurface {
    fn replace_activities(&self, cards: &[ActivityCard]) {
        self.record(SurfaceCall::Activities(cards.to_vec()));
    }

    fn replace_activity_options(&self, names: &[String]) {
        self.record(SurfaceCall::Options(names.to_vec()));
    }

    fn show_load_failure(&self, message: &str) {
        self.record(SurfaceCall::LoadFailure(message.to_string()));
    }

    fn show_status(&self, status: &StatusMessage) {
        self.record(SurfaceCall::StatusShown(status.clone()));
    }

    fn hide_status(&self) {
        self.record(SurfaceCall::StatusHidden);
    }

    fn reset_signup_form(&self) {
        self.record(SurfaceCall::FormReset);
    }
}

/// Canned HTTP reply.
#[derive(Debug, Clone)]
pub(crate) struct Reply {
    status: StatusCode,
    body: String,
}

impl Reply {
    pub(crate) fn json(status: StatusCode, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub(crate) fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedMutation {
    pub(crate) method: &'static str,
    pub(crate) activity: String,
    pub(crate) email: Option<String>,
}

/// Activities backend whose replies are scripted by the test.
#[derive(Clone)]
pub(crate) struct ScriptedBackend {
    pub(crate) list_hits: Arc<AtomicUsize>,
    pub(crate) list_replies: Arc<Mutex<VecDeque<Reply>>>,
    pub(crate) list_default: Arc<Mutex<Reply>>,
    pub(crate) signup_reply: Arc<Mutex<Reply>>,
    pub(crate) unregister_reply: Arc<Mutex<Reply>>,
    pub(crate) mutations: Arc<Mutex<Vec<RecordedMutation>>>,
}

impl ScriptedBackend {
    pub(crate) fn new(activities: serde_json::Value) -> Self {
        Self {
            list_hits: Arc::new(AtomicUsize::new(0)),
            list_replies: Arc::new(Mutex::new(VecDeque::new())),
            list_default: Arc::new(Mutex::new(Reply::json(StatusCode::OK, activities))),
            signup_reply: Arc::new(Mutex::new(Reply::json(
                StatusCode::OK,
                serde_json::json!({ "message": "Signed up" }),
            ))),
            unregister_reply: Arc::new(Mutex::new(Reply::json(
                StatusCode::OK,
                serde_json::json!({ "message": "Unregistered" }),
            ))),
            mutations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn list_hits(&self) -> usize {
        self.list_hits.load(Ordering::SeqCst)
    }

    pub(crate) async fn set_list_default(&self, reply: Reply) {
        *self.list_default.lock().await = reply;
    }

    pub(crate) async fn push_list_reply(&self, reply: Reply) {
        self.list_replies.lock().await.push_back(reply);
    }

    pub(crate) async fn set_signup_reply(&self, reply: Reply) {
        *self.signup_reply.lock().await = reply;
    }

    pub(crate) async fn set_unregister_reply(&self, reply: Reply) {
        *self.unregister_reply.lock().await = reply;
    }

    pub(crate) async fn mutations(&self) -> Vec<RecordedMutation> {
        self.mutations.lock().await.clone()
    }
}

async fn scripted_list(State(backend): State<ScriptedBackend>) -> Reply {
    backend.list_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(reply) = backend.list_replies.lock().await.pop_front() {
        return reply;
    }
    backend.list_default.lock().await.clone()
}

async fn scripted_signup(
    State(backend): State<ScriptedBackend>,
    Path(activity): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Reply {
    backend.mutations.lock().await.push(RecordedMutation {
        method: "POST",
        activity,
        email: query.get("email").cloned(),
    });
    backend.signup_reply.lock().await.clone()
}

async fn scripted_unregister(
    State(backend): State<ScriptedBackend>,
    Path(activity): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Reply {
    backend.mutations.lock().await.push(RecordedMutation {
        method: "DELETE",
        activity,
        email: query.get("email").cloned(),
    });
    backend.unregister_reply.lock().await.clone()
}

pub(crate) async fn spawn_scripted_server(backend: ScriptedBackend) -> Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/activities", get(scripted_list))
        .route("/activities/:name/signup", post(scripted_signup))
        .route("/activities/:name/unregister", delete(scripted_unregister))
        .with_state(backend);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

/// Address that refuses connections: bound once, then released.
pub(crate) async fn unreachable_server_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

pub(crate) fn chess_club() -> serde_json::Value {
    serde_json::json!({
        "Chess Club": {
            "description": "d",
            "schedule": "s",
            "max_participants": 2,
            "participants": ["a@x.com"]
        }
    })
}
