//! In-process stub of the trigger API, for end-to-end tests of the HTTP client.
//!
//! Serves `/v1/triggers/messagequeue` from an in-memory map on an
//! ephemeral localhost port.

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use trigctl_core::domain::{Metadata, MessageQueueTrigger};

#[derive(Clone, Default)]
pub struct StubController {
    triggers: Arc<Mutex<BTreeMap<String, MessageQueueTrigger>>>,
    queries: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<(StatusCode, String)>>>,
    requests: Arc<AtomicUsize>,
}

impl StubController {
    /// Bind an ephemeral port and serve in the background, returning the base URL
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub controller");
        let addr = listener.local_addr().expect("stub controller address");

        let app = self.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve stub controller");
        });

        format!("http://{}", addr)
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/v1/triggers/messagequeue", get(list).post(create))
            .route(
                "/v1/triggers/messagequeue/{name}",
                get(fetch).put(update).delete(remove),
            )
            .with_state(self.clone())
    }

    /// Answer every following request with this status and body
    pub fn fail_with(&self, status: StatusCode, body: &str) {
        *self.failure.lock().unwrap() = Some((status, body.to_string()));
    }

    pub fn insert(&self, trigger: MessageQueueTrigger) {
        self.triggers
            .lock()
            .unwrap()
            .insert(trigger.metadata.name.clone(), trigger);
    }

    pub fn trigger(&self, name: &str) -> Option<MessageQueueTrigger> {
        self.triggers.lock().unwrap().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.triggers.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw query strings seen so far (empty string when none was sent)
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// Number of requests that reached the server
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn begin(&self, query: Option<String>) -> Option<Response> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.unwrap_or_default());
        self.failure
            .lock()
            .unwrap()
            .clone()
            .map(|(status, body)| (status, body).into_response())
    }
}

async fn create(
    State(stub): State<StubController>,
    Json(trigger): Json<MessageQueueTrigger>,
) -> Response {
    if let Some(failure) = stub.begin(None) {
        return failure;
    }

    let mut triggers = stub.triggers.lock().unwrap();
    let name = trigger.metadata.name.clone();
    if triggers.contains_key(&name) {
        return (
            StatusCode::CONFLICT,
            format!("trigger '{}' already exists", name),
        )
            .into_response();
    }

    let metadata = Metadata::named(name.as_str()).with_uid(Some(format!("uid-{}", name)));
    triggers.insert(name, trigger);
    (StatusCode::CREATED, Json(metadata)).into_response()
}

async fn fetch(
    State(stub): State<StubController>,
    Path(name): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    if let Some(failure) = stub.begin(query) {
        return failure;
    }

    match stub.trigger(&name) {
        Some(trigger) => Json(trigger).into_response(),
        None => (StatusCode::NOT_FOUND, "trigger not found").into_response(),
    }
}

async fn update(
    State(stub): State<StubController>,
    Path(name): Path<String>,
    Json(trigger): Json<MessageQueueTrigger>,
) -> Response {
    if let Some(failure) = stub.begin(None) {
        return failure;
    }

    let mut triggers = stub.triggers.lock().unwrap();
    match triggers.get_mut(&name) {
        Some(existing) => {
            *existing = trigger;
            Json(Metadata::named(name.as_str())).into_response()
        }
        None => (StatusCode::NOT_FOUND, "trigger not found").into_response(),
    }
}

async fn remove(
    State(stub): State<StubController>,
    Path(name): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    if let Some(failure) = stub.begin(query) {
        return failure;
    }

    match stub.triggers.lock().unwrap().remove(&name) {
        Some(_) => StatusCode::OK.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn list(State(stub): State<StubController>, RawQuery(query): RawQuery) -> Response {
    if let Some(failure) = stub.begin(query) {
        return failure;
    }

    let triggers: Vec<MessageQueueTrigger> =
        stub.triggers.lock().unwrap().values().cloned().collect();
    Json(triggers).into_response()
}
