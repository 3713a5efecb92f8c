use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use client::ApiClient;
use serde_json::Value;
use shared_types::ClientConfig;

/// One request as the stub backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct StubState {
    replies: Arc<HashMap<String, (StatusCode, String)>>,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

/// Canned replies keyed by `"METHOD /api/path"`.
#[derive(Default)]
pub struct Stub {
    replies: HashMap<String, (StatusCode, String)>,
}

impl Stub {
    pub fn new() -> Self {
        Self::default()
    }

    /// 200 with a JSON body.
    pub fn json(self, method: &str, path: &str, body: Value) -> Self {
        self.raw(method, path, 200, &body.to_string())
    }

    pub fn raw(mut self, method: &str, path: &str, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status");
        self.replies
            .insert(format!("{method} /api/{path}"), (status, body.to_string()));
        self
    }

    /// Serve the stub on an ephemeral port.
    pub async fn start(self) -> StubBackend {
        let state = StubState {
            replies: Arc::new(self.replies),
            seen: Arc::default(),
        };
        let seen = state.seen.clone();

        let app = Router::new().fallback(reply).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        StubBackend {
            client: ApiClient::new(&ClientConfig::new(format!("http://{addr}/api"))),
            seen,
        }
    }
}

async fn reply(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    state.seen.lock().expect("stub log").push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query,
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    match state.replies.get(&format!("{method} {path}")) {
        Some((status, body)) => (
            *status,
            [("content-type", "application/json")],
            body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "no stub for this route").into_response(),
    }
}

pub struct StubBackend {
    pub client: ApiClient,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

impl StubBackend {
    pub fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().expect("stub log").clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("at least one request")
    }
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    ApiClient::new(&ClientConfig::new(format!("http://{addr}/api")))
}

pub fn sample_motion(id: u64) -> Value {
    serde_json::json!({
        "id": id,
        "case_name": format!("Acme Corp v. Widget Inc. {id}"),
        "court": "N.D. Cal.",
        "docket_number": format!("3:24-cv-{id:05}"),
        "judge": "Hon. Jane Smith",
        "motion_type": "motion to dismiss denied",
        "order_date": "2025-03-14",
        "document_number": "42",
        "summary": "The court denied the motion to dismiss.",
        "order_description": "ORDER denying motion to dismiss.",
        "parties": [
            {
                "party_type": "Plaintiff",
                "party_name": "Acme Corp",
                "attorneys": [
                    { "attorney_name": "Jane Roe", "law_firm": "Roe & Partners LLP" }
                ]
            }
        ]
    })
}
