//! Mock backend on an ephemeral port. Every request is recorded and answered
//! by a per-test responder.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::sync::mpsc;

use ctfdash::api::ApiClient;
use ctfdash::services::{execute, ApiCommand};
use ctfdash::{App, AppConfig};

pub const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: String,
    pub cookie: Option<String>,
    pub body: String,
}

pub type Reply = (StatusCode, &'static str, String);
pub type Responder = Arc<dyn Fn(&Method, &str, &str) -> Reply + Send + Sync>;

#[derive(Clone)]
struct MockState {
    responder: Responder,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockServer {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&Method, &str, &str) -> Reply + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState { responder: Arc::new(responder), requests: requests.clone() };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url: format!("http://{}", addr), requests }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn config(&self) -> AppConfig {
        AppConfig { api_base_url: self.base_url.clone(), ..AppConfig::default() }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config()).unwrap()
    }
}

async fn handle(State(state): State<MockState>, method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    let cookie = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()).map(str::to_string);
    let query = uri.query().unwrap_or("").to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        query: query.clone(),
        cookie,
        body,
    });
    let (status, content_type, body) = (state.responder)(&method, uri.path(), &query);
    (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
}

pub fn json(status: StatusCode, value: serde_json::Value) -> Reply {
    (status, JSON, value.to_string())
}

/// Runs every queued command against the mock backend and feeds the results
/// back, until the app stops asking for more.
pub async fn pump(app: &mut App, rx: &mut mpsc::UnboundedReceiver<ApiCommand>, client: &ApiClient) {
    while let Ok(command) = rx.try_recv() {
        let response = execute(client, command).await;
        app.handle_api_response(response);
    }
}
