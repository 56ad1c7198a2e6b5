//! In-process HTTP server for exercising the blocking clients.
//!
//! The server runs on its own tokio runtime in a background thread, because
//! `reqwest::blocking` must not be driven from inside a runtime.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use axum_extra::extract::Multipart;
use cc_sdk::rpc::types::JsonRpcResponse;

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct Captured {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// One uploaded multipart field.
#[derive(Debug, Clone)]
pub struct UploadedField {
    pub name: String,
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

type Responder = Box<dyn Fn(&serde_json::Value) -> String + Send + Sync>;

struct RpcShared {
    respond: Responder,
    requests: Mutex<Vec<Captured>>,
}

pub struct MockRpcServer {
    pub url: String,
    shared: Arc<RpcShared>,
}

impl MockRpcServer {
    pub fn requests(&self) -> Vec<Captured> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Captured {
        self.requests().pop().expect("no request received")
    }
}

/// Start a JSON-RPC endpoint whose raw response body is produced by `respond`
/// from the parsed request.
pub fn spawn_rpc<F>(respond: F) -> MockRpcServer
where
    F: Fn(&serde_json::Value) -> String + Send + Sync + 'static,
{
    let shared = Arc::new(RpcShared {
        respond: Box::new(respond),
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/", post(rpc_handler))
        .with_state(shared.clone());
    let addr = serve(app);
    MockRpcServer {
        url: format!("http://{}/", addr),
        shared,
    }
}

/// Start a JSON-RPC endpoint that always answers with `body`.
pub fn spawn_rpc_fixed(body: &str) -> MockRpcServer {
    let body = body.to_string();
    spawn_rpc(move |_| body.clone())
}

/// Success envelope for `result`, as the node writes it.
pub fn success_body(result: serde_json::Value) -> String {
    let response = JsonRpcResponse::success(Some(serde_json::json!(1)), result);
    serde_json::to_string(&response).unwrap()
}

/// Error envelope carrying `code` and `message`.
pub fn error_body(code: i64, message: &str) -> String {
    let response = JsonRpcResponse::error(Some(serde_json::json!(1)), code, message);
    serde_json::to_string(&response).unwrap()
}

async fn rpc_handler(
    State(shared): State<Arc<RpcShared>>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let request: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
    let reply = (shared.respond)(&request);
    shared.requests.lock().unwrap().push(Captured {
        authorization: header(&headers, AUTHORIZATION.as_str()),
        content_type: header(&headers, CONTENT_TYPE.as_str()),
        body: request,
    });
    ([(CONTENT_TYPE, "application/json")], reply)
}

#[derive(Default)]
struct UploadShared {
    uploads: Mutex<Vec<(Option<String>, Option<String>, Vec<UploadedField>)>>,
}

pub struct MockUploadServer {
    pub url: String,
    shared: Arc<UploadShared>,
}

impl MockUploadServer {
    /// `(authorization, content type, fields)` per received upload.
    pub fn uploads(&self) -> Vec<(Option<String>, Option<String>, Vec<UploadedField>)> {
        self.shared.uploads.lock().unwrap().clone()
    }
}

/// Start an upload endpoint that answers `stored <file name> (<n> bytes)`.
pub fn spawn_upload() -> MockUploadServer {
    let shared = Arc::new(UploadShared::default());
    let app = Router::new()
        .route("/upload", post(upload_handler))
        .with_state(shared.clone());
    let addr = serve(app);
    MockUploadServer {
        url: format!("http://{}/upload", addr),
        shared,
    }
}

async fn upload_handler(
    State(shared): State<Arc<UploadShared>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> String {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.unwrap().to_vec();
        fields.push(UploadedField {
            name,
            file_name,
            bytes,
        });
    }

    let reply = match fields.first() {
        Some(field) => format!(
            "stored {} ({} bytes)",
            field.file_name.clone().unwrap_or_default(),
            field.bytes.len()
        ),
        None => "empty upload".to_string(),
    };

    shared.uploads.lock().unwrap().push((
        header(&headers, AUTHORIZATION.as_str()),
        header(&headers, CONTENT_TYPE.as_str()),
        fields,
    ));
    reply
}

/// An address nothing listens on.
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn serve(app: Router) -> SocketAddr {
    // Bound before the thread starts, so early connections wait in the backlog.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    addr
}
