//! An in-process HTTP server that records the requests it receives, standing
//! in for the webhook and the transaction table.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::Request,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    /// The path and query of the request.
    pub uri: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    #[track_caller]
    pub(crate) fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }

    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
    }
}

pub(crate) struct RecordingServer {
    /// The base URL of the server, e.g. "http://127.0.0.1:1234".
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl RecordingServer {
    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a server that answers every request with `status` and an empty body.
pub(crate) async fn spawn_recording_server(status: StatusCode) -> RecordingServer {
    spawn_json_server(status, String::new()).await
}

/// Start a server that answers every request with `status` and the JSON `body`.
pub(crate) async fn spawn_json_server(status: StatusCode, body: String) -> RecordingServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let app = Router::new().fallback(move |request: Request| {
        let recorded = recorded.clone();
        let body = body.clone();

        async move {
            let (parts, request_body) = request.into_parts();
            let bytes = axum::body::to_bytes(request_body, usize::MAX)
                .await
                .expect("Could not read request body");

            recorded.lock().unwrap().push(RecordedRequest {
                method: parts.method.to_string(),
                uri: parts.uri.to_string(),
                headers: parts.headers,
                body: String::from_utf8_lossy(&bytes).to_string(),
            });

            (status, [(CONTENT_TYPE, "application/json")], body)
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test server");
    let address = listener.local_addr().expect("Could not get server address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server stopped unexpectedly");
    });

    RecordingServer {
        url: format!("http://{address}"),
        requests,
    }
}

/// A URL that refuses connections.
pub(crate) async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test server");
    let address = listener.local_addr().expect("Could not get server address");
    drop(listener);

    format!("http://{address}")
}
