//! Integration tests for the storefront cart client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p store-integration-tests
//! ```
//!
//! Each test starts a [`FakeStore`]: an in-process `axum` server on an
//! ephemeral port that serves `/store/update_item/` and `/process_order/`
//! with canned replies and records every request it receives.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, HeaderName, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use store_client::{ClientConfig, SessionContext, StoreClient};
use store_core::SessionIdentity;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use url::Url;

/// Cookie string used by authenticated test sessions.
pub const TEST_COOKIES: &str = "sessionid=s3ss10n; csrftoken=t0k%3Den";

/// The decoded anti-forgery token inside [`TEST_COOKIES`].
pub const TEST_CSRF_TOKEN: &str = "t0k=en";

/// A canned HTTP reply.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    /// A 200 reply with a JSON body.
    #[must_use]
    pub fn ok(body: serde_json::Value) -> Self {
        Self::status(200, body.to_string())
    }

    /// A reply with an arbitrary status and raw body.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A request captured by the fake server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub csrf_token: Option<String>,
    pub cookie: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct FakeState {
    update_reply: Reply,
    order_reply: Reply,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// In-process stand-in for the store server.
pub struct FakeStore {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeStore {
    /// Start a server answering cart updates with `update_reply` and
    /// checkouts with `order_reply`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start(update_reply: Reply, order_reply: Reply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            update_reply,
            order_reply,
            requests: Arc::clone(&requests),
        };

        let app = Router::new()
            .route("/store/update_item/", post(update_item))
            .route("/process_order/", post(process_order))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake store");
        let addr = listener.local_addr().expect("fake store address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, requests }
    }

    /// Base URL of the server.
    ///
    /// # Panics
    ///
    /// Never in practice; the address always forms a valid URL.
    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).expect("valid base url")
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// A client for a logged-in session against this server.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built.
    #[must_use]
    pub fn client(&self) -> StoreClient {
        self.client_with(ClientConfig::new(self.base_url()), logged_in())
    }

    /// A client with explicit configuration and session.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built.
    #[must_use]
    pub fn client_with(&self, config: ClientConfig, context: SessionContext) -> StoreClient {
        StoreClient::new(config, context).expect("build client")
    }
}

/// Session context of the logged-in test user.
#[must_use]
pub fn logged_in() -> SessionContext {
    SessionContext::from_cookies(
        SessionIdentity::from_signal(Some("alice")),
        TEST_COOKIES,
        "csrftoken",
    )
}

/// Session context of an anonymous visitor that still has a token cookie.
#[must_use]
pub fn anonymous() -> SessionContext {
    SessionContext::from_cookies(
        SessionIdentity::from_signal(Some(SessionIdentity::ANONYMOUS_SENTINEL)),
        TEST_COOKIES,
        "csrftoken",
    )
}

/// Session context of a logged-in user whose cookies lack the token.
#[must_use]
pub fn logged_in_without_token() -> SessionContext {
    SessionContext::from_cookies(
        SessionIdentity::from_signal(Some("alice")),
        "sessionid=s3ss10n",
        "csrftoken",
    )
}

/// Base URL of a port nothing listens on.
///
/// # Panics
///
/// Panics if a temporary listener cannot be bound.
pub async fn closed_port_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind temporary listener");
    let addr = listener.local_addr().expect("temporary listener address");
    drop(listener);
    Url::parse(&format!("http://{addr}")).expect("valid base url")
}

/// Base URL of a server that answers one request with a 200 whose body is
/// cut off before its declared `Content-Length`.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn truncated_body_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind truncating server");
    let addr = listener.local_addr().expect("truncating server address");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        if read_request(&mut socket).await.is_err() {
            return;
        }
        let partial = r#"{"cartItems":"#;
        let reply = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{partial}",
            partial.len() + 64
        );
        let _ = socket.write_all(reply.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    Url::parse(&format!("http://{addr}")).expect("valid base url")
}

/// Consume one request: headers, then `Content-Length` bytes of body.
async fn read_request(socket: &mut tokio::net::TcpStream) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
        let length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= end + 4 + length {
            return Ok(());
        }
    }
}

async fn update_item(
    State(state): State<FakeState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    record(&state, "/store/update_item/", &headers, &body);
    respond(&state.update_reply)
}

async fn process_order(
    State(state): State<FakeState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    record(&state, "/process_order/", &headers, &body);
    respond(&state.order_reply)
}

fn record(state: &FakeState, path: &str, headers: &HeaderMap, body: &str) {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };

    let recorded = Recorded {
        path: path.to_string(),
        csrf_token: header_str("x-csrftoken"),
        cookie: header_str(header::COOKIE.as_str()),
        content_type: header_str(header::CONTENT_TYPE.as_str()),
        body: serde_json::from_str(body).unwrap_or(serde_json::Value::Null),
    };

    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(recorded);
}

fn respond(reply: &Reply) -> (StatusCode, [(HeaderName, &'static str); 1], String) {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body.clone(),
    )
}
