//! Shared fixtures for ferrochain behavior tests: a local axum server standing
//! in for the option chain endpoint, and token file helpers.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub use ferrochain_core::{
    AccessToken, ExpiryDate, FetchError, FetchErrorKind, Fetcher, FetcherConfig, InstrumentKey,
    OptionChainQuery,
};

pub const OPTION_CHAIN_PATH: &str = "/v2/option/chain";

/// Second route on the mock; its body shows up only if a redirect is followed.
pub const REDIRECT_TARGET_PATH: &str = "/elsewhere";
pub const REDIRECT_TARGET_BODY: &str = "other-body";

/// How the mock answers the option chain route.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Vec<u8>,
    pub location: Option<String>,
    pub delay: Option<Duration>,
}

impl UpstreamReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            location: None,
            delay: None,
        }
    }

    /// `302 Found` pointing at [`REDIRECT_TARGET_PATH`].
    pub fn redirect(body: impl Into<Vec<u8>>) -> Self {
        Self {
            location: Some(String::from(REDIRECT_TARGET_PATH)),
            ..Self::new(302, body)
        }
    }

    /// Answer only after `delay`.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// What the mock upstream saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub raw_query: Option<String>,
    pub headers: BTreeMap<String, String>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Query pairs after form-url-decoding.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let raw = self.raw_query.as_deref().unwrap_or_default();
        url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect()
    }
}

#[derive(Clone)]
struct UpstreamState {
    reply: UpstreamReply,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn option_chain(
    State(state): State<UpstreamState>,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let recorded = RecordedRequest {
        path: uri.path().to_owned(),
        raw_query: uri.query().map(str::to_owned),
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_owned(), value.to_owned()))
            })
            .collect(),
    };
    state
        .requests
        .lock()
        .expect("request log lock poisoned")
        .push(recorded);

    let reply = state.reply;
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    if let Some(location) = &reply.location {
        response_headers.insert(
            header::LOCATION,
            HeaderValue::from_str(location).expect("valid location header"),
        );
    }

    (
        StatusCode::from_u16(reply.status).expect("valid status code"),
        response_headers,
        reply.body,
    )
}

async fn redirect_target() -> &'static str {
    REDIRECT_TARGET_BODY
}

/// Local stand-in for the Upstox option chain endpoint.
pub struct MockUpstream {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockUpstream {
    /// Serve `body` with `status` for every request to [`OPTION_CHAIN_PATH`].
    pub async fn start(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::serve(UpstreamReply::new(status, body)).await
    }

    pub async fn serve(reply: UpstreamReply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            reply,
            requests: Arc::clone(&requests),
        };
        let app = Router::new()
            .route(OPTION_CHAIN_PATH, get(option_chain))
            .route(REDIRECT_TARGET_PATH, get(redirect_target))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock upstream address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock upstream crashed");
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, OPTION_CHAIN_PATH)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("request log lock poisoned")
            .clone()
    }

    /// Requests recorded on [`OPTION_CHAIN_PATH`]; the redirect target is not
    /// recorded.
    pub fn request_count(&self) -> usize {
        self.requests().len()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A base URL on a port nobody listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
    let addr = listener.local_addr().expect("free port address");
    drop(listener);
    format!("http://{addr}{OPTION_CHAIN_PATH}")
}

/// Write `contents` to `accessToken.txt` in `dir`.
pub fn write_token(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(ferrochain_core::DEFAULT_TOKEN_FILE);
    std::fs::write(&path, contents).expect("write token file");
    path
}

/// Fetcher config pointing at `base_url` with the default query.
pub fn config_for(token_path: PathBuf, base_url: String) -> FetcherConfig {
    FetcherConfig {
        token_path,
        base_url,
        ..FetcherConfig::default()
    }
}
