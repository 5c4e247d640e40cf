//! The option chain fetch: read the token, build one authenticated GET,
//! hand back the body untouched.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::credential::{load_access_token, AccessToken, DEFAULT_TOKEN_FILE};
use crate::http_client::{HttpError, HttpRequest, ReqwestHttpClient};
use crate::option_chain::{parse_base_url, OptionChainQuery, DEFAULT_BASE_URL};
use crate::ValidationError;

/// Fetch failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    CredentialNotFound,
    CredentialUnreadable,
    Transport,
    NonSuccessStatus,
}

/// Error returned by [`Fetcher::fetch`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("access token file not found")]
    CredentialNotFound { path: PathBuf },

    #[error("failed to read access token file '{}': {source}", .path.display())]
    CredentialUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The upstream answered, but not with 2xx (redirects included). The
    /// body is kept verbatim.
    #[error("upstream returned status {status}")]
    NonSuccessStatus { status: u16, body: Vec<u8> },
}

impl FetchError {
    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::CredentialNotFound { .. } => FetchErrorKind::CredentialNotFound,
            Self::CredentialUnreadable { .. } => FetchErrorKind::CredentialUnreadable,
            Self::Transport(_) => FetchErrorKind::Transport,
            Self::NonSuccessStatus { .. } => FetchErrorKind::NonSuccessStatus,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self.kind() {
            FetchErrorKind::CredentialNotFound => "fetch.credential_not_found",
            FetchErrorKind::CredentialUnreadable => "fetch.credential_unreadable",
            FetchErrorKind::Transport => "fetch.transport",
            FetchErrorKind::NonSuccessStatus => "fetch.non_success_status",
        }
    }
}

/// Everything one fetch needs. Built once per process, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub token_path: PathBuf,
    pub base_url: String,
    pub query: OptionChainQuery,
    pub timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            token_path: PathBuf::from(DEFAULT_TOKEN_FILE),
            base_url: String::from(DEFAULT_BASE_URL),
            query: OptionChainQuery::default(),
            timeout: None,
        }
    }
}

/// Performs the single authenticated option chain request.
#[derive(Debug, Clone)]
pub struct Fetcher {
    config: FetcherConfig,
    base_url: Url,
}

impl Fetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, ValidationError> {
        let base_url = parse_base_url(&config.base_url)?;
        Ok(Self { config, base_url })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// The outgoing request for `token`, without sending it.
    pub fn request(&self, token: &AccessToken) -> HttpRequest {
        HttpRequest::get(self.config.query.url(&self.base_url))
            .with_header("Accept", "application/json")
            .with_bearer_auth(token)
            .with_timeout(self.config.timeout)
    }

    /// Read the token, send the request and return the body as received.
    ///
    /// The token file is checked before any network activity, so a missing
    /// credential never produces a request.
    pub async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let token = load_access_token(&self.config.token_path)?;
        let request = self.request(&token);
        tracing::debug!(url = %request.url, "requesting option chain");

        let client = ReqwestHttpClient::new();
        let response = client.execute(request).await?;

        if !response.is_success() {
            return Err(FetchError::NonSuccessStatus {
                status: response.status,
                body: response.body,
            });
        }

        tracing::info!(
            status = response.status,
            bytes = response.body.len(),
            "option chain received"
        );
        Ok(response.body)
    }
}
