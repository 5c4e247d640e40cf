//! # Ferrochain Core
//!
//! Fetches the Upstox option chain for one instrument and expiry and hands
//! back the raw response body.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`credential`] | Access token file loading |
//! | [`domain`] | Instrument keys, expiry dates, monthly expiry schedule |
//! | [`error`] | Validation errors |
//! | [`fetcher`] | The fetch itself and its error kinds |
//! | [`http_client`] | Request/response types and the reqwest client |
//! | [`option_chain`] | Query parameters and endpoint URL building |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::io::Write;
//!
//! use ferrochain_core::{Fetcher, FetcherConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = Fetcher::new(FetcherConfig::default())?;
//!     let body = fetcher.fetch().await?;
//!     std::io::stdout().write_all(&body)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use ferrochain_core::{FetchError, FetchErrorKind};
//!
//! fn handle_error(error: FetchError) {
//!     match error.kind() {
//!         FetchErrorKind::CredentialNotFound => {
//!             // Nothing was sent
//!         }
//!         FetchErrorKind::NonSuccessStatus => {
//!             // Upstream body is still available on the error
//!         }
//!         _ => {}
//!     }
//! }
//! ```
//!
//! The access token is never logged and is redacted from `Debug` output.

pub mod credential;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod option_chain;

pub use credential::{load_access_token, AccessToken, DEFAULT_TOKEN_FILE};

pub use domain::{
    monthly_expiry, monthly_expiry_weekday, ExpiryDate, ExpiryMonth, HolidayCalendar,
    InstrumentKey,
};

pub use error::ValidationError;

pub use fetcher::{FetchError, FetchErrorKind, Fetcher, FetcherConfig};

pub use http_client::{HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use option_chain::{parse_base_url, OptionChainQuery, DEFAULT_BASE_URL};
