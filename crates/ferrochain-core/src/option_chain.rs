use url::Url;

use crate::{ExpiryDate, InstrumentKey, ValidationError};

/// Upstox v2 option chain endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.upstox.com/v2/option/chain";

/// Query parameters of one option chain request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionChainQuery {
    pub instrument_key: InstrumentKey,
    pub expiry_date: ExpiryDate,
}

impl OptionChainQuery {
    pub fn new(instrument_key: InstrumentKey, expiry_date: ExpiryDate) -> Self {
        Self {
            instrument_key,
            expiry_date,
        }
    }

    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("instrument_key", self.instrument_key.to_string()),
            ("expiry_date", self.expiry_date.to_string()),
        ]
    }

    /// Endpoint URL with the parameters form-encoded, replacing any query
    /// already present on `base`.
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(self.query_pairs());
        url
    }
}

/// Parse an endpoint URL, accepting only http and https.
pub fn parse_base_url(raw: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(raw.trim()).map_err(|e| ValidationError::InvalidBaseUrl {
        value: raw.to_owned(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ValidationError::InvalidBaseUrl {
            value: raw.to_owned(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
