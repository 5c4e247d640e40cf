use std::fmt::{Debug, Formatter};
use std::io::ErrorKind;
use std::path::Path;

use crate::fetcher::FetchError;

/// Token file looked up in the working directory when no path is configured.
pub const DEFAULT_TOKEN_FILE: &str = "accessToken.txt";

/// Bearer token read from the credential file.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap raw file contents. Leading and trailing whitespace is stripped;
    /// the rest is used as-is.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_owned())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Read the access token from `path`.
///
/// A missing file is reported as [`FetchError::CredentialNotFound`] before
/// anything else happens. The contents are not checked beyond being UTF-8,
/// which an HTTP header value needs anyway; other bytes are
/// [`FetchError::CredentialUnreadable`].
pub fn load_access_token(path: &Path) -> Result<AccessToken, FetchError> {
    if !path.exists() {
        return Err(FetchError::CredentialNotFound {
            path: path.to_path_buf(),
        });
    }

    let unreadable = |source| FetchError::CredentialUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => FetchError::CredentialNotFound {
            path: path.to_path_buf(),
        },
        _ => unreadable(source),
    })?;
    let raw = String::from_utf8(bytes).map_err(|_| {
        unreadable(std::io::Error::new(
            ErrorKind::InvalidData,
            "token is not valid UTF-8",
        ))
    })?;

    tracing::debug!(path = %path.display(), "loaded access token");
    Ok(AccessToken::new(raw))
}
