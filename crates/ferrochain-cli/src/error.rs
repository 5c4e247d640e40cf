use ferrochain_core::{FetchError, FetchErrorKind};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ferrochain_core::ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Fetch(error) => match error.kind() {
                FetchErrorKind::CredentialNotFound | FetchErrorKind::CredentialUnreadable => 2,
                FetchErrorKind::Transport => 3,
                FetchErrorKind::NonSuccessStatus => 4,
            },
            Self::Logging(_) => 10,
            Self::Io(_) => 10,
        }
    }
}
