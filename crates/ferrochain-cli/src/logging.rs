//! tracing subscriber setup. Logs go to stderr (stdout carries the response
//! body) and optionally to a daily-rolled file.

use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "FERROCHAIN_LOG";

const LOG_FILE_PREFIX: &str = "ferrochain.log";

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. The returned guard must outlive the last
/// log call when a log directory is used, or buffered lines are lost.
pub fn init(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>, CliError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let Some(log_dir) = log_dir else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .without_time()
            .try_init()
            .map_err(|e| CliError::Logging(e.to_string()))?;
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr.and(file_writer))
        .with_ansi(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing::debug!(log_dir = %log_dir.display(), "file logging enabled");
    Ok(Some(guard))
}
