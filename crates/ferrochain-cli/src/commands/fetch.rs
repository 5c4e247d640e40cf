use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use ferrochain_core::{
    monthly_expiry, FetchError, Fetcher, FetcherConfig, HolidayCalendar, OptionChainQuery,
};

use crate::cli::FetchArgs;
use crate::error::CliError;
use crate::output;

/// Resolve arguments into a fetcher configuration. `--expiry-month` wins over
/// the fixed default expiry date.
pub fn fetcher_config(args: &FetchArgs) -> Result<FetcherConfig, CliError> {
    let expiry_date = match args.expiry_month {
        Some(month) => {
            let holidays = HolidayCalendar::with_holidays(args.holidays.iter().copied());
            monthly_expiry(&args.instrument_key, month, &holidays)?
        }
        None => args.expiry_date.unwrap_or_default(),
    };

    Ok(FetcherConfig {
        token_path: args.token_file.clone(),
        base_url: args.base_url.clone(),
        query: OptionChainQuery::new(args.instrument_key.clone(), expiry_date),
        timeout: args.timeout_ms.map(Duration::from_millis),
    })
}

pub async fn run<W: Write>(
    args: &FetchArgs,
    strict: bool,
    out: &mut W,
) -> Result<ExitCode, CliError> {
    let fetcher = Fetcher::new(fetcher_config(args)?)?;
    let query = &fetcher.config().query;
    tracing::info!(
        segment = query.instrument_key.segment(),
        instrument_name = query.instrument_key.name(),
        expiry_date = %query.expiry_date,
        "fetching option chain"
    );

    match fetcher.fetch().await {
        Ok(body) => {
            output::write_body(out, &body)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(FetchError::NonSuccessStatus { status, body }) => {
            tracing::warn!(status, "option chain request returned a non-success status");
            output::write_body(out, &body)?;
            if strict {
                return Err(FetchError::NonSuccessStatus { status, body }.into());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error @ FetchError::Transport(_)) => {
            // Nothing was received, so nothing is printed.
            tracing::warn!(code = error.code(), %error, "option chain request failed");
            if strict {
                return Err(error.into());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if let FetchError::CredentialNotFound { path } = &error {
                tracing::info!(path = %path.display(), "no access token file at this path");
            }
            Err(error.into())
        }
    }
}
