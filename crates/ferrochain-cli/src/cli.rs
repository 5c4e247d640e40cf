//! CLI argument definitions for Ferrochain.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fetch` | Fetch the option chain and print the raw body (default) |
//! | `expiry` | Print the computed monthly expiry date for an instrument |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--strict` | `false` | Turn transport and HTTP status failures into exit codes |
//! | `-v` | warn | Increase log verbosity (repeatable) |
//! | `--log-dir` | none | Also write logs to a daily file in this directory |
//!
//! # Examples
//!
//! ```bash
//! # Same as `ferrochain fetch` with every default
//! ferrochain
//!
//! # Bank Nifty chain for this month's expiry
//! ferrochain fetch --instrument-key "NSE_INDEX|Nifty Bank" --expiry-month 2024-03
//!
//! # Fail the pipeline on 4xx/5xx or network errors
//! ferrochain --strict fetch --token-file api/token/accessToken_OC.txt
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use ferrochain_core::{
    ExpiryDate, ExpiryMonth, InstrumentKey, DEFAULT_BASE_URL, DEFAULT_TOKEN_FILE,
};

/// Ferrochain - Upstox option chain fetcher
///
/// Reads a bearer token from a file, requests the option chain for one
/// instrument and expiry, and prints the response body exactly as received.
#[derive(Debug, Parser)]
#[command(name = "ferrochain", author, version, about = "Upstox option chain fetcher")]
pub struct Cli {
    /// Exit non-zero on transport errors (3) and non-2xx responses (4).
    ///
    /// Without it, failures are logged and the process exits 0 after
    /// printing whatever body was received.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    ///
    /// FERROCHAIN_LOG overrides this with a full filter directive.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to a daily-rolled file in this directory.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The command to run; `fetch` with defaults when none was given.
    pub fn selected_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Fetch(FetchArgs::default()))
    }
}

/// Available CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch the option chain and write the raw response body to stdout.
    Fetch(FetchArgs),

    /// Print the monthly expiry date of an instrument.
    ///
    ///   ferrochain expiry --month 2024-03
    ///   ferrochain expiry --instrument-key "BSE_INDEX|SENSEX" --month 2024-09
    Expiry(ExpiryArgs),
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// File holding the bearer token; surrounding whitespace is ignored.
    #[arg(long, default_value = DEFAULT_TOKEN_FILE)]
    pub token_file: PathBuf,

    /// Instrument to request, as SEGMENT|name.
    #[arg(long, default_value = InstrumentKey::NIFTY_50)]
    pub instrument_key: InstrumentKey,

    /// Contract expiry date (YYYY-MM-DD). Defaults to 2024-03-28.
    #[arg(long, conflicts_with = "expiry_month")]
    pub expiry_date: Option<ExpiryDate>,

    /// Compute the instrument's monthly expiry for this month (YYYY-MM).
    #[arg(long)]
    pub expiry_month: Option<ExpiryMonth>,

    /// Extra trading holiday (YYYY-MM-DD) for --expiry-month; repeatable.
    #[arg(long = "holiday", requires = "expiry_month")]
    pub holidays: Vec<ExpiryDate>,

    /// Option chain endpoint.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in milliseconds. Unset leaves the HTTP client default.
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self {
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            instrument_key: InstrumentKey::default(),
            expiry_date: None,
            expiry_month: None,
            holidays: Vec::new(),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: None,
        }
    }
}

/// Arguments for the `expiry` command.
#[derive(Debug, Clone, Args)]
pub struct ExpiryArgs {
    /// Instrument whose schedule to use.
    #[arg(long, default_value = InstrumentKey::NIFTY_50)]
    pub instrument_key: InstrumentKey,

    /// Month to compute (YYYY-MM).
    #[arg(long)]
    pub month: ExpiryMonth,

    /// Extra trading holiday (YYYY-MM-DD); repeatable.
    #[arg(long = "holiday")]
    pub holidays: Vec<ExpiryDate>,
}
