mod expiry;
mod fetch;

use std::io::Write;
use std::process::ExitCode;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<ExitCode, CliError> {
    match cli.selected_command() {
        Command::Fetch(args) => fetch::run(&args, cli.strict, out).await,
        Command::Expiry(args) => expiry::run(&args, out),
    }
}
