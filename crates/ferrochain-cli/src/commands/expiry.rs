use std::io::Write;
use std::process::ExitCode;

use ferrochain_core::{monthly_expiry, HolidayCalendar};

use crate::cli::ExpiryArgs;
use crate::error::CliError;

pub fn run<W: Write>(args: &ExpiryArgs, out: &mut W) -> Result<ExitCode, CliError> {
    let holidays = HolidayCalendar::with_holidays(args.holidays.iter().copied());
    let expiry = monthly_expiry(&args.instrument_key, args.month, &holidays)?;

    writeln!(out, "{expiry}")?;
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
