use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use time::macros::format_description;
use time::{Date, Month, Weekday};

use super::InstrumentKey;
use crate::ValidationError;

/// Fixed-date exchange holidays observed every year, as (month, day).
const FIXED_HOLIDAYS: [(Month, u8); 4] = [
    (Month::January, 26),
    (Month::August, 15),
    (Month::October, 2),
    (Month::December, 25),
];

/// Contract expiry date, rendered as `YYYY-MM-DD` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpiryDate(Date);

impl ExpiryDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|_| ValidationError::InvalidExpiryDate {
                value: trimmed.to_owned(),
            })
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }
}

impl Default for ExpiryDate {
    fn default() -> Self {
        Self(time::macros::date!(2024 - 03 - 28))
    }
}

impl Display for ExpiryDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for ExpiryDate {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

/// Calendar month (`YYYY-MM`) whose monthly expiry should be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryMonth {
    pub year: i32,
    pub month: Month,
}

impl ExpiryMonth {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let invalid = || ValidationError::InvalidExpiryMonth {
            value: trimmed.to_owned(),
        };

        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        let digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(year, 4) || !digits(month, 2) {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let month = Month::try_from(month).map_err(|_| invalid())?;

        Ok(Self { year, month })
    }

    fn last_day(self) -> Result<Date, ValidationError> {
        let (year, month) = match self.month {
            Month::December => (self.year + 1, Month::January),
            other => (self.year, other.next()),
        };
        Date::from_calendar_date(year, month, 1)
            .ok()
            .and_then(Date::previous_day)
            .ok_or_else(|| ValidationError::InvalidExpiryMonth {
                value: self.to_string(),
            })
    }
}

impl Display for ExpiryMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

impl FromStr for ExpiryMonth {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

/// Trading holidays: the fixed yearly set plus any explicitly supplied dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    extra: BTreeSet<Date>,
}

impl HolidayCalendar {
    pub fn with_holidays(holidays: impl IntoIterator<Item = ExpiryDate>) -> Self {
        Self {
            extra: holidays.into_iter().map(ExpiryDate::into_inner).collect(),
        }
    }

    pub fn is_holiday(&self, date: Date) -> bool {
        FIXED_HOLIDAYS
            .iter()
            .any(|(month, day)| date.month() == *month && date.day() == *day)
            || self.extra.contains(&date)
    }

    pub fn is_trading_day(&self, date: Date) -> bool {
        !matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday) && !self.is_holiday(date)
    }
}

/// Weekday on which an instrument's monthly contracts expire.
pub fn monthly_expiry_weekday(instrument: &InstrumentKey) -> Result<Weekday, ValidationError> {
    match instrument.as_str() {
        InstrumentKey::NIFTY_50 | InstrumentKey::SENSEX => Ok(Weekday::Thursday),
        InstrumentKey::NIFTY_BANK => Ok(Weekday::Wednesday),
        InstrumentKey::NIFTY_FIN_SERVICE => Ok(Weekday::Tuesday),
        InstrumentKey::NIFTY_MID_SELECT => Ok(Weekday::Monday),
        InstrumentKey::NIFTY_NEXT_50 | InstrumentKey::BANKEX => Ok(Weekday::Friday),
        other => Err(ValidationError::UnknownExpirySchedule {
            instrument_key: other.to_owned(),
        }),
    }
}

/// Monthly expiry: the last scheduled weekday of the month, moved back one day
/// at a time while it falls on a weekend or holiday.
pub fn monthly_expiry(
    instrument: &InstrumentKey,
    month: ExpiryMonth,
    holidays: &HolidayCalendar,
) -> Result<ExpiryDate, ValidationError> {
    let weekday = monthly_expiry_weekday(instrument)?;
    let exhausted = || ValidationError::InvalidExpiryMonth {
        value: month.to_string(),
    };

    let mut candidate = month.last_day()?;
    while candidate.weekday() != weekday {
        candidate = candidate.previous_day().ok_or_else(exhausted)?;
    }
    while !holidays.is_trading_day(candidate) {
        candidate = candidate.previous_day().ok_or_else(exhausted)?;
    }

    tracing::debug!(
        instrument = %instrument,
        month = %month,
        expiry = %ExpiryDate(candidate),
        "computed monthly expiry"
    );
    Ok(ExpiryDate(candidate))
}
