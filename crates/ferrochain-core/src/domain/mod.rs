//! # Domain Models
//!
//! Strongly-typed request inputs for the option chain endpoint. Construction
//! validates the wire format so an invalid key or date never reaches the
//! request builder.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`InstrumentKey`] | `SEGMENT\|name` instrument identifier |
//! | [`ExpiryDate`] | `YYYY-MM-DD` contract expiry |
//! | [`ExpiryMonth`] | `YYYY-MM` month for expiry computation |
//! | [`HolidayCalendar`] | trading holidays used to adjust expiries |

mod expiry;
mod instrument;

pub use expiry::{
    monthly_expiry, monthly_expiry_weekday, ExpiryDate, ExpiryMonth, HolidayCalendar,
};
pub use instrument::InstrumentKey;
