//! Calendar arithmetic shared by monthly recurrence and horizon building.
//!
//! Month arithmetic clamps: adding months to a day that does not exist in the
//! target month lands on that month's last day (Jan 31 + 1 month = Feb 28/29).
//! It never skips the month and never rolls over into the following one.

use chrono::{Months, NaiveDate};
use crate::{EngineError, ResultEngine};

/// Adds `months` calendar months to `date`, clamping the day-of-month.
///
/// Returns `None` only when the result is outside the representable range.
#[must_use]
pub fn add_months_clamped(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// The `[start, end]` date window a forecast is computed over (both
/// inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Horizon {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Horizon {
    /// Builds the window starting `today` and ending `months_ahead` calendar
    /// months later.
    ///
    /// Any positive number of months is accepted.
    pub fn months_ahead(today: NaiveDate, months_ahead: u32) -> ResultEngine<Self> {
        if months_ahead == 0 {
            return Err(EngineError::InvalidHorizon(
                "months_ahead must be > 0".to_string(),
            ));
        }
        let end = add_months_clamped(today, months_ahead).ok_or_else(|| {
            EngineError::InvalidHorizon(format!("months_ahead {months_ahead} is out of range"))
        })?;
        Ok(Self { start: today, end })
    }
}
