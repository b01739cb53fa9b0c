use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::core::PulseError;

/// One daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    /// Trading day, in the exchange's local calendar.
    pub date: NaiveDate,
    /// Close price for the day.
    pub close: f64,
}

/// Daily closes ordered by date. Empty when the symbol is unknown or has no data.
pub type PriceSeries = Vec<PricePoint>;

/// An inclusive `[start, end]` range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceWindow {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
}

impl PriceWindow {
    /// The window ending on `today` and starting `days` days earlier.
    #[must_use]
    pub fn trailing(days: u32, today: NaiveDate) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// Same as [`PriceWindow::trailing`], anchored on the current UTC date.
    #[must_use]
    pub fn trailing_from_today(days: u32) -> Self {
        Self::trailing(days, Utc::now().date_naive())
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Unix bounds for the chart API: start of `start` up to (excluding) the day after `end`.
    pub(crate) fn unix_period(&self) -> Result<(i64, i64), PulseError> {
        if self.start > self.end {
            return Err(PulseError::InvalidDates);
        }
        let after_end = self.end.succ_opt().ok_or(PulseError::InvalidDates)?;
        Ok((midnight_utc(self.start), midnight_utc(after_end)))
    }
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

pub(crate) fn local_date(ts: i64, gmtoffset: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(ts.checked_add(gmtoffset)?, 0).map(|dt| dt.date_naive())
}
