use chrono::{Datelike, NaiveDate};

/// Position of a date relative to the active February challenge window.
///
/// All comparisons are at calendar-day granularity: Feb 1 and the last day of
/// February are both inside the window, Jan 31 is one day before it. The
/// window is never stored; it is recomputed from the clock on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChallengeWindow {
    pub(crate) is_active: bool,
    /// 1-based day within February while active, 0 otherwise.
    pub(crate) day_of_month: u32,
    /// 28 or 29 depending on the target year.
    pub(crate) days_in_month: u32,
    pub(crate) days_left: u32,
    /// Whole days until Feb 1 of the target year; 0 once started.
    pub(crate) days_until_start: i64,
    pub(crate) year: i32,
}

impl ChallengeWindow {
    /// Compute the window for `today`.
    ///
    /// Target year rule: on or before the last day of February the window is
    /// this year's; from March 1 onward it is next year's. Total over all
    /// dates, no side effects.
    pub(crate) fn compute(today: NaiveDate) -> Self {
        let current_year = today.year();
        let year = if today <= feb_end(current_year) {
            current_year
        } else {
            current_year + 1
        };

        let start = feb_start(year);
        let end = feb_end(year);
        let days_in_month = end.day();

        let is_active = today >= start && today <= end;
        let day_of_month = if is_active { today.day() } else { 0 };
        let days_left = if is_active {
            days_in_month - day_of_month
        } else {
            days_in_month
        };
        let days_until_start = if !is_active && today < start {
            start.signed_duration_since(today).num_days()
        } else {
            0
        };

        Self {
            is_active,
            day_of_month,
            days_in_month,
            days_left,
            days_until_start,
            year,
        }
    }
}

fn feb_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 2, 1).unwrap_or_default()
}

fn feb_end(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 2, 29)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests;
