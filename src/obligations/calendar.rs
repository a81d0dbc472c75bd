use chrono::{Datelike, Duration, NaiveDate};

use crate::errors::EngineError;

/// Number of days in the given month, derived from the first day of the
/// following month. Months outside 1-12 are a construction failure, not a
/// panic.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, EngineError> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::DateConstruction(format!(
            "month {month} outside 1..=12"
        )));
    }
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(|| {
        EngineError::DateConstruction(format!(
            "no valid month start for {next_year}-{next_month:02}"
        ))
    })?;
    let last_current = first_next - Duration::days(1);
    Ok(last_current.day())
}

/// Builds a date from year/month/day, clamping the day to the month length.
/// Day 31 in February resolves to the 28th (or 29th), never the next month.
pub fn clamped_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, EngineError> {
    let day = day.min(days_in_month(year, month)?).max(1);
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        EngineError::DateConstruction(format!("no valid date for {year}-{month:02}-{day:02}"))
    })
}

/// Advances (or rewinds) a date by whole calendar months, preserving the
/// day-of-month where it exists and clamping otherwise.
pub fn shift_months(date: NaiveDate, months: i32) -> Result<NaiveDate, EngineError> {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    clamped_ymd(year, month as u32, date.day())
}

/// Advances a date by whole calendar years with the same clamping rule
/// (Feb 29 on a non-leap target year resolves to Feb 28).
pub fn shift_years(date: NaiveDate, years: i32) -> Result<NaiveDate, EngineError> {
    clamped_ymd(date.year() + years, date.month(), date.day())
}
