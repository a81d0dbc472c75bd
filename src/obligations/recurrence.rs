use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar;
use crate::errors::EngineError;

/// Fallback advance when calendar arithmetic cannot produce a valid date.
const FALLBACK_DAYS: i64 = 30;

/// Named cadence used by budgets and period-based obligations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecurrencePeriod {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

/// How a periodic due date advances: a fixed day of the month (bills) or a
/// named period applied to the reference date (budgets).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecurrenceRule {
    DayOfMonth(u32),
    Period(RecurrencePeriod),
}

impl RecurrenceRule {
    /// Rejects rules that can never produce a date.
    pub fn validate(&self) -> Result<(), EngineError> {
        match self {
            RecurrenceRule::DayOfMonth(day) if !(1..=31).contains(day) => Err(
                EngineError::InvalidInput(format!("day-of-month {day} outside 1..=31")),
            ),
            _ => Ok(()),
        }
    }

    /// Computes the next occurrence strictly after `after` for day-of-month
    /// rules, or one period forward for named periods. Pure and stateless:
    /// identical inputs always yield identical outputs.
    ///
    /// Days that do not exist in the target month clamp to the month's last
    /// day rather than skipping into the following month.
    pub fn next_occurrence(&self, after: NaiveDate) -> Result<NaiveDate, EngineError> {
        self.validate()?;
        let next = match self {
            RecurrenceRule::DayOfMonth(day) => {
                let candidate = calendar::clamped_ymd(after.year(), after.month(), *day);
                match candidate {
                    Ok(date) if date > after => date,
                    Ok(_) => {
                        let rolled = calendar::shift_months(after.with_day(1).unwrap_or(after), 1)
                            .and_then(|first| {
                                calendar::clamped_ymd(first.year(), first.month(), *day)
                            });
                        rolled.unwrap_or(after + Duration::days(FALLBACK_DAYS))
                    }
                    Err(_) => after + Duration::days(FALLBACK_DAYS),
                }
            }
            RecurrenceRule::Period(period) => {
                let fallback = after + Duration::days(FALLBACK_DAYS);
                match period {
                    RecurrencePeriod::Weekly => after + Duration::weeks(1),
                    RecurrencePeriod::Monthly => {
                        calendar::shift_months(after, 1).unwrap_or(fallback)
                    }
                    RecurrencePeriod::Quarterly => {
                        calendar::shift_months(after, 3).unwrap_or(fallback)
                    }
                    RecurrencePeriod::Yearly => calendar::shift_years(after, 1).unwrap_or(fallback),
                }
            }
        };
        Ok(next)
    }
}
