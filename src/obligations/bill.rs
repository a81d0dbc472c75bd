use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recurrence::RecurrenceRule;
use crate::errors::EngineError;

/// A recurring payable obligation with a rolling due date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub rule: RecurrenceRule,
    pub next_due_date: NaiveDate,
    pub reminder_days_before: i64,
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_paid_date: Option<NaiveDate>,
}

/// Derived bill state, recomputed from the current date on every call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BillStatus {
    Paid,
    Overdue,
    DueSoon,
    Upcoming,
}

impl Bill {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        rule: RecurrenceRule,
        next_due_date: NaiveDate,
        reminder_days_before: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            rule,
            next_due_date,
            reminder_days_before,
            paid: false,
            last_paid_date: None,
        }
    }

    /// Classifies the bill against `today`. A bill due exactly today is
    /// neither overdue nor due-soon; it reports as upcoming.
    pub fn status(&self, today: NaiveDate) -> BillStatus {
        if self.paid {
            return BillStatus::Paid;
        }
        if self.next_due_date < today {
            return BillStatus::Overdue;
        }
        let days_until = (self.next_due_date - today).num_days();
        if days_until > 0 && days_until <= self.reminder_days_before {
            BillStatus::DueSoon
        } else {
            BillStatus::Upcoming
        }
    }

    /// Returns a copy marked paid at `now`, with the due date rolled one
    /// occurrence forward. Paying early settles the current occurrence and
    /// moves to the next period; paying late rolls from the payment moment
    /// and never catches up missed periods.
    pub fn mark_paid(&self, now: NaiveDate) -> Result<Bill, EngineError> {
        let mut paid = self.clone();
        paid.paid = true;
        paid.last_paid_date = Some(now);
        // An early payment settles the occurrence at next_due_date, so the
        // rollover anchor is never before the date being settled.
        let anchor = now.max(self.next_due_date);
        paid.next_due_date = self.rule.next_occurrence(anchor)?;
        Ok(paid)
    }

    /// Returns a copy with the paid marker cleared. The due date is left
    /// untouched.
    pub fn mark_unpaid(&self) -> Bill {
        let mut unpaid = self.clone();
        unpaid.paid = false;
        unpaid.last_paid_date = None;
        unpaid
    }
}
