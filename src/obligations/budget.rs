use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recurrence::RecurrencePeriod;

/// A spending guardrail over a named period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub spent: f64,
    pub period: RecurrencePeriod,
    pub start_date: NaiveDate,
    /// Fraction of the budget (0-1) at which an alert should fire.
    pub alert_threshold: f64,
}

/// Derived consumption state for a budget, recomputed on every call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetUsage {
    pub percentage_used: f64,
    pub over_budget: bool,
    pub should_alert: bool,
}

impl Budget {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        period: RecurrencePeriod,
        start_date: NaiveDate,
        alert_threshold: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            spent: 0.0,
            period,
            start_date,
            alert_threshold,
        }
    }

    /// Percentage of the budget consumed so far. A non-positive budget
    /// amount reports 0 rather than dividing by it.
    pub fn percentage_used(&self) -> f64 {
        if self.amount <= 0.0 {
            return 0.0;
        }
        self.spent / self.amount * 100.0
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.amount
    }

    pub fn should_alert(&self) -> bool {
        self.percentage_used() >= self.alert_threshold * 100.0
    }

    pub fn usage(&self) -> BudgetUsage {
        BudgetUsage {
            percentage_used: self.percentage_used(),
            over_budget: self.is_over_budget(),
            should_alert: self.should_alert(),
        }
    }
}
