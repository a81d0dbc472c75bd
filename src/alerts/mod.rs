//! Alert planning: turns obligation state into deterministic alert intents.
//!
//! The planner holds no delivery state. Intent identifiers are stable for a
//! given obligation and condition, so the external delivery layer can dedup
//! repeated planning passes against what it has already sent.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::obligations::{Bill, BillStatus, Budget, Goal, Transaction, TransactionKind};

/// Progress fractions (as percentages) at which a goal notification fires.
pub const GOAL_MILESTONES: [u32; 5] = [25, 50, 75, 90, 100];

/// Budget consumption at or above this percentage escalates to critical.
const BUDGET_CRITICAL_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertCategory {
    BillReminder,
    BudgetThreshold,
    GoalMilestone,
    GoalCompleted,
    SuspiciousActivity,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// A planned notification, not yet delivered. Produced fresh on every pass;
/// `id` is deterministic so a second pass over the same unresolved condition
/// yields the same identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertIntent {
    pub id: String,
    pub category: AlertCategory,
    pub severity: AlertSeverity,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// Tunables for the planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Expenses strictly above this amount are flagged as suspicious.
    pub suspicious_amount_threshold: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            suspicious_amount_threshold: 1000.0,
        }
    }
}

/// One intent per unpaid bill that is due soon (warning) or overdue
/// (critical). Paid and comfortably-future bills emit nothing.
pub fn plan_bill_alert(bill: &Bill, today: NaiveDate) -> Option<AlertIntent> {
    let severity = match bill.status(today) {
        BillStatus::DueSoon => AlertSeverity::Warning,
        BillStatus::Overdue => AlertSeverity::Critical,
        BillStatus::Paid | BillStatus::Upcoming => return None,
    };
    Some(AlertIntent {
        id: format!("bill:{}", bill.id),
        category: AlertCategory::BillReminder,
        severity,
        name: bill.name.clone(),
        amount: Some(bill.amount),
        date: Some(bill.next_due_date),
        percentage: None,
    })
}

/// One intent per budget whose consumption crossed its alert threshold,
/// escalated to critical once overspent or near-exhausted.
pub fn plan_budget_alert(budget: &Budget) -> Option<AlertIntent> {
    let usage = budget.usage();
    if !usage.should_alert {
        return None;
    }
    let severity = if usage.over_budget || usage.percentage_used >= BUDGET_CRITICAL_PERCENT {
        AlertSeverity::Critical
    } else {
        AlertSeverity::Warning
    };
    Some(AlertIntent {
        id: format!("budget:{}", budget.id),
        category: AlertCategory::BudgetThreshold,
        severity,
        name: budget.name.clone(),
        amount: Some(budget.spent),
        date: None,
        percentage: Some(usage.percentage_used),
    })
}

/// At most one intent per goal per pass: the highest milestone the goal has
/// reached whose identifier is not in `already_notified`. Milestones crossed
/// in one jump are skipped, not back-filled. The caller supplies the
/// already-notified set; this function never remembers past passes.
pub fn plan_goal_milestone(
    goal: &Goal,
    already_notified: &HashSet<String>,
) -> Option<AlertIntent> {
    let percentage = goal.progress_percentage();
    let milestone = GOAL_MILESTONES
        .iter()
        .rev()
        .copied()
        .find(|m| f64::from(*m) <= percentage)?;
    let id = format!("goal:{}:{}", goal.id, milestone);
    if already_notified.contains(&id) {
        return None;
    }
    let category = if milestone == 100 {
        AlertCategory::GoalCompleted
    } else {
        AlertCategory::GoalMilestone
    };
    Some(AlertIntent {
        id,
        category,
        severity: AlertSeverity::Warning,
        name: goal.name.clone(),
        amount: Some(goal.current_amount),
        date: Some(goal.target_date),
        percentage: Some(percentage),
    })
}

/// Flags expenses strictly above the configured threshold. Income never
/// emits regardless of size.
pub fn plan_transaction_alert(
    transaction: &Transaction,
    config: &PlannerConfig,
) -> Option<AlertIntent> {
    if transaction.kind != TransactionKind::Expense {
        return None;
    }
    if transaction.amount <= config.suspicious_amount_threshold {
        return None;
    }
    Some(AlertIntent {
        id: format!("transaction:{}", transaction.id),
        category: AlertCategory::SuspiciousActivity,
        severity: AlertSeverity::Critical,
        name: transaction.description.clone(),
        amount: Some(transaction.amount),
        date: Some(transaction.date),
        percentage: None,
    })
}

/// Plans a full batch in one pass. Each obligation is evaluated
/// independently, so identical inputs always produce the identical intent
/// list, in bill/budget/goal/transaction order.
pub fn plan_alerts(
    bills: &[Bill],
    budgets: &[Budget],
    goals: &[Goal],
    transactions: &[Transaction],
    today: NaiveDate,
    already_notified: &HashSet<String>,
    config: &PlannerConfig,
) -> Vec<AlertIntent> {
    let mut intents = Vec::new();
    intents.extend(bills.iter().filter_map(|bill| plan_bill_alert(bill, today)));
    intents.extend(budgets.iter().filter_map(plan_budget_alert));
    intents.extend(
        goals
            .iter()
            .filter_map(|goal| plan_goal_milestone(goal, already_notified)),
    );
    intents.extend(
        transactions
            .iter()
            .filter_map(|txn| plan_transaction_alert(txn, config)),
    );
    intents
}
