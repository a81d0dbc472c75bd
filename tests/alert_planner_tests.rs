use std::collections::HashSet;

use chrono::NaiveDate;
use obligation_core::alerts::{
    plan_alerts, plan_bill_alert, plan_budget_alert, plan_goal_milestone,
    plan_transaction_alert, AlertCategory, AlertSeverity, PlannerConfig,
};
use obligation_core::obligations::{
    Bill, Budget, Goal, RecurrencePeriod, RecurrenceRule, Transaction, TransactionKind,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rent_bill(due: NaiveDate) -> Bill {
    Bill::new("Rent", 1200.0, RecurrenceRule::DayOfMonth(15), due, 3)
}

#[test]
fn test_due_soon_and_overdue_bills_emit_with_stable_ids() {
    let bill = rent_bill(ymd(2025, 5, 15));

    let soon = plan_bill_alert(&bill, ymd(2025, 5, 13)).unwrap();
    assert_eq!(soon.id, format!("bill:{}", bill.id));
    assert_eq!(soon.category, AlertCategory::BillReminder);
    assert_eq!(soon.severity, AlertSeverity::Warning);
    assert_eq!(soon.date, Some(ymd(2025, 5, 15)));

    let overdue = plan_bill_alert(&bill, ymd(2025, 5, 20)).unwrap();
    assert_eq!(overdue.id, soon.id);
    assert_eq!(overdue.severity, AlertSeverity::Critical);

    // Paid bills and bills far in the future stay quiet.
    assert!(plan_bill_alert(&bill, ymd(2025, 5, 1)).is_none());
    let paid = bill.mark_paid(ymd(2025, 5, 14)).unwrap();
    assert!(plan_bill_alert(&paid, ymd(2025, 5, 20)).is_none());
}

#[test]
fn test_budget_severity_escalates() {
    let mut budget = Budget::new(
        "Dining",
        1000.0,
        RecurrencePeriod::Monthly,
        ymd(2025, 1, 1),
        0.8,
    );

    budget.spent = 700.0;
    assert!(plan_budget_alert(&budget).is_none());

    budget.spent = 850.0;
    let warning = plan_budget_alert(&budget).unwrap();
    assert_eq!(warning.id, format!("budget:{}", budget.id));
    assert_eq!(warning.severity, AlertSeverity::Warning);
    assert_eq!(warning.percentage, Some(85.0));

    budget.spent = 920.0;
    let near_limit = plan_budget_alert(&budget).unwrap();
    assert_eq!(near_limit.severity, AlertSeverity::Critical);

    budget.spent = 1100.0;
    let over = plan_budget_alert(&budget).unwrap();
    assert_eq!(over.severity, AlertSeverity::Critical);
}

#[test]
fn test_goal_emits_highest_unnotified_milestone_only() {
    let mut goal = Goal::new("House deposit", 10_000.0, ymd(2027, 1, 1));
    goal.current_amount = 5_000.0;

    let mut notified = HashSet::new();
    notified.insert(format!("goal:{}:25", goal.id));

    let intent = plan_goal_milestone(&goal, &notified).unwrap();
    assert_eq!(intent.id, format!("goal:{}:50", goal.id));
    assert_eq!(intent.category, AlertCategory::GoalMilestone);
    assert_eq!(intent.percentage, Some(50.0));

    // Once 50 is recorded, the same progress emits nothing further.
    notified.insert(intent.id);
    assert!(plan_goal_milestone(&goal, &notified).is_none());
}

#[test]
fn test_goal_milestones_can_be_skipped() {
    let mut goal = Goal::new("Car", 10_000.0, ymd(2027, 1, 1));
    goal.current_amount = 7_800.0;

    // Jumped straight past 25 and 50: only 75 fires.
    let intent = plan_goal_milestone(&goal, &HashSet::new()).unwrap();
    assert_eq!(intent.id, format!("goal:{}:75", goal.id));
}

#[test]
fn test_goal_completion_uses_distinct_category() {
    let mut goal = Goal::new("Bike", 500.0, ymd(2026, 1, 1));
    goal.current_amount = 500.0;

    let intent = plan_goal_milestone(&goal, &HashSet::new()).unwrap();
    assert_eq!(intent.id, format!("goal:{}:100", goal.id));
    assert_eq!(intent.category, AlertCategory::GoalCompleted);
}

#[test]
fn test_goal_below_first_milestone_is_silent() {
    let mut goal = Goal::new("Piano", 5_000.0, ymd(2027, 1, 1));
    goal.current_amount = 1_000.0;
    assert_eq!(goal.progress_percentage(), 20.0);
    assert!(plan_goal_milestone(&goal, &HashSet::new()).is_none());
}

#[test]
fn test_suspicious_activity_flags_large_expenses_only() {
    let config = PlannerConfig::default();

    let expense = Transaction::new("Jewelry", 1500.0, TransactionKind::Expense, ymd(2025, 3, 3));
    let intent = plan_transaction_alert(&expense, &config).unwrap();
    assert_eq!(intent.id, format!("transaction:{}", expense.id));
    assert_eq!(intent.category, AlertCategory::SuspiciousActivity);
    assert_eq!(intent.severity, AlertSeverity::Critical);

    let income = Transaction::new("Bonus", 1500.0, TransactionKind::Income, ymd(2025, 3, 3));
    assert!(plan_transaction_alert(&income, &config).is_none());

    let at_threshold =
        Transaction::new("Laptop", 1000.0, TransactionKind::Expense, ymd(2025, 3, 3));
    assert!(plan_transaction_alert(&at_threshold, &config).is_none());

    let custom = PlannerConfig {
        suspicious_amount_threshold: 200.0,
    };
    assert!(plan_transaction_alert(&at_threshold, &custom).is_some());
}

#[test]
fn test_batch_planning_is_deterministic_and_ordered() {
    let today = ymd(2025, 5, 14);

    let bill = rent_bill(ymd(2025, 5, 15));
    let mut budget = Budget::new(
        "Groceries",
        1000.0,
        RecurrencePeriod::Monthly,
        ymd(2025, 5, 1),
        0.8,
    );
    budget.spent = 950.0;
    let mut goal = Goal::new("Trip", 1000.0, ymd(2025, 12, 1));
    goal.current_amount = 260.0;
    let txn = Transaction::new("Watch", 2000.0, TransactionKind::Expense, today);

    let notified = HashSet::new();
    let config = PlannerConfig::default();
    let bills = vec![bill];
    let budgets = vec![budget];
    let goals = vec![goal];
    let transactions = vec![txn];

    let first = plan_alerts(
        &bills,
        &budgets,
        &goals,
        &transactions,
        today,
        &notified,
        &config,
    );
    let second = plan_alerts(
        &bills,
        &budgets,
        &goals,
        &transactions,
        today,
        &notified,
        &config,
    );

    assert_eq!(first.len(), 4);
    let ids: Vec<&str> = first.iter().map(|i| i.id.as_str()).collect();
    let again: Vec<&str> = second.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, again);
    assert_eq!(first[0].category, AlertCategory::BillReminder);
    assert_eq!(first[1].category, AlertCategory::BudgetThreshold);
    assert_eq!(first[2].category, AlertCategory::GoalMilestone);
    assert_eq!(first[3].category, AlertCategory::SuspiciousActivity);
}
