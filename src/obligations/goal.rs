use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings target with a fixed deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: NaiveDate,
}

/// Derived progress state for a goal, recomputed on every call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalProgress {
    /// Progress capped at 100.
    pub percentage: f64,
    pub completed: bool,
    /// Amount per month still required to hit the target by its date.
    pub monthly_contribution_needed: f64,
}

impl Goal {
    pub fn new(name: impl Into<String>, target_amount: f64, target_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            target_date,
        }
    }

    /// Progress percentage capped at 100. A non-positive target reports 0
    /// rather than dividing by it.
    pub fn progress_percentage(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount * 100.0).min(100.0)
    }

    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Required monthly pace toward the target. Days remaining are clamped
    /// to zero and the month count is floored at one, so a goal already past
    /// its date reports the full shortfall as one month's contribution.
    pub fn monthly_contribution_needed(&self, today: NaiveDate) -> f64 {
        let shortfall = (self.target_amount - self.current_amount).max(0.0);
        let days_remaining = (self.target_date - today).num_days().max(0);
        let months_remaining = (days_remaining as f64 / 30.0).max(1.0);
        shortfall / months_remaining
    }

    pub fn progress(&self, today: NaiveDate) -> GoalProgress {
        GoalProgress {
            percentage: self.progress_percentage(),
            completed: self.is_completed(),
            monthly_contribution_needed: self.monthly_contribution_needed(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(target: f64, current: f64, date: NaiveDate) -> Goal {
        let mut g = Goal::new("Emergency fund", target, date);
        g.current_amount = current;
        g
    }

    #[test]
    fn percentage_caps_at_hundred() {
        let g = goal(1000.0, 1500.0, ymd(2026, 1, 1));
        assert_eq!(g.progress_percentage(), 100.0);
        assert!(g.is_completed());
    }

    #[test]
    fn zero_target_reports_zero_progress() {
        let g = goal(0.0, 100.0, ymd(2026, 1, 1));
        assert_eq!(g.progress_percentage(), 0.0);
        assert!(g.is_completed());
    }

    #[test]
    fn monthly_pace_uses_remaining_days() {
        // 300 days out: 10 months at 30 days each.
        let g = goal(3000.0, 0.0, ymd(2025, 11, 27));
        let pace = g.monthly_contribution_needed(ymd(2025, 1, 31));
        assert!((pace - 300.0).abs() < 1e-9);
    }

    #[test]
    fn past_deadline_asks_for_full_shortfall() {
        let g = goal(1000.0, 400.0, ymd(2025, 1, 1));
        let pace = g.monthly_contribution_needed(ymd(2025, 6, 1));
        assert!((pace - 600.0).abs() < 1e-9);
    }
}
