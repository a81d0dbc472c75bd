//! Obligation domain records and the pure derivations over them: due-date
//! recurrence, bill/budget/goal status, and calendar arithmetic.

pub mod bill;
pub mod budget;
pub mod calendar;
pub mod goal;
pub mod recurrence;
pub mod transaction;

pub use bill::{Bill, BillStatus};
pub use budget::{Budget, BudgetUsage};
pub use goal::{Goal, GoalProgress};
pub use recurrence::{RecurrencePeriod, RecurrenceRule};
pub use transaction::{Transaction, TransactionKind};
