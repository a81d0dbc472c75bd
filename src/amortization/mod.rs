//! Fixed-payment loan amortization: decomposes each scheduled payment into
//! interest on the remaining balance and a principal reduction.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::obligations::calendar;

/// Balances this close to zero are treated as fully repaid.
const BALANCE_EPSILON: f64 = 1e-9;

/// Immutable terms of a fixed-rate, monthly-payment loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    /// Annual interest rate as a percentage, e.g. 12.0 for 12%.
    pub annual_rate: f64,
    pub term_months: u32,
    pub start_date: NaiveDate,
    /// Day of month each payment falls on (1-31), clamped to month length.
    pub payment_day: u32,
}

/// One scheduled payment in an amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based payment index.
    pub index: u32,
    pub scheduled_date: NaiveDate,
    pub payment: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,
    /// Balance after this payment; never negative, never increasing.
    pub remaining_balance: f64,
    /// Flipped by the caller once the payment clears; never mutated here.
    #[serde(default)]
    pub paid: bool,
}

impl LoanTerms {
    pub fn new(
        principal: f64,
        annual_rate: f64,
        term_months: u32,
        start_date: NaiveDate,
        payment_day: u32,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            term_months,
            start_date,
            payment_day,
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.principal < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "principal must be non-negative, got {}",
                self.principal
            )));
        }
        if self.annual_rate < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "annual rate must be non-negative, got {}",
                self.annual_rate
            )));
        }
        if !(1..=31).contains(&self.payment_day) {
            return Err(EngineError::InvalidInput(format!(
                "payment day {} outside 1..=31",
                self.payment_day
            )));
        }
        Ok(())
    }

    /// The fixed monthly payment for these terms, via the standard annuity
    /// formula; falls back to straight-line division when the rate is zero.
    pub fn monthly_payment(&self) -> f64 {
        if self.term_months == 0 {
            return 0.0;
        }
        let r = self.annual_rate / 100.0 / 12.0;
        let n = self.term_months as i32;
        if r > 0.0 {
            let factor = (1.0 + r).powi(n);
            self.principal * r * factor / (factor - 1.0)
        } else {
            self.principal / n as f64
        }
    }
}

/// Generates the full payment schedule for the given terms. Either the whole
/// schedule is produced or an error is returned before any entry exists.
///
/// Interest is recomputed from the live remaining balance each iteration so
/// rounding drift never accumulates across entries. The sequence truncates
/// once the balance hits zero, which guards against floating-point residue
/// producing more entries than the loan requires.
pub fn generate_schedule(terms: &LoanTerms) -> Result<Vec<AmortizationEntry>, EngineError> {
    terms.validate()?;
    if terms.term_months == 0 {
        return Ok(Vec::new());
    }

    let monthly_rate = terms.annual_rate / 100.0 / 12.0;
    let payment = terms.monthly_payment();
    let mut balance = terms.principal;
    let mut schedule = Vec::with_capacity(terms.term_months as usize);

    for index in 1..=terms.term_months {
        let interest_portion = balance * monthly_rate;
        let principal_portion = payment - interest_portion;
        balance = (balance - principal_portion).max(0.0);

        schedule.push(AmortizationEntry {
            index,
            scheduled_date: payment_date(terms, index)?,
            payment,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
            paid: false,
        });

        if balance <= BALANCE_EPSILON && payment > 0.0 {
            break;
        }
    }

    Ok(schedule)
}

/// Date of the `index`-th payment: the start date advanced by whole months
/// and normalized to the fixed payment day, clamped to the month's length.
fn payment_date(terms: &LoanTerms, index: u32) -> Result<NaiveDate, EngineError> {
    let anchored = calendar::shift_months(terms.start_date, index as i32 - 1)?;
    calendar::clamped_ymd(anchored.year(), anchored.month(), terms.payment_day)
}
