//! Ledger rows, schedules and the limits that stop them

use serde::{Deserialize, Serialize};

/// One payment period of an amortization ledger, amounts rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub starting_balance: f64,
    pub interest: f64,
    pub payment: f64,
    pub ending_balance: f64,
}

impl ScheduleRow {
    /// Principal repaid this period
    pub fn principal_paid(&self) -> f64 {
        self.payment - self.interest
    }
}

/// Upper bound on the number of periods a schedule may emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodLimit {
    /// Amortize to zero over `n` scheduled periods, plus a safety margin
    FullAmortization(u32),
    /// Stop after exactly `n` periods even if a balance remains
    Term(u32),
}

/// Why schedule generation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Balance reached zero
    PaidOff,
    /// Term-limited schedule ran its full term with a balance outstanding
    TermLimit,
    /// Full-amortization schedule hit the hard iteration cap with a balance outstanding
    SafetyBound,
}

/// Amortization ledger for one payment amount and periodic rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub payments_per_year: u32,
    /// Scheduled (disclosed) payment per period
    pub payment_amount: f64,
    pub periodic_rate: f64,
    pub limit: PeriodLimit,
    pub termination: Termination,
    pub rows: Vec<ScheduleRow>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&ScheduleRow> {
        self.rows.last()
    }

    /// Ending balance of the last emitted period
    pub fn final_balance(&self) -> Option<f64> {
        self.last().map(|r| r.ending_balance)
    }

    /// Sum of the rounded interest column
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    /// Sum of the rounded payment column
    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).sum()
    }

    /// Whole years and leftover periods needed to pay off, if it was paid off
    pub fn payoff_time(&self) -> Option<(u32, u32)> {
        if self.termination != Termination::PaidOff {
            return None;
        }
        let n = self.rows.len() as u32;
        Some((n / self.payments_per_year, n % self.payments_per_year))
    }
}
