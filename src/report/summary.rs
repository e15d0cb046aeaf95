//! Console and JSON summaries of a loan's payments and schedules

use crate::frequency::PaymentFrequency;
use crate::loan::Loan;
use crate::payment::{round_cents, PaymentSet};
use crate::schedule::{ScheduleSet, Termination};
use serde::Serialize;
use std::fmt;

/// Per-frequency schedule statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub frequency: PaymentFrequency,
    pub payment: f64,
    pub periods: usize,
    pub total_interest: f64,
    pub total_paid: f64,
    pub final_balance: f64,
    pub termination: Termination,
    /// Whole years and leftover periods to pay off; `None` unless paid off
    pub payoff_time: Option<(u32, u32)>,
}

/// Payments and schedule outcomes for one loan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanSummary {
    pub principal: f64,
    pub quoted_rate_percent: f64,
    pub amortization_years: u32,
    pub term_years: u32,
    pub payments: PaymentSet,
    /// Monthly schedule balance at the end of the term
    pub term_end_balance: f64,
    pub schedules: Vec<ScheduleSummary>,
}

impl LoanSummary {
    pub fn new(loan: &Loan, set: &ScheduleSet) -> Self {
        let schedules = set
            .iter()
            .map(|(frequency, schedule)| ScheduleSummary {
                frequency,
                payment: set.payments.get(frequency),
                periods: schedule.len(),
                total_interest: round_cents(schedule.total_interest()),
                total_paid: round_cents(schedule.total_paid()),
                final_balance: set.outstanding_balance(frequency),
                termination: schedule.termination,
                payoff_time: schedule.payoff_time(),
            })
            .collect();

        Self {
            principal: loan.principal(),
            quoted_rate_percent: loan.terms().quoted_rate_percent(),
            amortization_years: loan.terms().amortization_years(),
            term_years: loan.terms().term_years(),
            payments: set.payments,
            term_end_balance: set.outstanding_balance(PaymentFrequency::Monthly),
            schedules,
        }
    }
}

/// Plain-text rendering for the console
impl fmt::Display for LoanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Mortgage Payment Results ---")?;
        for (frequency, amount) in self.payments.iter() {
            writeln!(f, "{}: ${:.2}", frequency.payment_label(), amount)?;
        }
        writeln!(
            f,
            "\nOutstanding balance after {}-year term (monthly schedule): ${}",
            self.term_years,
            format_currency(self.term_end_balance)
        )?;

        writeln!(
            f,
            "\n{:<24} {:>10} {:>8} {:>16} {:>16} {:>10}  {}",
            "Schedule", "Payment", "Periods", "Total Interest", "Final Balance", "Payoff", "Status"
        )?;
        for s in &self.schedules {
            let status = match s.termination {
                Termination::PaidOff => "paid off",
                Termination::TermLimit => "term end",
                Termination::SafetyBound => "SAFETY BOUND",
            };
            let payoff = match s.payoff_time {
                Some((years, periods)) => format!("{}y {}p", years, periods),
                None => "-".to_string(),
            };
            writeln!(
                f,
                "{:<24} {:>10.2} {:>8} {:>16} {:>16} {:>10}  {}",
                s.frequency.title(),
                s.payment,
                s.periods,
                format_currency(s.total_interest),
                format_currency(s.final_balance),
                payoff,
                status
            )?;
        }
        Ok(())
    }
}

/// Format with thousands separators and two decimals, e.g. 265,522.86
pub fn format_currency(amount: f64) -> String {
    let text = format!("{:.2}", amount.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && text != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}
