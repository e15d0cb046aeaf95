//! Schedules for all six payment frequencies of a loan

use super::generator::generate;
use super::row::{PeriodLimit, Schedule};
use crate::error::Result;
use crate::frequency::PaymentFrequency;
use crate::loan::{Loan, LoanTerms};
use crate::payment::{payment_set, PaymentSet};
use crate::rates::periodic_rate;
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

impl PeriodLimit {
    /// Limit for a frequency under the given terms
    ///
    /// A term shorter than the amortization stops after
    /// `term_years * payments_per_year` periods; otherwise the schedule runs
    /// to zero with the safety margin.
    pub fn for_terms(terms: &LoanTerms, payments_per_year: u32) -> Self {
        if terms.is_term_limited() {
            let years = terms.term_years().min(terms.amortization_years());
            PeriodLimit::Term(years * payments_per_year)
        } else {
            PeriodLimit::FullAmortization(terms.amortization_years() * payments_per_year)
        }
    }
}

/// Schedule for one frequency, driven by its disclosed payment
///
/// Uses the full-amortization payment and periodic rate even when the terms
/// limit the schedule to a shorter term.
pub fn schedule_for(
    principal: f64,
    frequency: PaymentFrequency,
    payments: &PaymentSet,
    terms: &LoanTerms,
) -> Schedule {
    let ppy = frequency.payments_per_year();
    let rate = periodic_rate(terms.quoted_rate_percent(), ppy);
    generate(principal, ppy, payments.get(frequency), rate, PeriodLimit::for_terms(terms, ppy))
}

/// Payment set and one schedule per frequency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSet {
    pub principal: f64,
    pub payments: PaymentSet,
    schedules: Vec<(PaymentFrequency, Schedule)>,
}

impl ScheduleSet {
    pub fn get(&self, frequency: PaymentFrequency) -> &Schedule {
        // Always built from PaymentFrequency::ALL, so every frequency is present
        &self.schedules[frequency.index()].1
    }

    /// (frequency, schedule) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (PaymentFrequency, &Schedule)> + '_ {
        self.schedules.iter().map(|(f, s)| (*f, s))
    }

    /// Balance left after the last emitted period (principal if nothing was emitted)
    pub fn outstanding_balance(&self, frequency: PaymentFrequency) -> f64 {
        self.get(frequency).final_balance().unwrap_or(self.principal)
    }

    /// Longest schedule length across all frequencies
    pub fn max_len(&self) -> usize {
        self.schedules.iter().map(|(_, s)| s.len()).max().unwrap_or(0)
    }
}

fn build_with_terms(principal: f64, terms: &LoanTerms) -> ScheduleSet {
    let payments = payment_set(principal, terms);

    // Independent ledgers; par_iter preserves the canonical order on collect
    let schedules: Vec<(PaymentFrequency, Schedule)> = PaymentFrequency::ALL
        .par_iter()
        .map(|&f| (f, schedule_for(principal, f, &payments, terms)))
        .collect();

    for (f, s) in &schedules {
        debug!(
            "{}: payment {:.2}, {} periods, final balance {:.2}",
            f,
            payments.get(*f),
            s.len(),
            s.final_balance().unwrap_or(principal)
        );
    }

    ScheduleSet {
        principal,
        payments,
        schedules,
    }
}

/// Build all six schedules over the loan's term
pub fn build_schedules(loan: &Loan) -> ScheduleSet {
    build_with_terms(loan.principal(), loan.terms())
}

/// Build all six schedules for a requested term, clamped to the amortization
pub fn build_schedules_for_term(loan: &Loan, term_years: u32) -> Result<ScheduleSet> {
    let terms = loan.terms().with_term_clamped(term_years)?;
    if terms.term_years() != term_years {
        debug!(
            "Requested term of {} years clamped to amortization of {} years",
            term_years,
            terms.amortization_years()
        );
    }
    Ok(build_with_terms(loan.principal(), &terms))
}
