//! Level payment calculation and the six-frequency payment set

use crate::error::Result;
use crate::frequency::{PaymentFrequency, PaymentRule};
use crate::loan::LoanTerms;
use crate::rates::periodic_rate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Round a currency amount to cents
///
/// Rounds the exact decimal value of the `f64`, ties to even, so 2.675
/// (stored as 2.67499...) becomes 2.67. Non-finite or out-of-range amounts
/// are returned unchanged.
pub fn round_cents(amount: f64) -> f64 {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => {
            let cents = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
            // mantissa / 10^scale with scale <= 2 is a single correctly rounded division
            cents.mantissa() as f64 / 10f64.powi(cents.scale() as i32)
        }
        None => amount,
    }
}

/// Level payment that amortizes `principal` over `num_payments` periods
///
/// Standard ordinary-annuity formula. A periodic rate of exactly zero falls
/// back to straight-line repayment. Result is unrounded.
pub fn level_payment(principal: f64, periodic_rate: f64, num_payments: u32) -> f64 {
    let n = num_payments as f64;
    if periodic_rate == 0.0 {
        return principal / n;
    }
    principal * periodic_rate / (1.0 - (1.0 + periodic_rate).powf(-n))
}

/// Disclosed payment amounts for every supported frequency, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentSet {
    pub monthly: f64,
    pub semi_monthly: f64,
    pub bi_weekly: f64,
    pub weekly: f64,
    pub accelerated_bi_weekly: f64,
    pub accelerated_weekly: f64,
}

impl PaymentSet {
    pub fn get(&self, frequency: PaymentFrequency) -> f64 {
        match frequency {
            PaymentFrequency::Monthly => self.monthly,
            PaymentFrequency::SemiMonthly => self.semi_monthly,
            PaymentFrequency::BiWeekly => self.bi_weekly,
            PaymentFrequency::Weekly => self.weekly,
            PaymentFrequency::AcceleratedBiWeekly => self.accelerated_bi_weekly,
            PaymentFrequency::AcceleratedWeekly => self.accelerated_weekly,
        }
    }

    /// (frequency, amount) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (PaymentFrequency, f64)> + '_ {
        PaymentFrequency::ALL.iter().map(move |&f| (f, self.get(f)))
    }
}

/// Unrounded annuity payment for one frequency over the full amortization
fn annuity_payment(principal: f64, terms: &LoanTerms, frequency: PaymentFrequency) -> f64 {
    let ppy = frequency.payments_per_year();
    let rate = periodic_rate(terms.quoted_rate_percent(), ppy);
    level_payment(principal, rate, terms.amortization_years() * ppy)
}

/// Unrounded payment for a frequency, applying its derivation rule
///
/// Accelerated schedules divide the unrounded monthly payment; they are never
/// annuitized at 26 or 52 payments per year.
pub fn unrounded_payment(principal: f64, terms: &LoanTerms, frequency: PaymentFrequency) -> f64 {
    match frequency.rule() {
        PaymentRule::Annuity => annuity_payment(principal, terms, frequency),
        PaymentRule::FractionOfMonthly { divisor } => {
            annuity_payment(principal, terms, PaymentFrequency::Monthly) / divisor as f64
        }
    }
}

/// Compute the six disclosed payments for a principal
pub fn payment_set(principal: f64, terms: &LoanTerms) -> PaymentSet {
    let amount = |f| round_cents(unrounded_payment(principal, terms, f));
    PaymentSet {
        monthly: amount(PaymentFrequency::Monthly),
        semi_monthly: amount(PaymentFrequency::SemiMonthly),
        bi_weekly: amount(PaymentFrequency::BiWeekly),
        weekly: amount(PaymentFrequency::Weekly),
        accelerated_bi_weekly: amount(PaymentFrequency::AcceleratedBiWeekly),
        accelerated_weekly: amount(PaymentFrequency::AcceleratedWeekly),
    }
}

/// Validating form of [`payment_set`] taking raw inputs
pub fn payment_set_for(principal: f64, quoted_rate_percent: f64, amortization_years: u32) -> Result<PaymentSet> {
    let terms = LoanTerms::new(quoted_rate_percent, amortization_years, None)?;
    let loan = crate::loan::Loan::new(principal, terms)?;
    Ok(payment_set(loan.principal(), loan.terms()))
}
