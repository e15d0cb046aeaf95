//! Period-by-period balance decay
//!
//! The running balance is carried at full precision; only emitted rows are
//! rounded to cents. The final period is clamped so the borrower pays off
//! exactly the remaining balance plus its interest.

use super::row::{PeriodLimit, Schedule, ScheduleRow, Termination};
use crate::payment::round_cents;
use log::{debug, warn};

/// Balance at or below this (currency units) counts as paid off
pub const BALANCE_EPSILON: f64 = 1e-6;

/// Extra periods allowed beyond a full amortization to absorb rounding drift
pub const SAFETY_MARGIN_PERIODS: u32 = 2;

impl PeriodLimit {
    /// Hard cap on emitted rows
    pub fn max_periods(self) -> u32 {
        match self {
            PeriodLimit::FullAmortization(n) => n.saturating_add(SAFETY_MARGIN_PERIODS),
            PeriodLimit::Term(n) => n,
        }
    }

    /// Number of periods the caller asked for, before any margin
    pub fn requested_periods(self) -> u32 {
        match self {
            PeriodLimit::FullAmortization(n) | PeriodLimit::Term(n) => n,
        }
    }
}

/// Generate an amortization schedule
///
/// # Arguments
/// * `principal` - Opening balance
/// * `payments_per_year` - Frequency the rate and payment refer to
/// * `payment_amount` - Scheduled payment per period (normally the rounded, disclosed amount)
/// * `periodic_rate` - Interest rate per period
/// * `limit` - Full amortization (with safety margin) or a term cut-off
pub fn generate(
    principal: f64,
    payments_per_year: u32,
    payment_amount: f64,
    periodic_rate: f64,
    limit: PeriodLimit,
) -> Schedule {
    let max_periods = limit.max_periods();
    let mut rows = Vec::with_capacity(max_periods as usize);
    let mut balance = principal;
    let mut period = 0u32;

    while balance > BALANCE_EPSILON && period < max_periods {
        period += 1;
        let starting = balance;
        let interest = starting * periodic_rate;
        let mut principal_component = payment_amount - interest;

        // Final period: pay off exactly what remains
        let payment = if principal_component > starting {
            principal_component = starting;
            interest + principal_component
        } else {
            payment_amount
        };

        balance = starting - principal_component;

        rows.push(ScheduleRow {
            period,
            starting_balance: round_cents(starting),
            interest: round_cents(interest),
            payment: round_cents(payment),
            ending_balance: round_cents(balance),
        });
    }

    let termination = if balance <= BALANCE_EPSILON {
        Termination::PaidOff
    } else {
        match limit {
            PeriodLimit::Term(_) => Termination::TermLimit,
            PeriodLimit::FullAmortization(_) => {
                warn!(
                    "Schedule hit safety bound of {} periods ({} scheduled) with balance {:.6} outstanding \
                     (payment {:.2}, periodic rate {:.10})",
                    max_periods,
                    limit.requested_periods(),
                    balance,
                    payment_amount,
                    periodic_rate
                );
                Termination::SafetyBound
            }
        }
    };

    debug!(
        "Generated {} rows at {}/yr (payment {:.2}): {:?}",
        rows.len(),
        payments_per_year,
        payment_amount,
        termination
    );

    Schedule {
        payments_per_year,
        payment_amount,
        periodic_rate,
        limit,
        termination,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::{level_payment, round_cents};
    use crate::rates::periodic_rate;
    use approx::assert_abs_diff_eq;

    fn reference_monthly() -> (f64, f64) {
        let r = periodic_rate(5.0, 12);
        (r, round_cents(level_payment(300_000.0, r, 300)))
    }

    #[test]
    fn test_full_amortization_reference_loan() {
        let (r, pmt) = reference_monthly();
        let schedule = generate(300_000.0, 12, pmt, r, PeriodLimit::FullAmortization(300));

        // Rounding the payment down to 1744.81 leaves a small residual for period 301
        assert_eq!(schedule.len(), 301);
        assert_eq!(schedule.termination, Termination::PaidOff);
        let last = schedule.last().unwrap();
        assert_eq!(last.ending_balance, 0.0);
        assert!(last.payment < pmt);
        assert_abs_diff_eq!(last.payment, 2.94, epsilon = 0.01);

        // Period 300 leaves only the rounding residual
        assert_abs_diff_eq!(schedule.rows[299].ending_balance, 2.93, epsilon = 0.01);
    }

    #[test]
    fn test_first_row() {
        let (r, pmt) = reference_monthly();
        let schedule = generate(300_000.0, 12, pmt, r, PeriodLimit::FullAmortization(300));
        let first = schedule.rows[0];
        assert_eq!(first.period, 1);
        assert_eq!(first.starting_balance, 300_000.0);
        assert_eq!(first.interest, round_cents(300_000.0 * r));
        assert_eq!(first.payment, 1744.81);
        assert_abs_diff_eq!(first.ending_balance, 300_000.0 - (1744.81 - 300_000.0 * r), epsilon = 0.006);
    }

    #[test]
    fn test_term_limited_five_years() {
        let (r, pmt) = reference_monthly();
        let schedule = generate(300_000.0, 12, pmt, r, PeriodLimit::Term(60));

        assert_eq!(schedule.len(), 60);
        assert_eq!(schedule.termination, Termination::TermLimit);
        let balance = schedule.final_balance().unwrap();
        assert!(balance > 0.0 && balance < 300_000.0);
        assert_abs_diff_eq!(balance, 265_522.86, epsilon = 0.01);
    }

    #[test]
    fn test_balances_chain_and_decrease() {
        let r = periodic_rate(6.5, 26);
        let pmt = round_cents(level_payment(450_000.0, r, 26 * 30));
        let schedule = generate(450_000.0, 26, pmt, r, PeriodLimit::FullAmortization(26 * 30));

        for pair in schedule.rows.windows(2) {
            assert_eq!(pair[1].period, pair[0].period + 1);
            assert_eq!(pair[1].starting_balance, pair[0].ending_balance);
            assert!(pair[1].ending_balance <= pair[0].ending_balance);
        }
        assert!(schedule.rows.iter().all(|row| row.ending_balance >= 0.0));
    }

    #[test]
    fn test_zero_rate_straight_line() {
        let pmt = round_cents(100_000.0 / 120.0);
        let schedule = generate(100_000.0, 12, pmt, 0.0, PeriodLimit::FullAmortization(120));

        // 833.33 * 120 leaves 0.40, paid in a final short period
        assert_eq!(schedule.len(), 121);
        assert_eq!(schedule.termination, Termination::PaidOff);
        for row in &schedule.rows[..120] {
            assert_eq!(row.interest, 0.0);
            assert_eq!(row.payment, 833.33);
        }
        assert_abs_diff_eq!(schedule.rows[120].payment, 0.40, epsilon = 1e-9);
        assert_eq!(schedule.final_balance(), Some(0.0));
    }

    #[test]
    fn test_overpayment_clamped_in_first_period() {
        let schedule = generate(1_000.0, 12, 5_000.0, 0.01, PeriodLimit::FullAmortization(12));
        assert_eq!(schedule.len(), 1);
        let row = schedule.rows[0];
        assert_eq!(row.interest, 10.0);
        assert_eq!(row.payment, 1_010.0);
        assert_eq!(row.ending_balance, 0.0);
    }

    #[test]
    fn test_safety_bound_stops_non_amortizing_payment() {
        // Payment below interest never reduces the balance
        let schedule = generate(100_000.0, 12, 100.0, 0.01, PeriodLimit::FullAmortization(24));
        assert_eq!(schedule.len(), 26);
        assert_eq!(schedule.termination, Termination::SafetyBound);
        assert!(schedule.final_balance().unwrap() > 100_000.0);
    }

    #[test]
    fn test_rounding_drift_hits_safety_bound() {
        // 30 years weekly at 12% on a small balance: the cent rounding
        // under-pays by enough that 1562 periods do not clear the loan
        let r = periodic_rate(12.0, 52);
        let pmt = round_cents(level_payment(1_000.0, r, 52 * 30));
        let schedule = generate(1_000.0, 52, pmt, r, PeriodLimit::FullAmortization(52 * 30));
        assert_eq!(schedule.len(), 1562);
        assert_eq!(schedule.termination, Termination::SafetyBound);
        assert!(schedule.final_balance().unwrap() > 0.01);
    }

    #[test]
    fn test_max_periods() {
        assert_eq!(PeriodLimit::FullAmortization(300).max_periods(), 302);
        assert_eq!(PeriodLimit::Term(60).max_periods(), 60);
        assert_eq!(PeriodLimit::Term(60).requested_periods(), 60);
        assert_eq!(PeriodLimit::FullAmortization(u32::MAX).max_periods(), u32::MAX);
    }

    #[test]
    fn test_payoff_time() {
        let (r, pmt) = reference_monthly();
        let schedule = generate(300_000.0, 12, pmt, r, PeriodLimit::FullAmortization(300));
        assert_eq!(schedule.payoff_time(), Some((25, 1)));

        let term = generate(300_000.0, 12, pmt, r, PeriodLimit::Term(60));
        assert_eq!(term.payoff_time(), None);
    }
}
