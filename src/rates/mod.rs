//! Interest rate conversions
//!
//! Canadian mortgage rates are quoted as nominal annual rates compounded
//! semiannually. Every payment frequency gets its own periodic rate derived
//! from the same effective annual rate, so compounding is consistent across
//! frequencies.

/// Compounding periods per year for a quoted mortgage rate
pub const SEMIANNUAL_COMPOUNDING_PERIODS: u32 = 2;

/// Convert a quoted rate (percent, compounded semiannually) to an effective annual rate
///
/// EAR = (1 + j/2)^2 - 1 where j = quoted / 100
pub fn effective_annual_rate(quoted_rate_percent: f64) -> f64 {
    let j = quoted_rate_percent / 100.0;
    let m = SEMIANNUAL_COMPOUNDING_PERIODS as f64;
    (1.0 + j / m).powi(SEMIANNUAL_COMPOUNDING_PERIODS as i32) - 1.0
}

/// Periodic rate for a payment frequency
///
/// periodic = (1 + EAR)^(1/payments_per_year) - 1
///
/// Compounding this rate `payments_per_year` times reproduces the EAR.
/// `payments_per_year` must be positive.
pub fn periodic_rate(quoted_rate_percent: f64, payments_per_year: u32) -> f64 {
    let ear = effective_annual_rate(quoted_rate_percent);
    (1.0 + ear).powf(1.0 / payments_per_year as f64) - 1.0
}
