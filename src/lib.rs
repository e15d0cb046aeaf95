//! Mortgage Schedules - payment calculator and amortization engine for Canadian mortgages
//!
//! This library provides:
//! - Semiannual-compounding rate conversion to exact periodic rates
//! - Level payments for monthly, semi-monthly, bi-weekly, weekly and the two
//!   accelerated frequencies
//! - Period-by-period amortization schedules, full or term-limited
//! - Loan input loading (JSON record, CSV batch) and CSV/text reporting

pub mod error;
pub mod rates;
pub mod frequency;
pub mod loan;
pub mod payment;
pub mod schedule;
pub mod report;

// Re-export commonly used types
pub use error::{MortgageError, Result};
pub use frequency::{PaymentFrequency, PaymentRule};
pub use loan::{Loan, LoanTerms};
pub use payment::{level_payment, payment_set, payment_set_for, PaymentSet};
pub use rates::{effective_annual_rate, periodic_rate};
pub use schedule::{build_schedules, generate_schedule, PeriodLimit, Schedule, ScheduleRow, ScheduleSet, Termination};
