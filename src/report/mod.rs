//! Presentation of payment sets and schedules
//!
//! Schedules are written as one CSV per frequency (the per-sheet layout a
//! workbook would use) plus a wide ending-balance table for charting.

mod csv_writer;
mod summary;

pub use csv_writer::{
    schedule_file_name, write_balance_curves, write_balance_curves_file, write_schedule,
    write_schedule_csvs, SCHEDULE_HEADERS,
};
pub use summary::{format_currency, LoanSummary, ScheduleSummary};

use crate::error::Result;
use crate::frequency::PaymentFrequency;
use crate::schedule::ScheduleSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the balance-curve table
pub const BALANCE_CURVES_FILE: &str = "loan_balance_decline.csv";

/// Which report files to produce and where
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOptions {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// One ledger CSV per frequency
    #[serde(default = "default_true")]
    pub write_schedules: bool,

    /// Ending balances of all frequencies side by side
    #[serde(default = "default_true")]
    pub write_balance_curves: bool,

    /// Frequencies to write ledgers for; empty means all six
    #[serde(default)]
    pub frequencies: Vec<PaymentFrequency>,
}

fn default_output_dir() -> PathBuf { PathBuf::from(".") }
fn default_true() -> bool { true }

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            write_schedules: true,
            write_balance_curves: true,
            frequencies: Vec::new(),
        }
    }
}

impl ReportOptions {
    /// Selected frequencies in canonical order, without duplicates
    pub fn selected_frequencies(&self) -> Vec<PaymentFrequency> {
        PaymentFrequency::ALL
            .into_iter()
            .filter(|f| self.frequencies.is_empty() || self.frequencies.contains(f))
            .collect()
    }
}

/// Write the requested report files, returning the paths written
pub fn write_report(set: &ScheduleSet, options: &ReportOptions) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    if options.write_schedules {
        written.extend(write_schedule_csvs(set, &options.output_dir, &options.selected_frequencies())?);
    }
    if options.write_balance_curves {
        written.push(write_balance_curves_file(set, options.output_dir.join(BALANCE_CURVES_FILE))?);
    }
    Ok(written)
}
