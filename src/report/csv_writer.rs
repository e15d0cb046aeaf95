//! CSV output: one ledger per frequency plus a wide balance-curve table

use crate::error::Result;
use crate::frequency::PaymentFrequency;
use crate::schedule::{Schedule, ScheduleSet};
use log::info;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column headers for a schedule ledger
pub const SCHEDULE_HEADERS: [&str; 5] = ["Period", "Starting Balance", "Interest", "Payment", "Ending Balance"];

/// File name for a frequency's ledger, e.g. `accelerated_bi_weekly.csv`
pub fn schedule_file_name(frequency: PaymentFrequency) -> String {
    let stem: String = frequency
        .title()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("{}.csv", stem)
}

/// Write one schedule ledger to any writer
pub fn write_schedule<W: Write>(writer: W, schedule: &Schedule) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(SCHEDULE_HEADERS)?;
    for row in &schedule.rows {
        wtr.write_record([
            row.period.to_string(),
            format!("{:.2}", row.starting_balance),
            format!("{:.2}", row.interest),
            format!("{:.2}", row.payment),
            format!("{:.2}", row.ending_balance),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the listed frequencies' schedules to `dir`, one file each
pub fn write_schedule_csvs<P: AsRef<Path>>(
    set: &ScheduleSet,
    dir: P,
    frequencies: &[PaymentFrequency],
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(frequencies.len());
    for &frequency in frequencies {
        let schedule = set.get(frequency);
        let path = dir.join(schedule_file_name(frequency));
        write_schedule(File::create(&path)?, schedule)?;
        info!("Wrote {} rows to {}", schedule.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

/// Write ending balances of all schedules side by side, one row per period
///
/// Cells are blank once a schedule has ended. This is the data behind the
/// balance-decline chart.
pub fn write_balance_curves<W: Write>(writer: W, set: &ScheduleSet) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Period".to_string()];
    header.extend(set.iter().map(|(f, _)| f.title().to_string()));
    wtr.write_record(&header)?;

    for idx in 0..set.max_len() {
        let mut record = Vec::with_capacity(header.len());
        record.push((idx + 1).to_string());
        for (_, schedule) in set.iter() {
            record.push(
                schedule
                    .rows
                    .get(idx)
                    .map(|row| format!("{:.2}", row.ending_balance))
                    .unwrap_or_default(),
            );
        }
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the balance-curve table to a file
pub fn write_balance_curves_file<P: AsRef<Path>>(set: &ScheduleSet, path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_balance_curves(File::create(path)?, set)?;
    info!("Wrote balance curves to {}", path.display());
    Ok(path.to_path_buf())
}
