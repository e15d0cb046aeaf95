//! Compute mortgage payments and amortization schedules
//!
//! Loan inputs come from flags, a JSON loan record, or a CSV batch. Writes one
//! ledger CSV per payment frequency and a balance-decline table.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use mortgage_schedules::loan::{load_loan_json, load_loans_csv};
use mortgage_schedules::report::{write_report, LoanSummary, ReportOptions};
use mortgage_schedules::schedule::{build_schedules, Termination};
use mortgage_schedules::{Loan, LoanTerms, PaymentFrequency};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Mortgage payments and amortization schedules for six payment frequencies
#[derive(Debug, Parser)]
#[command(name = "mortgage_schedules", version)]
struct Cli {
    /// Amount borrowed
    #[arg(long, required_unless_present_any = ["config", "batch"])]
    principal: Option<f64>,

    /// Quoted annual rate in percent, compounded semiannually
    #[arg(long, required_unless_present_any = ["config", "batch"])]
    rate: Option<f64>,

    /// Amortization period in years
    #[arg(long, required_unless_present_any = ["config", "batch"])]
    amortization: Option<u32>,

    /// Mortgage term in years (defaults to the amortization period)
    #[arg(long)]
    term: Option<u32>,

    /// JSON loan record: {principal, quoted_rate_percent, amortization_years, term_years?}
    #[arg(long, conflicts_with_all = ["principal", "batch"])]
    config: Option<PathBuf>,

    /// CSV of loan records, one report directory per row
    #[arg(long, conflicts_with = "principal")]
    batch: Option<PathBuf>,

    /// Directory for schedule CSV files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Summary format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the summary only, without writing files
    #[arg(long)]
    no_files: bool,

    /// Write ledgers only for these frequencies (e.g. "monthly", "rapid weekly"); repeatable
    #[arg(long = "frequency", value_name = "FREQUENCY")]
    frequencies: Vec<PaymentFrequency>,
}

impl Cli {
    fn report_options(&self, output_dir: PathBuf) -> ReportOptions {
        ReportOptions {
            output_dir,
            write_schedules: !self.no_files,
            write_balance_curves: !self.no_files,
            frequencies: self.frequencies.clone(),
        }
    }

    fn loans(&self) -> Result<Vec<Loan>> {
        if let Some(path) = &self.config {
            let loan = load_loan_json(path)
                .with_context(|| format!("Failed to load loan record {}", path.display()))?;
            return Ok(vec![loan]);
        }
        if let Some(path) = &self.batch {
            return load_loans_csv(path)
                .with_context(|| format!("Failed to load loan batch {}", path.display()));
        }

        match (self.principal, self.rate, self.amortization) {
            (Some(principal), Some(rate), Some(amortization)) => {
                let terms = LoanTerms::new(rate, amortization, self.term)?;
                Ok(vec![Loan::new(principal, terms)?])
            }
            _ => bail!("--principal, --rate and --amortization are required without --config or --batch"),
        }
    }
}

fn run_loan(loan: &Loan, options: &ReportOptions) -> Result<(LoanSummary, Vec<PathBuf>)> {
    let set = build_schedules(loan);
    let summary = LoanSummary::new(loan, &set);
    let written = write_report(&set, options)
        .with_context(|| format!("Failed to write reports to {}", options.output_dir.display()))?;
    Ok((summary, written))
}

fn print_summary(summary: &LoanSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();
    let loans = cli.loans()?;

    // Batch rows are independent; each gets its own report directory
    let batch = cli.batch.is_some();
    let results: Vec<Result<(LoanSummary, Vec<PathBuf>)>> = loans
        .par_iter()
        .enumerate()
        .map(|(idx, loan)| {
            let dir = if batch {
                cli.output_dir.join(format!("loan_{:04}", idx + 1))
            } else {
                cli.output_dir.clone()
            };
            run_loan(loan, &cli.report_options(dir))
        })
        .collect();

    let mut safety_bound_hits = 0;
    for result in results {
        let (summary, written) = result?;
        safety_bound_hits += summary
            .schedules
            .iter()
            .filter(|s| s.termination == Termination::SafetyBound)
            .count();

        print_summary(&summary, cli.format)?;
        if matches!(cli.format, OutputFormat::Text) {
            for path in &written {
                println!("Saved: {}", path.display());
            }
            println!();
        }
    }

    if safety_bound_hits > 0 {
        log::warn!(
            "{} schedule(s) stopped at the safety bound before reaching a zero balance",
            safety_bound_hits
        );
    }
    log::info!("Processed {} loan(s) in {:?}", loans.len(), start.elapsed());
    Ok(())
}
