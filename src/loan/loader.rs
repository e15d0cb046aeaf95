//! Load loan inputs from JSON config records or CSV batches

use super::{Loan, LoanTerms};
use crate::error::{MortgageError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw loan record as supplied by a config file or CSV row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub principal: f64,

    /// Nominal annual rate in percent, compounded semiannually
    pub quoted_rate_percent: f64,

    pub amortization_years: u32,

    /// Rate term in years; blank or missing means the full amortization
    #[serde(default)]
    pub term_years: Option<u32>,
}

impl LoanRecord {
    /// Validate into a [`Loan`]
    pub fn into_loan(self) -> Result<Loan> {
        let terms = LoanTerms::new(self.quoted_rate_percent, self.amortization_years, self.term_years)?;
        Loan::new(self.principal, terms)
    }
}

/// Load a single loan from a JSON config record
pub fn load_loan_json<P: AsRef<Path>>(path: P) -> Result<Loan> {
    let file = File::open(path.as_ref())?;
    let record: LoanRecord = serde_json::from_reader(BufReader::new(file))?;
    info!("Loaded loan record from {}", path.as_ref().display());
    record.into_loan()
}

/// Load a batch of loans from a CSV file
pub fn load_loans_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Loan>> {
    let file = File::open(path.as_ref())?;
    let loans = load_loans_from_reader(BufReader::new(file))?;
    info!("Loaded {} loans from {}", loans.len(), path.as_ref().display());
    Ok(loans)
}

/// Load loans from any CSV reader
///
/// Expected headers: `principal,quoted_rate_percent,amortization_years,term_years`.
/// Errors carry the zero-based record index.
pub fn load_loans_from_reader<R: Read>(reader: R) -> Result<Vec<Loan>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut loans = Vec::new();
    for (index, result) in rdr.deserialize::<LoanRecord>().enumerate() {
        let record = result.map_err(|e| MortgageError::from(e).in_record(index))?;
        loans.push(record.into_loan().map_err(|e| e.in_record(index))?);
    }
    Ok(loans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_csv_with_blank_term() {
        let data = "\
principal,quoted_rate_percent,amortization_years,term_years
300000,5.0,25,5
150000,4.25,20,
";
        let loans = load_loans_from_reader(data.as_bytes()).unwrap();
        assert_eq!(loans.len(), 2);
        assert_eq!(loans[0].terms().term_years(), 5);
        assert_eq!(loans[1].terms().term_years(), 20);
        assert_eq!(loans[1].principal(), 150_000.0);
    }

    #[test]
    fn test_invalid_record_reports_index() {
        let data = "\
principal,quoted_rate_percent,amortization_years,term_years
300000,5.0,25,5
300000,5.0,25,30
";
        let err = load_loans_from_reader(data.as_bytes()).unwrap_err();
        match err {
            MortgageError::Record { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, MortgageError::InvalidInput { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_record_term_default() {
        let record: LoanRecord = serde_json::from_str(
            r#"{"principal": 250000, "quoted_rate_percent": 3.9, "amortization_years": 30}"#,
        )
        .unwrap();
        assert_eq!(record.term_years, None);
        let loan = record.into_loan().unwrap();
        assert_eq!(loan.terms().term_years(), 30);
    }

    #[test]
    fn test_load_loan_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loan.json");
        std::fs::write(
            &path,
            r#"{"principal": 300000, "quoted_rate_percent": 5.0, "amortization_years": 25, "term_years": 5}"#,
        )
        .unwrap();

        let loan = load_loan_json(&path).unwrap();
        assert_eq!(loan.principal(), 300_000.0);
        assert!(loan.terms().is_term_limited());
    }

    #[test]
    fn test_load_loans_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loans.csv");
        std::fs::write(
            &path,
            "principal,quoted_rate_percent,amortization_years,term_years\n300000, 5.0, 25, 5\n",
        )
        .unwrap();

        let loans = load_loans_csv(&path).unwrap();
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0].terms().quoted_rate_percent(), 5.0);
        assert!(matches!(
            load_loans_csv(dir.path().join("missing.csv")),
            Err(MortgageError::Io(_))
        ));
    }
}
