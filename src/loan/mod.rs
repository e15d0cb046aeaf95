//! Loan terms and input loading

mod terms;
pub mod loader;

pub use terms::{Loan, LoanTerms};
pub use loader::{load_loan_json, load_loans_csv, load_loans_from_reader, LoanRecord};
