use crate::error::{MortgageError, Result};

/// Rate and duration terms of a mortgage
///
/// Immutable once constructed. `term_years` is the rate-lock term and never
/// exceeds `amortization_years`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    quoted_rate_percent: f64,
    amortization_years: u32,
    term_years: u32,
}

impl LoanTerms {
    /// Validate and build loan terms
    ///
    /// `term_years` defaults to `amortization_years` when `None`.
    pub fn new(quoted_rate_percent: f64, amortization_years: u32, term_years: Option<u32>) -> Result<Self> {
        if !quoted_rate_percent.is_finite() || quoted_rate_percent < 0.0 {
            return Err(MortgageError::invalid(
                "quoted_rate_percent",
                format!("must be a finite non-negative percentage, got {}", quoted_rate_percent),
            ));
        }
        if amortization_years == 0 {
            return Err(MortgageError::invalid("amortization_years", "must be greater than zero"));
        }
        let term_years = term_years.unwrap_or(amortization_years);
        if term_years == 0 {
            return Err(MortgageError::invalid("term_years", "must be greater than zero"));
        }
        if term_years > amortization_years {
            return Err(MortgageError::invalid(
                "term_years",
                format!(
                    "term of {} years exceeds amortization of {} years",
                    term_years, amortization_years
                ),
            ));
        }

        Ok(Self {
            quoted_rate_percent,
            amortization_years,
            term_years,
        })
    }

    pub fn quoted_rate_percent(&self) -> f64 {
        self.quoted_rate_percent
    }

    pub fn amortization_years(&self) -> u32 {
        self.amortization_years
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    /// True when the rate term ends before the loan is fully amortized
    pub fn is_term_limited(&self) -> bool {
        self.term_years < self.amortization_years
    }

    /// Same rate and amortization with a different term, clamped to the amortization
    pub(crate) fn with_term_clamped(&self, term_years: u32) -> Result<Self> {
        if term_years == 0 {
            return Err(MortgageError::invalid("term_years", "must be greater than zero"));
        }
        Ok(Self {
            term_years: term_years.min(self.amortization_years),
            ..*self
        })
    }
}

/// A principal amount together with its terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loan {
    principal: f64,
    terms: LoanTerms,
}

impl Loan {
    pub fn new(principal: f64, terms: LoanTerms) -> Result<Self> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(MortgageError::invalid(
                "principal",
                format!("must be a finite positive amount, got {}", principal),
            ));
        }
        Ok(Self { principal, terms })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_defaults_to_amortization() {
        let terms = LoanTerms::new(5.0, 25, None).unwrap();
        assert_eq!(terms.term_years(), 25);
        assert!(!terms.is_term_limited());
    }

    #[test]
    fn test_rejects_invalid_terms() {
        assert!(LoanTerms::new(5.0, 0, None).is_err());
        assert!(LoanTerms::new(5.0, 25, Some(0)).is_err());
        assert!(LoanTerms::new(5.0, 25, Some(30)).is_err());
        assert!(LoanTerms::new(-1.0, 25, None).is_err());
        assert!(LoanTerms::new(f64::NAN, 25, None).is_err());
    }

    #[test]
    fn test_zero_rate_is_valid() {
        assert!(LoanTerms::new(0.0, 10, Some(5)).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        let terms = LoanTerms::new(5.0, 25, Some(5)).unwrap();
        assert!(Loan::new(0.0, terms).is_err());
        assert!(Loan::new(-100.0, terms).is_err());
        assert!(Loan::new(f64::INFINITY, terms).is_err());
        assert!(Loan::new(300_000.0, terms).is_ok());
    }

    #[test]
    fn test_term_clamped_to_amortization() {
        let terms = LoanTerms::new(5.0, 25, Some(5)).unwrap();
        assert_eq!(terms.with_term_clamped(40).unwrap().term_years(), 25);
        assert_eq!(terms.with_term_clamped(3).unwrap().term_years(), 3);
        assert!(terms.with_term_clamped(0).is_err());
    }
}
