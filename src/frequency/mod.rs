//! Payment frequency policy
//!
//! Six supported schedules. Monthly, semi-monthly, bi-weekly and weekly are
//! annuitized independently; the two accelerated schedules are defined as a
//! fraction of the monthly payment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the payment amount for a frequency is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentRule {
    /// Level annuity payment over amortization_years * payments_per_year periods
    Annuity,
    /// Monthly payment divided by `divisor`
    FractionOfMonthly { divisor: u32 },
}

/// Supported payment frequencies; discriminants are positions in [`PaymentFrequency::ALL`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    Monthly = 0,
    SemiMonthly = 1,
    BiWeekly = 2,
    Weekly = 3,
    AcceleratedBiWeekly = 4,
    AcceleratedWeekly = 5,
}

impl PaymentFrequency {
    /// Canonical ordering used for payment sets, schedule sets and output
    pub const ALL: [PaymentFrequency; 6] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::SemiMonthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
        PaymentFrequency::AcceleratedBiWeekly,
        PaymentFrequency::AcceleratedWeekly,
    ];

    pub fn payments_per_year(self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::SemiMonthly => 24,
            PaymentFrequency::BiWeekly | PaymentFrequency::AcceleratedBiWeekly => 26,
            PaymentFrequency::Weekly | PaymentFrequency::AcceleratedWeekly => 52,
        }
    }

    pub fn rule(self) -> PaymentRule {
        match self {
            PaymentFrequency::AcceleratedBiWeekly => PaymentRule::FractionOfMonthly { divisor: 2 },
            PaymentFrequency::AcceleratedWeekly => PaymentRule::FractionOfMonthly { divisor: 4 },
            _ => PaymentRule::Annuity,
        }
    }

    /// Position in the canonical ordering
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase label, e.g. "accelerated bi-weekly"
    pub fn label(self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::SemiMonthly => "semi-monthly",
            PaymentFrequency::BiWeekly => "bi-weekly",
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::AcceleratedBiWeekly => "accelerated bi-weekly",
            PaymentFrequency::AcceleratedWeekly => "accelerated weekly",
        }
    }

    /// Title-case name used for output sheets and file names
    pub fn title(self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::SemiMonthly => "Semi-Monthly",
            PaymentFrequency::BiWeekly => "Bi-Weekly",
            PaymentFrequency::Weekly => "Weekly",
            PaymentFrequency::AcceleratedBiWeekly => "Accelerated Bi-Weekly",
            PaymentFrequency::AcceleratedWeekly => "Accelerated Weekly",
        }
    }

    /// Label shown on payment summaries ("Rapid" for the accelerated schedules)
    pub fn payment_label(self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "Monthly Payment",
            PaymentFrequency::SemiMonthly => "Semi-monthly Payment",
            PaymentFrequency::BiWeekly => "Bi-weekly Payment",
            PaymentFrequency::Weekly => "Weekly Payment",
            PaymentFrequency::AcceleratedBiWeekly => "Rapid Bi-weekly Payment",
            PaymentFrequency::AcceleratedWeekly => "Rapid Weekly Payment",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Normalise "Accelerated_Bi-Weekly", "accelerated bi weekly", "rapid biweekly", ...
        let key: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "monthly" => Ok(PaymentFrequency::Monthly),
            "semimonthly" => Ok(PaymentFrequency::SemiMonthly),
            "biweekly" => Ok(PaymentFrequency::BiWeekly),
            "weekly" => Ok(PaymentFrequency::Weekly),
            "acceleratedbiweekly" | "rapidbiweekly" => Ok(PaymentFrequency::AcceleratedBiWeekly),
            "acceleratedweekly" | "rapidweekly" => Ok(PaymentFrequency::AcceleratedWeekly),
            _ => Err(format!("unknown payment frequency '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payments_per_year() {
        let ppy: Vec<u32> = PaymentFrequency::ALL.iter().map(|f| f.payments_per_year()).collect();
        assert_eq!(ppy, vec![12, 24, 26, 52, 26, 52]);
    }

    #[test]
    fn test_accelerated_rules() {
        assert_eq!(
            PaymentFrequency::AcceleratedBiWeekly.rule(),
            PaymentRule::FractionOfMonthly { divisor: 2 }
        );
        assert_eq!(
            PaymentFrequency::AcceleratedWeekly.rule(),
            PaymentRule::FractionOfMonthly { divisor: 4 }
        );
        assert_eq!(PaymentFrequency::Weekly.rule(), PaymentRule::Annuity);
    }

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, freq) in PaymentFrequency::ALL.into_iter().enumerate() {
            assert_eq!(freq.index(), i);
        }
    }

    #[test]
    fn test_parse_labels() {
        for freq in PaymentFrequency::ALL {
            assert_eq!(freq.label().parse::<PaymentFrequency>(), Ok(freq));
            assert_eq!(freq.title().parse::<PaymentFrequency>(), Ok(freq));
        }
        assert_eq!("accelerated_bi_weekly".parse::<PaymentFrequency>(), Ok(PaymentFrequency::AcceleratedBiWeekly));
        assert_eq!("Rapid Weekly".parse::<PaymentFrequency>(), Ok(PaymentFrequency::AcceleratedWeekly));
        assert!("fortnightly".parse::<PaymentFrequency>().is_err());
    }
}
