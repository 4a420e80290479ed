use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::rating::CreditRating;
use crate::types::Multiple;

/// Overall risk bucket shown alongside the estimated terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{}", s)
    }
}

/// Classify overall risk from the rating and leverage.
///
/// Low requires both an investment-grade rating (exact AAA..BBB- set, not
/// the covenant prefix rule) and leverage under 3x; either alone is Medium.
pub fn classify_risk(rating: CreditRating, debt_to_ebitda: Multiple) -> RiskLevel {
    if rating.is_investment_grade() && debt_to_ebitda < dec!(3) {
        RiskLevel::Low
    } else if rating.is_investment_grade() || debt_to_ebitda < dec!(4) {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_low_needs_grade_and_leverage() {
        assert_eq!(classify_risk(CreditRating::AAA, dec!(2.9)), RiskLevel::Low);
        assert_eq!(classify_risk(CreditRating::BBBm, dec!(0)), RiskLevel::Low);
        // 3.0 exactly fails the strict < 3 check.
        assert_eq!(classify_risk(CreditRating::AAA, dec!(3)), RiskLevel::Medium);
    }

    #[test]
    fn test_medium_from_either_signal() {
        // Investment grade but leveraged
        assert_eq!(classify_risk(CreditRating::A, dec!(5)), RiskLevel::Medium);
        // Junk but lightly leveraged
        assert_eq!(classify_risk(CreditRating::CCC, dec!(3.9)), RiskLevel::Medium);
    }

    #[test]
    fn test_high_needs_both_signals() {
        assert_eq!(classify_risk(CreditRating::BBp, dec!(4)), RiskLevel::High);
        assert_eq!(classify_risk(CreditRating::CCC, dec!(8)), RiskLevel::High);
    }

    #[test]
    fn test_bbb_counts_as_investment_grade_here() {
        // Contrast with the covenant gate, where BBB matches the B prefix.
        assert_eq!(classify_risk(CreditRating::BBB, dec!(2)), RiskLevel::Low);
        assert_eq!(classify_risk(CreditRating::BBB, dec!(6)), RiskLevel::Medium);
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"Low\"");
        let back: RiskLevel = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(back, RiskLevel::High);
    }
}
