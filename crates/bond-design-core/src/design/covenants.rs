use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::rating::CreditRating;
use super::BondInputs;

/// Leverage headroom granted above the current multiple in the maintenance
/// covenant: current Debt/EBITDA × 1.2, shown to one decimal place.
const LEVERAGE_HEADROOM: Decimal = dec!(1.2);

/// Generate the covenant package for an issue, in display order.
///
/// The rating gate matches on label prefixes (BB, B, CCC), so BBB-family
/// ratings pick up the sub-investment-grade restrictions as well — BBB
/// starts with "B". Risk classification uses exact set membership instead;
/// the two rules are intentionally kept separate.
pub fn generate_covenants(inputs: &BondInputs, rating: CreditRating) -> Vec<String> {
    let mut covenants: Vec<String> = Vec::new();

    if inputs.debt_to_ebitda > dec!(3) {
        let ceiling = (inputs.debt_to_ebitda * LEVERAGE_HEADROOM)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        covenants.push(format!("Maintain Debt/EBITDA below {ceiling}x"));
    }

    if inputs.profit_margin < dec!(15) {
        covenants.push("Minimum interest coverage ratio of 2.5x".to_string());
    }

    let label = rating.as_str();
    if label.starts_with("BB") || label.starts_with("B") || label.starts_with("CCC") {
        covenants.push("Limit dividends if leverage exceeds 4.5x".to_string());
        covenants.push("Restrict additional debt without lender consent".to_string());
    }

    covenants.push("Quarterly financial reporting required".to_string());

    if inputs.raise_to_revenue() > dec!(0.3) {
        covenants.push("Maintain minimum liquidity of $50M".to_string());
    }

    covenants
}

/// Clauses joined with `"; "` for storage and display.
pub fn covenant_summary(covenants: &[String]) -> String {
    covenants.join("; ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Industry;
    use rust_decimal_macros::dec;

    fn inputs(debt_to_ebitda: Decimal, profit_margin: Decimal, raise: Decimal) -> BondInputs {
        BondInputs {
            company_name: "Acme Corporation".into(),
            revenue: dec!(1000),
            profit_margin,
            debt_to_ebitda,
            industry: Industry::Manufacturing,
            target_raise: raise,
            market_rate: dec!(4.0),
        }
    }

    #[test]
    fn test_clean_issuer_gets_reporting_only() {
        let covs = generate_covenants(&inputs(dec!(2), dec!(20), dec!(100)), CreditRating::AAA);
        assert_eq!(covs, vec!["Quarterly financial reporting required"]);
    }

    #[test]
    fn test_leverage_ceiling_formatting() {
        let covs = generate_covenants(&inputs(dec!(3.5), dec!(20), dec!(100)), CreditRating::AAA);
        assert_eq!(covs[0], "Maintain Debt/EBITDA below 4.2x");

        // Integer multiple still renders one decimal place.
        let covs = generate_covenants(&inputs(dec!(5), dec!(20), dec!(100)), CreditRating::AAA);
        assert_eq!(covs[0], "Maintain Debt/EBITDA below 6.0x");
    }

    #[test]
    fn test_leverage_ceiling_strict_boundary() {
        // 3.0 exactly does not trigger the maintenance covenant.
        let covs = generate_covenants(&inputs(dec!(3), dec!(20), dec!(100)), CreditRating::AAA);
        assert_eq!(covs, vec!["Quarterly financial reporting required"]);
    }

    #[test]
    fn test_low_margin_adds_coverage_covenant() {
        let covs = generate_covenants(&inputs(dec!(2), dec!(14.9), dec!(100)), CreditRating::AAA);
        assert_eq!(
            covs,
            vec![
                "Minimum interest coverage ratio of 2.5x",
                "Quarterly financial reporting required",
            ]
        );
    }

    #[test]
    fn test_bbb_triggers_restrictions_via_prefix() {
        // BBB is investment grade for risk purposes, but its label starts
        // with "B", so it still picks up the dividend and debt restrictions.
        let covs = generate_covenants(&inputs(dec!(2), dec!(20), dec!(100)), CreditRating::BBB);
        assert_eq!(
            covs,
            vec![
                "Limit dividends if leverage exceeds 4.5x",
                "Restrict additional debt without lender consent",
                "Quarterly financial reporting required",
            ]
        );
    }

    #[test]
    fn test_restriction_gate_across_ratings() {
        for rating in CreditRating::ALL {
            let covs = generate_covenants(&inputs(dec!(2), dec!(20), dec!(100)), rating);
            let restricted = covs.iter().any(|c| c.starts_with("Limit dividends"));
            // Everything from BBB+ downward matches a B/BB/CCC prefix.
            let expected = rating.as_str().starts_with('B') || rating.as_str().starts_with('C');
            assert_eq!(restricted, expected, "rating {rating}");
        }
    }

    #[test]
    fn test_large_raise_adds_liquidity_covenant() {
        let covs = generate_covenants(&inputs(dec!(2), dec!(20), dec!(301)), CreditRating::AAA);
        assert_eq!(covs.last().unwrap(), "Maintain minimum liquidity of $50M");

        // 0.3 exactly does not trigger.
        let covs = generate_covenants(&inputs(dec!(2), dec!(20), dec!(300)), CreditRating::AAA);
        assert_eq!(covs, vec!["Quarterly financial reporting required"]);
    }

    #[test]
    fn test_zero_revenue_forces_liquidity_covenant() {
        let mut i = inputs(dec!(2), dec!(20), dec!(100));
        i.revenue = dec!(0);
        let covs = generate_covenants(&i, CreditRating::AAA);
        assert_eq!(covs.last().unwrap(), "Maintain minimum liquidity of $50M");
    }

    #[test]
    fn test_full_package_order() {
        let covs = generate_covenants(&inputs(dec!(4.5), dec!(8), dec!(400)), CreditRating::BBm);
        assert_eq!(
            covs,
            vec![
                "Maintain Debt/EBITDA below 5.4x",
                "Minimum interest coverage ratio of 2.5x",
                "Limit dividends if leverage exceeds 4.5x",
                "Restrict additional debt without lender consent",
                "Quarterly financial reporting required",
                "Maintain minimum liquidity of $50M",
            ]
        );
    }

    #[test]
    fn test_summary_join() {
        let covs = generate_covenants(&inputs(dec!(3.5), dec!(20), dec!(100)), CreditRating::AAp);
        assert_eq!(
            covenant_summary(&covs),
            "Maintain Debt/EBITDA below 4.2x; Quarterly financial reporting required"
        );
    }
}
