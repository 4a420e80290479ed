use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::BondInputs;
use crate::types::Industry;

/// Every issuer starts here; factor adjustments subtract or add from this.
pub const BASE_SCORE: i32 = 100;

/// Industries treated as stable demand (+5).
const STABLE_INDUSTRIES: [Industry; 3] = [
    Industry::Healthcare,
    Industry::ConsumerGoods,
    Industry::Finance,
];

/// Industries treated as cyclical or disruption-prone (-5).
const VOLATILE_INDUSTRIES: [Industry; 3] = [
    Industry::Technology,
    Industry::Energy,
    Industry::Retail,
];

/// One scoring factor that fired, for explainability output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub name: String,
    pub adjustment: i32,
}

impl ScoreFactor {
    fn new(name: impl Into<String>, adjustment: i32) -> Self {
        Self {
            name: name.into(),
            adjustment,
        }
    }
}

/// Compute the credit score in [0, 100].
///
/// Four tiered factors, each applying at most one adjustment (tiers are
/// checked worst-first because the ranges overlap at their boundaries),
/// then an industry adjustment, then a clamp.
pub fn compute_credit_score(inputs: &BondInputs) -> i32 {
    credit_score_with_factors(inputs).0
}

/// As [`compute_credit_score`], also returning the factors that fired.
///
/// The factor list records raw adjustments; when the clamp binds, the sum
/// of adjustments and the final score diverge.
pub fn credit_score_with_factors(inputs: &BondInputs) -> (i32, Vec<ScoreFactor>) {
    let mut factors: Vec<ScoreFactor> = Vec::new();
    let mut score = BASE_SCORE;

    // Leverage tier
    let leverage = inputs.debt_to_ebitda;
    let adj = if leverage > dec!(5) {
        -30
    } else if leverage > dec!(4) {
        -20
    } else if leverage > dec!(3) {
        -10
    } else if leverage > dec!(2) {
        -5
    } else {
        0
    };
    if adj != 0 {
        factors.push(ScoreFactor::new(format!("Debt/EBITDA of {leverage}x"), adj));
    }
    score += adj;

    // Profitability tier
    let margin = inputs.profit_margin;
    let adj = if margin < dec!(5) {
        -25
    } else if margin < dec!(10) {
        -15
    } else if margin < dec!(15) {
        -5
    } else if margin > dec!(25) {
        10
    } else {
        0
    };
    if adj != 0 {
        factors.push(ScoreFactor::new(format!("Profit margin of {margin}%"), adj));
    }
    score += adj;

    // Scale tier
    let revenue = inputs.revenue;
    let adj = if revenue < dec!(100) {
        -15
    } else if revenue < dec!(500) {
        -5
    } else if revenue > dec!(5000) {
        10
    } else {
        0
    };
    if adj != 0 {
        factors.push(ScoreFactor::new(format!("Revenue of {revenue}M"), adj));
    }
    score += adj;

    // Raise-size tier: how large the deal is relative to revenue
    let ratio = inputs.raise_to_revenue();
    let adj = if ratio > dec!(0.5) {
        -20
    } else if ratio > dec!(0.3) {
        -10
    } else if ratio > dec!(0.2) {
        -5
    } else {
        0
    };
    if adj != 0 {
        factors.push(ScoreFactor::new("Raise size relative to revenue", adj));
    }
    score += adj;

    // Industry adjustment. Independent checks, not an if/else chain: the
    // sets are disjoint today, but membership in both would stack.
    if STABLE_INDUSTRIES.contains(&inputs.industry) {
        factors.push(ScoreFactor::new(
            format!("{} is a stable industry", inputs.industry),
            5,
        ));
        score += 5;
    }
    if VOLATILE_INDUSTRIES.contains(&inputs.industry) {
        factors.push(ScoreFactor::new(
            format!("{} is a volatile industry", inputs.industry),
            -5,
        ));
        score -= 5;
    }

    (score.clamp(0, 100), factors)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
