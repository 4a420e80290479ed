//! Bond design pipeline: financial inputs in, estimated bond terms out.
//!
//! The pipeline is a chain of pure stages — credit score, rating, coupon,
//! maturity, issue price, covenants, risk — orchestrated by
//! [`estimator::predict_bond_design`]. Identical inputs always produce an
//! identical prediction.

pub mod covenants;
pub mod estimator;
pub mod rating;
pub mod risk;
pub mod score;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Industry, Money, Multiple, Percent};

pub use estimator::{design_bond, predict_bond_design, IssuePrice, MaturityTerm};
pub use rating::CreditRating;
pub use risk::RiskLevel;

/// Company financials and deal parameters supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondInputs {
    /// Display label only; never used in scoring.
    pub company_name: String,
    /// Annual revenue, millions.
    pub revenue: Money,
    /// Percentage, roughly [-100, 100].
    pub profit_margin: Percent,
    pub debt_to_ebitda: Multiple,
    pub industry: Industry,
    /// Amount to be raised, millions.
    pub target_raise: Money,
    /// Benchmark reference rate, percentage.
    pub market_rate: Percent,
}

impl BondInputs {
    /// Target raise as a fraction of revenue.
    ///
    /// Zero revenue is rejected at the public entry point; if a stage is
    /// called directly anyway, the ratio degrades to `Decimal::MAX`
    /// (unbounded leverage), which lands in the worst ratio tier and
    /// triggers the liquidity covenant.
    pub(crate) fn raise_to_revenue(&self) -> Decimal {
        if self.revenue.is_zero() {
            Decimal::MAX
        } else {
            self.target_raise / self.revenue
        }
    }
}

/// Estimated bond terms for one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondPrediction {
    pub credit_rating: CreditRating,
    pub coupon_rate: Percent,
    pub maturity_years: u32,
    pub maturity_category: MaturityTerm,
    pub issue_price: IssuePrice,
    /// Covenant clauses joined with `"; "`, in generation order.
    pub covenants: String,
    pub risk_level: RiskLevel,
}
