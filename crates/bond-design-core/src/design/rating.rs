use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Spread applied when a rating has no table entry. Unreachable while the
/// score bands cover every rating, but kept as a fallback.
const UNRATED_SPREAD: Decimal = dec!(5.0);

/// Synthetic issuer credit rating, AAA (best) down to CCC (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditRating {
    AAA,
    #[serde(rename = "AA+")]
    AAp,
    AA,
    #[serde(rename = "AA-")]
    AAm,
    #[serde(rename = "A+")]
    Ap,
    A,
    #[serde(rename = "A-")]
    Am,
    #[serde(rename = "BBB+")]
    BBBp,
    BBB,
    #[serde(rename = "BBB-")]
    BBBm,
    #[serde(rename = "BB+")]
    BBp,
    BB,
    #[serde(rename = "BB-")]
    BBm,
    #[serde(rename = "B+")]
    Bp,
    B,
    #[serde(rename = "B-")]
    Bm,
    #[serde(rename = "CCC+")]
    CCCp,
    CCC,
}

impl CreditRating {
    pub const ALL: [CreditRating; 18] = [
        Self::AAA,
        Self::AAp,
        Self::AA,
        Self::AAm,
        Self::Ap,
        Self::A,
        Self::Am,
        Self::BBBp,
        Self::BBB,
        Self::BBBm,
        Self::BBp,
        Self::BB,
        Self::BBm,
        Self::Bp,
        Self::B,
        Self::Bm,
        Self::CCCp,
        Self::CCC,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AAA => "AAA",
            Self::AAp => "AA+",
            Self::AA => "AA",
            Self::AAm => "AA-",
            Self::Ap => "A+",
            Self::A => "A",
            Self::Am => "A-",
            Self::BBBp => "BBB+",
            Self::BBB => "BBB",
            Self::BBBm => "BBB-",
            Self::BBp => "BB+",
            Self::BB => "BB",
            Self::BBm => "BB-",
            Self::Bp => "B+",
            Self::B => "B",
            Self::Bm => "B-",
            Self::CCCp => "CCC+",
            Self::CCC => "CCC",
        }
    }

    /// Map a credit score in [0, 100] onto the rating scale.
    ///
    /// Bands have inclusive lower bounds evaluated highest-first; every
    /// integer score maps to exactly one rating.
    pub fn from_score(score: i32) -> CreditRating {
        match score {
            s if s >= 90 => Self::AAA,
            s if s >= 85 => Self::AAp,
            s if s >= 80 => Self::AA,
            s if s >= 75 => Self::AAm,
            s if s >= 70 => Self::Ap,
            s if s >= 65 => Self::A,
            s if s >= 60 => Self::Am,
            s if s >= 55 => Self::BBBp,
            s if s >= 50 => Self::BBB,
            s if s >= 45 => Self::BBBm,
            s if s >= 40 => Self::BBp,
            s if s >= 35 => Self::BB,
            s if s >= 30 => Self::BBm,
            s if s >= 25 => Self::Bp,
            s if s >= 20 => Self::B,
            s if s >= 15 => Self::Bm,
            s if s >= 10 => Self::CCCp,
            _ => Self::CCC,
        }
    }

    /// Coupon spread over the benchmark rate, in percentage points.
    /// Monotonically increasing as credit quality worsens.
    pub fn base_spread(&self) -> Decimal {
        match self {
            Self::AAA => dec!(0.5),
            Self::AAp => dec!(0.7),
            Self::AA => dec!(0.9),
            Self::AAm => dec!(1.1),
            Self::Ap => dec!(1.3),
            Self::A => dec!(1.5),
            Self::Am => dec!(1.8),
            Self::BBBp => dec!(2.1),
            Self::BBB => dec!(2.5),
            Self::BBBm => dec!(3.0),
            Self::BBp => dec!(3.5),
            Self::BB => dec!(4.0),
            Self::BBm => dec!(4.5),
            Self::Bp => dec!(5.0),
            Self::B => dec!(5.5),
            Self::Bm => dec!(6.0),
            Self::CCCp => dec!(7.0),
            Self::CCC => dec!(8.0),
        }
    }

    /// AAA through BBB- inclusive. Exact set membership — deliberately not
    /// shared with the covenant gate, which matches on label prefixes.
    pub fn is_investment_grade(&self) -> bool {
        matches!(
            self,
            Self::AAA
                | Self::AAp
                | Self::AA
                | Self::AAm
                | Self::Ap
                | Self::A
                | Self::Am
                | Self::BBBp
                | Self::BBB
                | Self::BBBm
        )
    }
}

impl std::fmt::Display for CreditRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spread for an unrated issuer. Exists only so callers holding a raw label
/// outside the 18-notch scale degrade gracefully.
pub fn spread_or_default(rating: Option<CreditRating>) -> Decimal {
    rating.map(|r| r.base_spread()).unwrap_or(UNRATED_SPREAD)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_score_maps_to_one_rating() {
        // No gaps, no overlaps across the full score domain.
        for score in 0..=100 {
            let rating = CreditRating::from_score(score);
            assert!(
                CreditRating::ALL.contains(&rating),
                "score {score} produced unexpected rating {rating}"
            );
        }
    }

    #[test]
    fn test_band_boundaries_inclusive() {
        assert_eq!(CreditRating::from_score(90), CreditRating::AAA);
        assert_eq!(CreditRating::from_score(89), CreditRating::AAp);
        assert_eq!(CreditRating::from_score(85), CreditRating::AAp);
        assert_eq!(CreditRating::from_score(50), CreditRating::BBB);
        assert_eq!(CreditRating::from_score(49), CreditRating::BBBm);
        assert_eq!(CreditRating::from_score(10), CreditRating::CCCp);
        assert_eq!(CreditRating::from_score(9), CreditRating::CCC);
        assert_eq!(CreditRating::from_score(0), CreditRating::CCC);
    }

    #[test]
    fn test_mapping_is_monotonic() {
        // Lower scores never produce a better rating than higher scores.
        let position = |r: CreditRating| {
            CreditRating::ALL.iter().position(|x| *x == r).unwrap()
        };
        let mut last = position(CreditRating::from_score(100));
        for score in (0..100).rev() {
            let pos = position(CreditRating::from_score(score));
            assert!(pos >= last, "rating improved as score fell at {score}");
            last = pos;
        }
    }

    #[test]
    fn test_spreads_widen_as_quality_worsens() {
        let mut last = Decimal::ZERO;
        for rating in CreditRating::ALL {
            let spread = rating.base_spread();
            assert!(
                spread > last,
                "spread for {rating} ({spread}) not above previous ({last})"
            );
            last = spread;
        }
    }

    #[test]
    fn test_unrated_spread_default() {
        assert_eq!(spread_or_default(None), dec!(5.0));
        assert_eq!(spread_or_default(Some(CreditRating::AAA)), dec!(0.5));
    }

    #[test]
    fn test_investment_grade_cutoff() {
        assert!(CreditRating::AAA.is_investment_grade());
        assert!(CreditRating::BBBm.is_investment_grade());
        assert!(!CreditRating::BBp.is_investment_grade());
        assert!(!CreditRating::CCC.is_investment_grade());

        let ig_count = CreditRating::ALL
            .iter()
            .filter(|r| r.is_investment_grade())
            .count();
        assert_eq!(ig_count, 10);
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(
            serde_json::to_string(&CreditRating::AAp).unwrap(),
            "\"AA+\""
        );
        assert_eq!(
            serde_json::to_string(&CreditRating::BBBm).unwrap(),
            "\"BBB-\""
        );
        let back: CreditRating = serde_json::from_str("\"CCC+\"").unwrap();
        assert_eq!(back, CreditRating::CCCp);
    }
}
