use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::BondDesignError;

/// All monetary values (millions). Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as percentages (4.0 = 4%), matching market quote convention.
pub type Percent = Decimal;

/// Multiples (e.g., 3.5x Debt/EBITDA)
pub type Multiple = Decimal;

/// Industry sector of the issuing company.
///
/// Fixed set; scoring applies a stability adjustment for a subset of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Manufacturing,
    Retail,
    Energy,
    Telecommunications,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Consumer Goods")]
    ConsumerGoods,
    Transportation,
}

impl Industry {
    pub const ALL: [Industry; 10] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Manufacturing,
        Industry::Retail,
        Industry::Energy,
        Industry::Telecommunications,
        Industry::RealEstate,
        Industry::ConsumerGoods,
        Industry::Transportation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Manufacturing => "Manufacturing",
            Self::Retail => "Retail",
            Self::Energy => "Energy",
            Self::Telecommunications => "Telecommunications",
            Self::RealEstate => "Real Estate",
            Self::ConsumerGoods => "Consumer Goods",
            Self::Transportation => "Transportation",
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Industry {
    type Err = BondDesignError;

    /// Case-insensitive; spaces, hyphens and underscores are interchangeable
    /// so CLI forms like `real-estate` resolve to `Real Estate`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        Industry::ALL
            .iter()
            .find(|i| {
                i.as_str()
                    .chars()
                    .filter(|c| *c != ' ')
                    .collect::<String>()
                    .to_lowercase()
                    == normalised
            })
            .copied()
            .ok_or_else(|| BondDesignError::InvalidInput {
                field: "industry".into(),
                reason: format!(
                    "Unknown industry '{}'. Expected one of: {}",
                    s,
                    Industry::ALL
                        .iter()
                        .map(|i| i.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
