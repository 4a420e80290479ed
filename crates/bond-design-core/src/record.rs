//! Persistence-boundary shape for a stored simulation.
//!
//! Storage itself lives outside this crate; callers hand this flat record
//! to whatever keyed store they use and get it back with the same shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::design::{BondInputs, BondPrediction};

/// One saved run: identity and audit fields plus the inputs and the
/// prediction they produced, flattened into a single record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondSimulation {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub inputs: BondInputs,
    #[serde(flatten)]
    pub prediction: BondPrediction,
}

impl BondSimulation {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        inputs: BondInputs,
        prediction: BondPrediction,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            created_at: Utc::now(),
            inputs,
            prediction,
        }
    }
}
