pub mod design;
pub mod error;
pub mod market;
pub mod record;
pub mod types;

pub use design::{BondInputs, BondPrediction};
pub use error::BondDesignError;
pub use types::*;

/// Standard result type for all bond-design operations
pub type BondDesignResult<T> = Result<T, BondDesignError>;
