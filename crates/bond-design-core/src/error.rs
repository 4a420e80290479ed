use thiserror::Error;

#[derive(Debug, Error)]
pub enum BondDesignError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BondDesignError {
    fn from(e: serde_json::Error) -> Self {
        BondDesignError::SerializationError(e.to_string())
    }
}
