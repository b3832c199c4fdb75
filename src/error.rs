use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid item ID format: {0}")]
    InvalidItemId(String),

    #[error("Invalid item status: {0}")]
    InvalidStatus(String),

    #[error("Unexpected drag payload type: {0}")]
    InvalidDragType(String),

    #[error("Invalid input for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("No column configured for status {0}")]
    UnknownColumn(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
