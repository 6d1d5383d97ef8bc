use hue_types::ColorId;

/// Errors from color store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record has the requested id.
    #[error("color not found: {0}")]
    NotFound(ColorId),

    /// Two records share an id.
    #[error("duplicate color id: {0}")]
    DuplicateId(ColorId),

    /// Seed data is not a valid JSON array of color records.
    #[error("invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),

    /// I/O error while reading seed data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
