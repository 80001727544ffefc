use thiserror::Error;

/// Failure reported by a persisted key/value backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage read failed for '{key}': {reason}")]
    Read { key: String, reason: String },

    #[error("Storage write failed for '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Form input rejected before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Please select an image file")]
    InvalidType { media_type: String },

    #[error("Failed to read file: {0}")]
    ReadFailed(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("User record error: {0}")]
    Record(#[from] serde_json::Error),
}

impl AppError {
    /// True for errors caused by what the user typed or picked.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::InvalidType { .. })
    }
}

impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}
