use thiserror::Error;

/// Reasons a submitted form is turned away before anything is stored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter an amount")]
    EmptyAmount,
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("Amount cannot be negative")]
    NegativeAmount,
    #[error("Amount cannot exceed {0}")]
    AmountTooLarge(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthLabelError {
    #[error("expected '<Month> <Year>', got '{0}'")]
    Format(String),
    #[error("unknown month name '{0}'")]
    UnknownMonth(String),
    #[error("invalid year '{0}'")]
    Year(String),
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The transaction was recorded in memory but could not be written to storage
    #[error("failed to persist transactions: {0}")]
    Storage(String),
}
