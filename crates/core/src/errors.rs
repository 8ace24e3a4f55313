use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Booking conflict: {0}")]
    Conflict(String),

    #[error("Upstream store unavailable: {0}")]
    Upstream(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// Machine-readable error kind carried in wire responses.
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::NotFound(_) => "NOT_FOUND",
            BookingError::InvalidInput(_) => "VALIDATION",
            BookingError::Conflict(_) => "CONFLICT",
            BookingError::Upstream(_) => "UPSTREAM_UNAVAILABLE",
            BookingError::Internal(_) => "INTERNAL",
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
