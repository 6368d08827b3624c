//! Domain errors for the pacer system.

use thiserror::Error;

/// Domain-level errors that can occur while aggregating commits or
/// planning progress.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing required query parameters: since and until")]
    MissingParameters,

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid date range: since {since} is after until {until}")]
    InvalidDateRange { since: String, until: String },

    #[error("GitHub search returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode GitHub response: {0}")]
    Decode(String),

    #[error("Page ceiling exceeded: aborted after {pages} pages")]
    PageCeiling { pages: u32 },

    #[error("No yearly commit target saved")]
    GoalNotSet,

    #[error("Database error: {0}")]
    Database(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Database(err.to_string())
    }
}
