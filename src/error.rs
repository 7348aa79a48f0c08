use thiserror::Error;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("No tenant assigned to role: {0}")]
    UnknownRole(String),
}

/// Convenience Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;
