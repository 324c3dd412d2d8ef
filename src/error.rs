//! Error types for the leaderboard core engine

use thiserror::Error;

/// Main error type for the leaderboard core engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for LeaderboardError {
    fn from(err: serde_json::Error) -> Self {
        LeaderboardError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<LeaderboardError> for pyo3::PyErr {
    fn from(err: LeaderboardError) -> pyo3::PyErr {
        use pyo3::exceptions::PyValueError;

        match err {
            LeaderboardError::InvalidInput(msg) => {
                PyValueError::new_err(format!("Invalid input: {}", msg))
            }
            LeaderboardError::DeserializationError(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
        }
    }
}

/// Result type alias for the leaderboard core engine
pub type Result<T> = std::result::Result<T, LeaderboardError>;
