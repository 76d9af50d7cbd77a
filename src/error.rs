use thiserror::Error;

/// Errors raised when the inputs of a statistic do not meet its preconditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// The sample data cannot produce the requested statistic (empty, too short, zero variance).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A test parameter is outside the supported set (significance level, degrees of freedom, tail).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Paired series of different lengths.
    #[error("Lists must be same length")]
    LengthMismatch { x: usize, y: usize },
}

impl StatsError {
    pub(crate) fn input(msg: impl Into<String>) -> Self {
        StatsError::InvalidInput(msg.into())
    }

    pub(crate) fn parameter(msg: impl Into<String>) -> Self {
        StatsError::InvalidParameter(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
