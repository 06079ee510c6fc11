use thiserror::Error;

/// Errors raised while turning a log line into a [`crate::PingRecord`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid log line: {0}")]
    InvalidLine(String),

    #[error("OK status must include latency_ms")]
    MissingLatency,

    #[error("FAIL status must not include latency_ms")]
    UnexpectedLatency,
}

/// Errors raised by [`crate::percentile`] for inputs with no defined percentile.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PercentileError {
    #[error("values must be non-empty")]
    EmptyValues,

    #[error("p must be between 0 and 100 (got {0})")]
    OutOfRange(f64),
}
