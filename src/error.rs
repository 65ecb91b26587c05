// src/error.rs

use thiserror::Error;

/// Errors raised by the simulation engine.
///
/// Both variants are caller bugs: the engine never retries and never returns
/// a partial result alongside one of these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    /// A run parameter (stock quantity, number of days) is out of contract.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// A probability table or economics constant is unusable.
    /// Raised when the engine is built, never mid-run.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors raised while exporting results.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
