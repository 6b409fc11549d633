//! Error types for the EOSB & compliance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while computing benefits,
//! validating decisions, or loading the rule repository.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the engine.
///
/// Every failure is a caller input problem or a deployment configuration
/// problem. Nothing is retried internally. Each variant carries a
/// machine-readable [`kind`](EngineError::kind) alongside its message.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use eosb_engine::error::EngineError;
///
/// let error = EngineError::InvalidRange {
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
/// };
/// assert_eq!(error.kind(), "INVALID_RANGE");
/// assert_eq!(
///     error.to_string(),
///     "Invalid employment period: end date 2024-04-30 is before start date 2024-05-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The employment period ends before it starts.
    #[error("Invalid employment period: end date {end_date} is before start date {start_date}")]
    InvalidRange {
        /// The supplied start date.
        start_date: NaiveDate,
        /// The supplied end date.
        end_date: NaiveDate,
    },

    /// The compensation basis is not a positive amount.
    #[error("Invalid compensation basis: {message}")]
    InvalidCompensation {
        /// A description of what made the compensation invalid.
        message: String,
    },

    /// Decision facts were malformed or a required fact was missing.
    #[error("Invalid decision facts field '{field}': {message}")]
    InvalidFacts {
        /// The fact that was invalid or missing.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// The decision type is unknown or has no rules in the repository.
    #[error("Unsupported decision type: {decision_type}")]
    UnsupportedDecisionType {
        /// The decision type as supplied by the caller.
        decision_type: String,
    },

    /// The termination reason is unknown or not valid for the contract type.
    #[error("Unsupported termination reason '{reason}': {message}")]
    UnsupportedTerminationReason {
        /// The termination reason as supplied by the caller.
        reason: String,
        /// Why the reason was rejected.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Returns the machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            EngineError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            EngineError::InvalidRange { .. } => "INVALID_RANGE",
            EngineError::InvalidCompensation { .. } => "INVALID_COMPENSATION",
            EngineError::InvalidFacts { .. } => "INVALID_FACTS",
            EngineError::UnsupportedDecisionType { .. } => "UNSUPPORTED_DECISION_TYPE",
            EngineError::UnsupportedTerminationReason { .. } => "UNSUPPORTED_TERMINATION_REASON",
            EngineError::CalculationError { .. } => "CALCULATION_ERROR",
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
