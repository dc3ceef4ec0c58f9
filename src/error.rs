//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can stop a payroll calculation. Anomalies in a
//! computed result are not errors; they are reported through
//! [`ValidationOutcome`](crate::models::ValidationOutcome).

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriod { month: 13, year: 2025 };
/// assert_eq!(error.to_string(), "Invalid payroll period: month 13 of 2025");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or is inconsistent.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested payroll month/year does not name a calendar month.
    #[error("Invalid payroll period: month {month} of {year}")]
    InvalidPeriod {
        /// The requested month.
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// An employee's payroll input was structurally invalid.
    #[error("Invalid payroll input for employee '{employee_id}', field '{field}': {message}")]
    InvalidInput {
        /// The employee the input belongs to.
        employee_id: String,
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An input was submitted to a run for a different period.
    #[error("Payroll input for employee '{employee_id}' is for {actual}, expected {expected}")]
    PeriodMismatch {
        /// The employee the input belongs to.
        employee_id: String,
        /// The run's period as `YYYY-MM`.
        expected: String,
        /// The input's period as `YYYY-MM`.
        actual: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
