//! Validation outcome model.

use serde::{Deserialize, Serialize};

/// The result of checking a payroll result for internal consistency.
///
/// `errors` are hard violations; `warnings` are informational. A result is
/// valid exactly when `errors` is empty.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ValidationOutcome;
///
/// let mut outcome = ValidationOutcome::default();
/// outcome.warn("PF amount exceeds statutory maximum");
/// assert!(outcome.is_valid);
///
/// outcome.error("Net salary cannot be negative");
/// assert!(!outcome.is_valid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// True when no hard errors were found.
    pub is_valid: bool,
    /// Hard violations, in the order checked.
    pub errors: Vec<String>,
    /// Soft anomalies, in the order checked.
    pub warnings: Vec<String>,
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl ValidationOutcome {
    /// Records a hard error and marks the outcome invalid.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    /// Records a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns true if any warnings were recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
