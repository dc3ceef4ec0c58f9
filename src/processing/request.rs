//! Processing request type.

use serde::{Deserialize, Serialize};

use crate::calculation::CalculationOptions;
use crate::error::{EngineError, EngineResult};

/// A request to process payroll for a month.
///
/// The calculation switches sit at the top level of the serialized form,
/// next to `month` and `year`.
///
/// # Example
///
/// ```
/// use payroll_engine::processing::ProcessingRequest;
///
/// let request: ProcessingRequest = serde_json::from_str(
///     r#"{"month": 4, "year": 2024, "employee_ids": ["emp_001"], "include_attendance": false}"#,
/// ).unwrap();
///
/// assert!(request.includes("emp_001"));
/// assert!(!request.includes("emp_002"));
/// assert!(!request.options.include_attendance);
/// assert!(request.options.include_variable_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingRequest {
    /// The payroll month (1-12).
    pub month: u32,
    /// The payroll year.
    pub year: i32,
    /// Restricts processing to these employees. `None` processes everyone.
    #[serde(default)]
    pub employee_ids: Option<Vec<String>>,
    /// Calculation switches.
    #[serde(flatten)]
    pub options: CalculationOptions,
}

impl ProcessingRequest {
    /// Creates a request for every employee with default options.
    pub fn new(month: u32, year: i32) -> Self {
        Self {
            month,
            year,
            employee_ids: None,
            options: CalculationOptions::default(),
        }
    }

    /// Restricts the request to the given employees.
    pub fn for_employees<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.employee_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the calculation options.
    pub fn with_options(mut self, options: CalculationOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns true if `employee_id` is targeted by this request.
    pub fn includes(&self, employee_id: &str) -> bool {
        self.employee_ids
            .as_ref()
            .is_none_or(|ids| ids.iter().any(|id| id == employee_id))
    }

    /// Returns the period formatted as `YYYY-MM`.
    pub fn period_label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Checks that the request names a calendar month.
    pub fn validate(&self) -> EngineResult<()> {
        if (1..=12).contains(&self.month) {
            Ok(())
        } else {
            Err(EngineError::InvalidPeriod {
                month: self.month,
                year: self.year,
            })
        }
    }
}
