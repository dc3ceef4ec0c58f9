//! Records produced by a payroll run.
//!
//! These are plain serializable values for a persistence layer to store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{PayrollCalculationResult, ValidationOutcome};

/// The action recorded in the audit log for a processed payroll.
pub const PAYROLL_PROCESSED_ACTION: &str = "PAYROLL_PROCESSED";

/// Status of a processed payroll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    /// Passed validation with no warnings.
    Validated,
    /// Passed validation with warnings.
    ValidatedWithWarnings,
    /// Failed validation.
    Rejected,
}

impl RecordStatus {
    /// Derives the status from a validation outcome.
    pub fn from_outcome(outcome: &ValidationOutcome) -> Self {
        if !outcome.is_valid {
            RecordStatus::Rejected
        } else if outcome.has_warnings() {
            RecordStatus::ValidatedWithWarnings
        } else {
            RecordStatus::Validated
        }
    }
}

/// The stored payroll for one employee-month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier of the record.
    pub id: Uuid,
    /// The run that produced the record.
    pub run_id: Uuid,
    /// The calculated payroll.
    pub result: PayrollCalculationResult,
    /// The validation outcome for `result`.
    pub validation: ValidationOutcome,
    /// Status derived from `validation`.
    pub status: RecordStatus,
    /// When the record was produced.
    pub processed_at: DateTime<Utc>,
}

/// The attendance and variable pay figures fed into a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInputRecord {
    /// The payroll record this breakdown belongs to.
    pub payroll_id: Uuid,
    /// The employee.
    pub employee_id: String,
    /// The payroll month.
    pub month: u32,
    /// The payroll year.
    pub year: i32,
    /// Weekdays in the month.
    pub working_days: u32,
    /// Days counted present.
    pub present_days: Decimal,
    /// Days counted as leave.
    pub leave_days: Decimal,
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Approved variable pay.
    pub variable_pay: Decimal,
    /// Approved bonus (part of `variable_pay`).
    pub bonus: Decimal,
    /// Fixed allowances.
    pub allowances: Decimal,
    /// Non-statutory deductions.
    pub other_deductions: Decimal,
}

impl PayrollInputRecord {
    /// Extracts the input breakdown from a calculated result.
    pub fn from_result(payroll_id: Uuid, result: &PayrollCalculationResult) -> Self {
        Self {
            payroll_id,
            employee_id: result.employee_id.clone(),
            month: result.month,
            year: result.year,
            working_days: result.working_days,
            present_days: result.present_days,
            leave_days: result.leave_days,
            overtime_hours: result.overtime_hours,
            variable_pay: result.variable_pay,
            bonus: result.bonus,
            allowances: result.allowances,
            other_deductions: result.other_deductions,
        }
    }
}

/// An audit log entry for a processed payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// What happened.
    pub action: String,
    /// The run it happened in.
    pub run_id: Uuid,
    /// The affected payroll record.
    pub payroll_id: Uuid,
    /// The affected employee.
    pub employee_id: String,
    /// The period as `YYYY-MM`.
    pub period: String,
    /// Net salary of the record.
    pub net_salary: Decimal,
    /// Status of the record.
    pub status: RecordStatus,
    /// When it happened.
    pub timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
    /// Builds the log entry for a processed payroll record.
    pub fn processed(record: &PayrollRecord) -> Self {
        Self {
            action: PAYROLL_PROCESSED_ACTION.to_string(),
            run_id: record.run_id,
            payroll_id: record.id,
            employee_id: record.result.employee_id.clone(),
            period: format!("{:04}-{:02}", record.result.year, record.result.month),
            net_salary: record.result.net_salary,
            status: record.status,
            timestamp: record.processed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_outcome() {
        let mut outcome = ValidationOutcome::default();
        assert_eq!(RecordStatus::from_outcome(&outcome), RecordStatus::Validated);

        outcome.warn("PF amount exceeds statutory maximum");
        assert_eq!(
            RecordStatus::from_outcome(&outcome),
            RecordStatus::ValidatedWithWarnings
        );

        outcome.error("Net salary cannot be negative");
        assert_eq!(RecordStatus::from_outcome(&outcome), RecordStatus::Rejected);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&RecordStatus::ValidatedWithWarnings).unwrap(),
            "\"VALIDATED_WITH_WARNINGS\""
        );
        assert_eq!(
            serde_json::to_string(&RecordStatus::Rejected).unwrap(),
            "\"REJECTED\""
        );
    }
}
