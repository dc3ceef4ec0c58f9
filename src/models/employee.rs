//! Employee payroll input model.
//!
//! This module defines [`EmployeePayrollInput`], everything the calculator
//! needs to know about one employee for one payroll month.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceRecord, VariablePayEntry};

/// The payroll input for one employee and one calendar month.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeePayrollInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = EmployeePayrollInput {
///     employee_id: "emp_001".to_string(),
///     month: 3,
///     year: 2024,
///     basic_salary: Decimal::new(50000, 0),
///     hire_date: Some(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()),
///     exit_date: None,
///     attendance: vec![],
///     variable_pay: vec![],
///     allowances: Decimal::ZERO,
///     other_deductions: Decimal::ZERO,
/// };
/// assert_eq!(input.period_label(), "2024-03");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayrollInput {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The payroll month (1-12).
    pub month: u32,
    /// The payroll year.
    pub year: i32,
    /// Nominal monthly basic salary.
    pub basic_salary: Decimal,
    /// The date the employee joined, if known.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// The employee's last working day, if they are leaving.
    #[serde(default)]
    pub exit_date: Option<NaiveDate>,
    /// Attendance records for the period.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Variable pay entries for the period.
    #[serde(default)]
    pub variable_pay: Vec<VariablePayEntry>,
    /// Fixed monthly allowances paid on top of basic and HRA.
    #[serde(default)]
    pub allowances: Decimal,
    /// Deductions other than statutory ones and leave.
    #[serde(default)]
    pub other_deductions: Decimal,
}

impl EmployeePayrollInput {
    /// Returns the payroll period formatted as `YYYY-MM`.
    pub fn period_label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}
