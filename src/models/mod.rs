//! Core data models for the Payroll Engine.
//!
//! This module contains the value records passed into and returned from
//! the calculator.

mod attendance;
mod calculation_result;
mod employee;
mod validation;
mod variable_pay;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use calculation_result::{AuditStep, AuditTrace, PayrollCalculationResult};
pub use employee::EmployeePayrollInput;
pub use validation::ValidationOutcome;
pub use variable_pay::{ApprovalStatus, VariablePayEntry, VariablePayType};
