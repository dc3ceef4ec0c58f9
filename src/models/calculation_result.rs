//! Calculation result models for the Payroll Engine.
//!
//! This module contains the [`PayrollCalculationResult`] type and the audit
//! structures that record every rule applied while producing it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "hra".to_string(),
///     rule_name: "House Rent Allowance".to_string(),
///     formula: "round(basic_salary × hra_rate)".to_string(),
///     input: serde_json::json!({"basic_salary": "50000", "hra_rate": "0.4"}),
///     output: serde_json::json!({"hra": "20000"}),
///     reasoning: "50000 × 0.4 = 20000".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The formula the rule evaluates.
    pub formula: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// Returns the first step recorded for `rule_id`.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }

    /// Returns the number the next recorded step should carry.
    pub fn next_step_number(&self) -> u32 {
        self.steps.len() as u32 + 1
    }

    /// Appends a step.
    pub fn push(&mut self, step: AuditStep) {
        self.steps.push(step);
    }
}

/// The complete earnings and deductions breakdown for one employee-month.
///
/// Totals always satisfy:
/// - `total_earnings = basic_salary + hra + variable_pay + overtime + allowances`
/// - `total_deductions = pf + esi + tax + insurance + leave_deduction + other_deductions`
/// - `net_salary = total_earnings - total_deductions`
///
/// `bonus` is the approved BONUS portion of `variable_pay`, reported on its
/// own and not added to the totals a second time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculationResult {
    /// The employee this result is for.
    pub employee_id: String,
    /// The payroll month (1-12).
    pub month: u32,
    /// The payroll year.
    pub year: i32,

    /// Basic salary after pro-ration.
    pub basic_salary: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Sum of approved variable pay.
    pub variable_pay: Decimal,
    /// Overtime pay.
    pub overtime: Decimal,
    /// Approved bonus entries (included in `variable_pay`).
    pub bonus: Decimal,
    /// Fixed allowances.
    pub allowances: Decimal,
    /// Sum of all earnings.
    pub total_earnings: Decimal,

    /// Provident fund contribution.
    pub pf: Decimal,
    /// Employee state insurance contribution.
    pub esi: Decimal,
    /// Monthly income tax.
    pub tax: Decimal,
    /// Insurance premium.
    pub insurance: Decimal,
    /// Deduction for leave days.
    pub leave_deduction: Decimal,
    /// Non-statutory deductions.
    pub other_deductions: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,

    /// Take-home pay.
    pub net_salary: Decimal,

    /// Weekdays in the payroll month.
    pub working_days: u32,
    /// Days counted as present.
    pub present_days: Decimal,
    /// Days counted as leave.
    pub leave_days: Decimal,
    /// Hours worked beyond the standard day.
    pub overtime_hours: Decimal,

    /// Every rule applied, in order.
    pub audit_trace: AuditTrace,
}

impl PayrollCalculationResult {
    /// Returns the working days as a decimal, for comparison with day counts.
    pub fn working_days_decimal(&self) -> Decimal {
        Decimal::from(self.working_days)
    }
}
