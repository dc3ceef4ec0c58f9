//! The payroll calculation pipeline.
//!
//! [`calculate_payroll`] runs every rule for one employee-month in a fixed
//! order and assembles the result together with its audit trace.

use std::time::Instant;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::attendance::aggregate_attendance;
use super::component::ComponentAmount;
use super::earnings::{calculate_hra, calculate_overtime_pay, calculate_variable_pay};
use super::income_tax::calculate_annualized_income_tax;
use super::pro_ration::{calculate_pro_rated_salary, ProRationContext};
use super::rounding::round_currency;
use super::statutory::{calculate_esi, calculate_insurance, calculate_leave_deduction, calculate_pf};
use super::working_days::working_days_in_month;
use crate::config::{MAX_MONETARY_AMOUNT, PayrollConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, EmployeePayrollInput, PayrollCalculationResult};

/// Switches that change which parts of the pipeline apply.
///
/// Every option defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationOptions {
    /// Pay approved variable pay. When off, variable pay and bonus are 0.
    pub include_variable_pay: bool,
    /// Use attendance records. When off, every working day counts as present
    /// with no leave and no overtime.
    pub include_attendance: bool,
    /// Deduct PF and ESI. Income tax is deducted either way.
    pub include_statutory_deductions: bool,
    /// Pro-rate the basic salary when the employee leaves mid-month.
    pub pro_rate_for_mid_month_exit: bool,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            include_variable_pay: true,
            include_attendance: true,
            include_statutory_deductions: true,
            pro_rate_for_mid_month_exit: true,
        }
    }
}

/// Calculates the payroll for one employee-month.
///
/// The rules run in this order, each adding one step to the audit trace:
/// working days, attendance, pro-ration, HRA, overtime, variable pay,
/// allowances, PF, ESI, leave deduction, insurance, income tax, other
/// deductions. Income tax uses the annualized formula on total earnings.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] when the month is outside 1-12 and
/// [`EngineError::InvalidInput`] when the basic salary, allowances, other
/// deductions or a variable pay amount is negative or above
/// [`MAX_MONETARY_AMOUNT`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_payroll, CalculationOptions};
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::EmployeePayrollInput;
/// use rust_decimal::Decimal;
///
/// let input = EmployeePayrollInput {
///     employee_id: "emp_001".to_string(),
///     month: 5,
///     year: 2024,
///     basic_salary: Decimal::new(50000, 0),
///     hire_date: None,
///     exit_date: None,
///     attendance: vec![],
///     variable_pay: vec![],
///     allowances: Decimal::ZERO,
///     other_deductions: Decimal::ZERO,
/// };
///
/// let options = CalculationOptions {
///     include_attendance: false,
///     ..CalculationOptions::default()
/// };
/// let result = calculate_payroll(&input, &options, &PayrollConfig::default()).unwrap();
///
/// assert_eq!(result.basic_salary, Decimal::new(50000, 0));
/// assert_eq!(result.total_earnings, Decimal::new(70000, 0));
/// assert_eq!(result.net_salary, result.total_earnings - result.total_deductions);
/// ```
pub fn calculate_payroll(
    input: &EmployeePayrollInput,
    options: &CalculationOptions,
    config: &PayrollConfig,
) -> EngineResult<PayrollCalculationResult> {
    check_input(input)?;

    let start_time = Instant::now();
    let rates = &config.statutory;
    let mut trace = AuditTrace::default();

    // Working days
    let working_days = working_days_in_month(input.month, input.year);
    trace.push(AuditStep {
        step_number: trace.next_step_number(),
        rule_id: "working_days".to_string(),
        rule_name: "Working Days".to_string(),
        formula: "count of Monday-Friday dates in the month".to_string(),
        input: serde_json::json!({
            "month": input.month,
            "year": input.year
        }),
        output: serde_json::json!({
            "working_days": working_days
        }),
        reasoning: format!("{} has {} weekdays", input.period_label(), working_days),
    });

    // Attendance
    let (present_days, leave_days, overtime_hours) = if options.include_attendance {
        let summary = aggregate_attendance(
            &input.attendance,
            input.month,
            input.year,
            rates.standard_daily_hours,
            trace.next_step_number(),
        );
        trace.push(summary.audit_step);
        (summary.present_days, summary.leave_days, summary.overtime_hours)
    } else {
        let present = Decimal::from(working_days);
        trace.push(skipped_step(
            trace.next_step_number(),
            "attendance_aggregation",
            "Attendance Aggregation",
            serde_json::json!({
                "present_days": present.to_string(),
                "leave_days": "0",
                "overtime_hours": "0"
            }),
            "Attendance not considered; every working day counts as present",
        ));
        (present, Decimal::ZERO, Decimal::ZERO)
    };

    // Basic salary
    let pro_ration = calculate_pro_rated_salary(
        &ProRationContext {
            basic_salary: input.basic_salary,
            present_days,
            working_days,
            month: input.month,
            year: input.year,
            hire_date: input.hire_date,
            exit_date: input.exit_date,
            pro_rate_exit: options.pro_rate_for_mid_month_exit,
        },
        trace.next_step_number(),
    );
    trace.push(pro_ration.audit_step);
    let basic_salary = pro_ration.amount;

    // Earnings
    let hra = record(&mut trace, |step| calculate_hra(basic_salary, rates.hra_rate, step));
    let overtime = record(&mut trace, |step| {
        calculate_overtime_pay(overtime_hours, input.basic_salary, working_days, rates, step)
    });

    let (variable_pay, bonus) = if options.include_variable_pay {
        let result = calculate_variable_pay(&input.variable_pay, trace.next_step_number());
        trace.push(result.audit_step);
        (result.amount, result.bonus)
    } else {
        trace.push(skipped_step(
            trace.next_step_number(),
            "variable_pay",
            "Variable Pay",
            serde_json::json!({ "variable_pay": "0", "bonus": "0" }),
            "Variable pay not included",
        ));
        (Decimal::ZERO, Decimal::ZERO)
    };

    let allowances = round_currency(input.allowances);
    trace.push(AuditStep {
        step_number: trace.next_step_number(),
        rule_id: "allowances".to_string(),
        rule_name: "Allowances".to_string(),
        formula: "round(allowances)".to_string(),
        input: serde_json::json!({
            "allowances": input.allowances.normalize().to_string()
        }),
        output: serde_json::json!({
            "allowances": allowances.to_string()
        }),
        reasoning: format!("Fixed allowances of {}", allowances),
    });

    let total_earnings = basic_salary + hra + variable_pay + overtime + allowances;

    // Deductions
    let (pf, esi) = if options.include_statutory_deductions {
        let pf = record(&mut trace, |step| calculate_pf(basic_salary, rates, step));
        let esi = record(&mut trace, |step| calculate_esi(basic_salary, rates, step));
        (pf, esi)
    } else {
        for (rule_id, rule_name, output) in [
            ("pf", "Provident Fund", serde_json::json!({ "pf": "0" })),
            ("esi", "Employee State Insurance", serde_json::json!({ "esi": "0" })),
        ] {
            trace.push(skipped_step(
                trace.next_step_number(),
                rule_id,
                rule_name,
                output,
                "Statutory deductions not included",
            ));
        }
        (Decimal::ZERO, Decimal::ZERO)
    };

    let leave_deduction = record(&mut trace, |step| {
        calculate_leave_deduction(input.basic_salary, working_days, leave_days, step)
    });
    let insurance = record(&mut trace, calculate_insurance);
    let tax = record(&mut trace, |step| {
        calculate_annualized_income_tax(total_earnings, &config.tax_slabs, step)
    });

    let other_deductions = round_currency(input.other_deductions);
    trace.push(AuditStep {
        step_number: trace.next_step_number(),
        rule_id: "other_deductions".to_string(),
        rule_name: "Other Deductions".to_string(),
        formula: "round(other_deductions)".to_string(),
        input: serde_json::json!({
            "other_deductions": input.other_deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "other_deductions": other_deductions.to_string()
        }),
        reasoning: format!("Other deductions of {}", other_deductions),
    });

    let total_deductions = pf + esi + tax + insurance + leave_deduction + other_deductions;
    let net_salary = total_earnings - total_deductions;

    debug!(
        employee_id = %input.employee_id,
        period = %input.period_label(),
        net_salary = %net_salary,
        steps = trace.steps.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Payroll calculated"
    );

    Ok(PayrollCalculationResult {
        employee_id: input.employee_id.clone(),
        month: input.month,
        year: input.year,
        basic_salary,
        hra,
        variable_pay,
        overtime,
        bonus,
        allowances,
        total_earnings,
        pf,
        esi,
        tax,
        insurance,
        leave_deduction,
        other_deductions,
        total_deductions,
        net_salary,
        working_days,
        present_days,
        leave_days,
        overtime_hours,
        audit_trace: trace,
    })
}

/// Rejects input the pipeline cannot give a meaningful result for.
///
/// Monetary inputs must lie in `0..=MAX_MONETARY_AMOUNT`; this includes every
/// variable pay entry, whatever its approval status.
pub(crate) fn check_input(input: &EmployeePayrollInput) -> EngineResult<()> {
    if !(1..=12).contains(&input.month) {
        return Err(EngineError::InvalidPeriod {
            month: input.month,
            year: input.year,
        });
    }

    let amounts = [
        ("basic_salary", input.basic_salary),
        ("allowances", input.allowances),
        ("other_deductions", input.other_deductions),
    ]
    .into_iter()
    .chain(input.variable_pay.iter().map(|e| ("variable_pay", e.amount)));

    for (field, value) in amounts {
        let message = if value < Decimal::ZERO {
            format!("must not be negative, got {}", value)
        } else if value > MAX_MONETARY_AMOUNT {
            format!("must not exceed {}, got {}", MAX_MONETARY_AMOUNT, value)
        } else {
            continue;
        };
        return Err(EngineError::InvalidInput {
            employee_id: input.employee_id.clone(),
            field: field.to_string(),
            message,
        });
    }

    Ok(())
}

fn record(trace: &mut AuditTrace, calculate: impl FnOnce(u32) -> ComponentAmount) -> Decimal {
    let component = calculate(trace.next_step_number());
    trace.push(component.audit_step);
    component.amount
}

fn skipped_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    output: serde_json::Value,
    reasoning: &str,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        formula: "not applied".to_string(),
        input: serde_json::json!({}),
        output,
        reasoning: reasoning.to_string(),
    }
}
