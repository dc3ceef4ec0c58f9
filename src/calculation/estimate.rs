//! On-demand payroll estimate.
//!
//! The estimate is a quick breakdown from the nominal salary. It skips
//! attendance and pro-ration, and taxes the monthly gross with the
//! monthly-slab formula, so its figures differ from a processed payroll.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::check_input;
use super::earnings::{calculate_hra, calculate_variable_pay};
use super::income_tax::calculate_monthly_slab_income_tax;
use super::statutory::{calculate_esi, calculate_pf};
use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{AuditTrace, EmployeePayrollInput};

/// An estimated payroll breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEstimate {
    /// The employee this estimate is for.
    pub employee_id: String,
    /// The payroll month (1-12).
    pub month: u32,
    /// The payroll year.
    pub year: i32,
    /// Nominal basic salary.
    pub basic_salary: Decimal,
    /// House rent allowance on the nominal salary.
    pub hra: Decimal,
    /// Sum of approved variable pay.
    pub variable_pay: Decimal,
    /// `basic_salary + hra + variable_pay`.
    pub gross_salary: Decimal,
    /// Provident fund contribution.
    pub pf: Decimal,
    /// Employee state insurance contribution.
    pub esi: Decimal,
    /// Income tax from the monthly slab formula.
    pub tax: Decimal,
    /// `pf + esi + tax`.
    pub total_deductions: Decimal,
    /// `gross_salary - total_deductions`.
    pub net_salary: Decimal,
    /// Every rule applied, in order.
    pub audit_trace: AuditTrace,
}

/// Estimates the payroll for an employee from the nominal salary.
///
/// Attendance, hire and exit dates, allowances and other deductions are not
/// considered.
///
/// # Errors
///
/// Fails on the same structurally invalid input as
/// [`calculate_payroll`](super::calculate_payroll).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::estimate_payroll;
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
/// let estimate = estimate_payroll(&input, &PayrollConfig::default()).unwrap();
/// assert_eq!(estimate.gross_salary, Decimal::new(70000, 0));
/// assert_eq!(estimate.tax, Decimal::ZERO);
/// assert_eq!(estimate.net_salary, Decimal::new(68200, 0));
/// ```
pub fn estimate_payroll(
    input: &EmployeePayrollInput,
    config: &PayrollConfig,
) -> EngineResult<PayrollEstimate> {
    check_input(input)?;

    let rates = &config.statutory;
    let basic_salary = input.basic_salary;
    let mut trace = AuditTrace::default();

    let hra = calculate_hra(basic_salary, rates.hra_rate, trace.next_step_number());
    trace.push(hra.audit_step);

    let variable_pay = calculate_variable_pay(&input.variable_pay, trace.next_step_number());
    trace.push(variable_pay.audit_step);

    let gross_salary = basic_salary + hra.amount + variable_pay.amount;

    let pf = calculate_pf(basic_salary, rates, trace.next_step_number());
    trace.push(pf.audit_step);

    let esi = calculate_esi(basic_salary, rates, trace.next_step_number());
    trace.push(esi.audit_step);

    let tax = calculate_monthly_slab_income_tax(
        gross_salary,
        &config.tax_slabs,
        trace.next_step_number(),
    );
    trace.push(tax.audit_step);

    let total_deductions = pf.amount + esi.amount + tax.amount;

    Ok(PayrollEstimate {
        employee_id: input.employee_id.clone(),
        month: input.month,
        year: input.year,
        basic_salary,
        hra: hra.amount,
        variable_pay: variable_pay.amount,
        gross_salary,
        pf: pf.amount,
        esi: esi.amount,
        tax: tax.amount,
        total_deductions,
        net_salary: gross_salary - total_deductions,
        audit_trace: trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{calculate_payroll, CalculationOptions};
    use crate::error::EngineError;
    use crate::models::{ApprovalStatus, VariablePayEntry, VariablePayType};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input(basic: &str) -> EmployeePayrollInput {
        EmployeePayrollInput {
            employee_id: "emp_002".to_string(),
            month: 6,
            year: 2024,
            basic_salary: dec(basic),
            hire_date: None,
            exit_date: None,
            attendance: vec![],
            variable_pay: vec![],
            allowances: dec("1000"),
            other_deductions: dec("500"),
        }
    }

    #[test]
    fn test_estimate_ignores_attendance() {
        let estimate = estimate_payroll(&create_test_input("50000"), &PayrollConfig::default())
            .unwrap();
        assert_eq!(estimate.basic_salary, dec("50000"));
        assert_eq!(estimate.hra, dec("20000"));
        assert_eq!(estimate.pf, dec("1800"));
        assert_eq!(estimate.esi, dec("0"));
    }

    #[test]
    fn test_estimate_ignores_allowances_and_other_deductions() {
        let estimate = estimate_payroll(&create_test_input("50000"), &PayrollConfig::default())
            .unwrap();
        assert_eq!(estimate.gross_salary, dec("70000"));
        assert_eq!(estimate.total_deductions, dec("1800"));
        assert_eq!(estimate.net_salary, dec("68200"));
    }

    #[test]
    fn test_estimate_includes_only_approved_variable_pay() {
        let mut input = create_test_input("20000");
        input.variable_pay = vec![
            VariablePayEntry {
                amount: dec("1200"),
                status: ApprovalStatus::Approved,
                pay_type: VariablePayType::Incentive,
                description: None,
            },
            VariablePayEntry {
                amount: dec("800"),
                status: ApprovalStatus::Rejected,
                pay_type: VariablePayType::Bonus,
                description: None,
            },
        ];

        let estimate = estimate_payroll(&input, &PayrollConfig::default()).unwrap();
        assert_eq!(estimate.variable_pay, dec("1200"));
        assert_eq!(estimate.gross_salary, dec("29200"));
        assert_eq!(estimate.esi, dec("150"));
    }

    #[test]
    fn test_estimate_uses_monthly_slab_tax() {
        // 300000 basic: gross 420000, 5% slab on monthly gross
        let estimate = estimate_payroll(&create_test_input("300000"), &PayrollConfig::default())
            .unwrap();
        assert_eq!(estimate.gross_salary, dec("420000"));
        assert_eq!(estimate.tax, dec("8500"));
        assert!(
            estimate
                .audit_trace
                .step("income_tax_monthly_slab")
                .is_some()
        );
    }

    #[test]
    fn test_estimate_tax_differs_from_processed_tax() {
        let mut input = create_test_input("50000");
        input.allowances = Decimal::ZERO;
        input.other_deductions = Decimal::ZERO;

        let config = PayrollConfig::default();
        let options = CalculationOptions {
            include_attendance: false,
            ..CalculationOptions::default()
        };
        let processed = calculate_payroll(&input, &options, &config).unwrap();
        let estimate = estimate_payroll(&input, &config).unwrap();

        assert_eq!(processed.total_earnings, estimate.gross_salary);
        assert_eq!(processed.tax, dec("6708"));
        assert_eq!(estimate.tax, dec("0"));
    }

    #[test]
    fn test_estimate_rejects_invalid_month() {
        let mut input = create_test_input("50000");
        input.month = 0;
        let err = estimate_payroll(&input, &PayrollConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidPeriod { month: 0, .. }));
    }
}
