//! Earnings formulas: house rent allowance, overtime pay and variable pay.

use rust_decimal::Decimal;

use super::component::ComponentAmount;
use super::rounding::round_currency;
use crate::config::StatutoryRates;
use crate::models::{AuditStep, VariablePayEntry, VariablePayType};

/// Calculates house rent allowance: `round(basic_salary × hra_rate)`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_hra;
/// use payroll_engine::config::HRA_RATE;
/// use rust_decimal::Decimal;
///
/// let result = calculate_hra(Decimal::new(50000, 0), HRA_RATE, 1);
/// assert_eq!(result.amount, Decimal::new(20000, 0));
/// ```
pub fn calculate_hra(basic_salary: Decimal, hra_rate: Decimal, step_number: u32) -> ComponentAmount {
    let amount = round_currency(basic_salary * hra_rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "hra".to_string(),
        rule_name: "House Rent Allowance".to_string(),
        formula: "round(basic_salary × hra_rate)".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "hra_rate": hra_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "hra": amount.to_string()
        }),
        reasoning: format!(
            "{} × {} = {}",
            basic_salary.normalize(),
            hra_rate.normalize(),
            amount
        ),
    };

    ComponentAmount { amount, audit_step }
}

/// Calculates overtime pay.
///
/// `round(overtime_hours × basic_salary / (working_days × standard_daily_hours) × overtime_multiplier)`,
/// where `basic_salary` is the nominal (not pro-rated) salary. Zero when there
/// are no overtime hours or no working days.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_pay;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// // 44000 / (22 × 8) = 250/hour; 4 hours × 250 × 1.5
/// let result = calculate_overtime_pay(
///     Decimal::new(4, 0),
///     Decimal::new(44000, 0),
///     22,
///     &StatutoryRates::default(),
///     1,
/// );
/// assert_eq!(result.amount, Decimal::new(1500, 0));
/// ```
pub fn calculate_overtime_pay(
    overtime_hours: Decimal,
    basic_salary: Decimal,
    working_days: u32,
    rates: &StatutoryRates,
    step_number: u32,
) -> ComponentAmount {
    let monthly_hours = Decimal::from(working_days) * rates.standard_daily_hours;

    let (amount, reasoning) = if overtime_hours <= Decimal::ZERO {
        (Decimal::ZERO, "No overtime hours recorded".to_string())
    } else if monthly_hours <= Decimal::ZERO {
        (
            Decimal::ZERO,
            "No working hours in the month; overtime is not paid".to_string(),
        )
    } else {
        let hourly_rate = basic_salary / monthly_hours;
        let amount = round_currency(overtime_hours * hourly_rate * rates.overtime_multiplier);
        (
            amount,
            format!(
                "{} hours × ({} / {} hours) × {} = {}",
                overtime_hours.normalize(),
                basic_salary.normalize(),
                monthly_hours.normalize(),
                rates.overtime_multiplier.normalize(),
                amount
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        formula: "round(overtime_hours × basic_salary / (working_days × standard_daily_hours) × overtime_multiplier)".to_string(),
        input: serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "basic_salary": basic_salary.normalize().to_string(),
            "working_days": working_days,
            "standard_daily_hours": rates.standard_daily_hours.normalize().to_string(),
            "overtime_multiplier": rates.overtime_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime": amount.to_string()
        }),
        reasoning,
    };

    ComponentAmount { amount, audit_step }
}

/// The result of summing variable pay entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariablePayResult {
    /// Sum of approved entries.
    pub amount: Decimal,
    /// Sum of approved entries of type BONUS (part of `amount`).
    pub bonus: Decimal,
    /// Number of approved entries.
    pub approved_entries: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums approved variable pay.
///
/// Entries that are PENDING or REJECTED contribute nothing regardless of
/// amount. The sum is not rounded.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_variable_pay;
/// use payroll_engine::models::{ApprovalStatus, VariablePayEntry, VariablePayType};
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     VariablePayEntry {
///         amount: Decimal::new(3000, 0),
///         status: ApprovalStatus::Approved,
///         pay_type: VariablePayType::Incentive,
///         description: None,
///     },
///     VariablePayEntry {
///         amount: Decimal::new(9000, 0),
///         status: ApprovalStatus::Pending,
///         pay_type: VariablePayType::Bonus,
///         description: None,
///     },
/// ];
///
/// let result = calculate_variable_pay(&entries, 1);
/// assert_eq!(result.amount, Decimal::new(3000, 0));
/// assert_eq!(result.bonus, Decimal::ZERO);
/// ```
pub fn calculate_variable_pay(entries: &[VariablePayEntry], step_number: u32) -> VariablePayResult {
    let approved: Vec<&VariablePayEntry> = entries.iter().filter(|e| e.is_payable()).collect();

    let amount: Decimal = approved.iter().map(|e| e.amount).sum();
    let bonus: Decimal = approved
        .iter()
        .filter(|e| e.pay_type == VariablePayType::Bonus)
        .map(|e| e.amount)
        .sum();

    let audit_step = AuditStep {
        step_number,
        rule_id: "variable_pay".to_string(),
        rule_name: "Variable Pay".to_string(),
        formula: "sum(amount) over APPROVED entries".to_string(),
        input: serde_json::json!({
            "entries": entries.len(),
            "approved_entries": approved.len()
        }),
        output: serde_json::json!({
            "variable_pay": amount.normalize().to_string(),
            "bonus": bonus.normalize().to_string()
        }),
        reasoning: format!(
            "{} of {} entries approved, totalling {}",
            approved.len(),
            entries.len(),
            amount.normalize()
        ),
    };

    VariablePayResult {
        amount,
        bonus,
        approved_entries: approved.len(),
        audit_step,
    }
}
