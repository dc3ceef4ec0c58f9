//! Basic salary pro-ration.
//!
//! The effective basic salary for a month depends on whether the employee
//! joined or left during it, and otherwise on attendance.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rounding::round_currency;
use crate::models::AuditStep;

/// The rule that determined the pro-rated salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProRationRule {
    /// The month has no working days; salary is zero.
    NoWorkingDays,
    /// Joined this month: paid from the hire day to month end.
    MidMonthHire,
    /// Leaving this month: paid from month start to the exit day.
    MidMonthExit,
    /// Paid for the days present.
    Attendance,
}

/// Everything pro-ration looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProRationContext {
    /// Nominal monthly basic salary.
    pub basic_salary: Decimal,
    /// Days counted present.
    pub present_days: Decimal,
    /// Weekdays in the month.
    pub working_days: u32,
    /// Payroll month.
    pub month: u32,
    /// Payroll year.
    pub year: i32,
    /// Hire date, if known.
    pub hire_date: Option<NaiveDate>,
    /// Exit date, if known.
    pub exit_date: Option<NaiveDate>,
    /// Whether a mid-month exit pro-rates the salary.
    pub pro_rate_exit: bool,
}

impl ProRationContext {
    fn in_period(&self, date: Option<NaiveDate>) -> Option<NaiveDate> {
        date.filter(|d| d.month() == self.month && d.year() == self.year)
    }
}

/// The pro-rated basic salary and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProRationResult {
    /// Basic salary payable for the month.
    pub amount: Decimal,
    /// The rule that applied.
    pub rule: ProRationRule,
    /// The day count the daily rate was multiplied by.
    pub payable_days: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the basic salary payable for the month.
///
/// The first matching rule wins:
/// 1. hired this month: `round(basic / working_days × (working_days - hire_day + 1))`
/// 2. leaving this month: `round(basic / working_days × exit_day)`
/// 3. otherwise: `round(basic / working_days × present_days)`
///
/// The day counts of rules 1 and 2 use the calendar day of the month and are
/// clamped to `0..=working_days`. A month with no working days pays nothing.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_pro_rated_salary, ProRationContext, ProRationRule};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let context = ProRationContext {
///     basic_salary: Decimal::new(44000, 0),
///     present_days: Decimal::new(22, 0),
///     working_days: 22,
///     month: 5,
///     year: 2024,
///     hire_date: Some(NaiveDate::from_ymd_opt(2024, 5, 12).unwrap()),
///     exit_date: None,
///     pro_rate_exit: true,
/// };
///
/// let result = calculate_pro_rated_salary(&context, 1);
/// assert_eq!(result.rule, ProRationRule::MidMonthHire);
/// assert_eq!(result.amount, Decimal::new(22000, 0)); // 2000/day × 11 days
/// ```
pub fn calculate_pro_rated_salary(context: &ProRationContext, step_number: u32) -> ProRationResult {
    let working_days = Decimal::from(context.working_days);
    let clamp = |days: Decimal| days.max(Decimal::ZERO).min(working_days);

    let (rule, payable_days) = if context.working_days == 0 {
        (ProRationRule::NoWorkingDays, Decimal::ZERO)
    } else if let Some(hire) = context.in_period(context.hire_date) {
        let days = working_days - Decimal::from(hire.day()) + Decimal::ONE;
        (ProRationRule::MidMonthHire, clamp(days))
    } else if let Some(exit) = context
        .in_period(context.exit_date)
        .filter(|_| context.pro_rate_exit)
    {
        (ProRationRule::MidMonthExit, clamp(Decimal::from(exit.day())))
    } else {
        (ProRationRule::Attendance, context.present_days)
    };

    let amount = if context.working_days == 0 {
        Decimal::ZERO
    } else {
        round_currency(context.basic_salary / working_days * payable_days)
    };

    let reasoning = match rule {
        ProRationRule::NoWorkingDays => {
            "Month has no working days; basic salary is 0".to_string()
        }
        _ => format!(
            "{} / {} working days × {} days = {} ({})",
            context.basic_salary.normalize(),
            context.working_days,
            payable_days.normalize(),
            amount,
            match rule {
                ProRationRule::MidMonthHire => "joined this month",
                ProRationRule::MidMonthExit => "leaving this month",
                _ => "attendance",
            }
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pro_ration".to_string(),
        rule_name: "Basic Salary Pro-Ration".to_string(),
        formula: "round(basic_salary / working_days × payable_days)".to_string(),
        input: serde_json::json!({
            "basic_salary": context.basic_salary.normalize().to_string(),
            "present_days": context.present_days.normalize().to_string(),
            "working_days": context.working_days,
            "hire_date": context.hire_date.map(|d| d.to_string()),
            "exit_date": context.exit_date.map(|d| d.to_string()),
            "pro_rate_exit": context.pro_rate_exit
        }),
        output: serde_json::json!({
            "rule": rule,
            "payable_days": payable_days.normalize().to_string(),
            "basic_salary": amount.to_string()
        }),
        reasoning,
    };

    ProRationResult {
        amount,
        rule,
        payable_days,
        audit_step,
    }
}
