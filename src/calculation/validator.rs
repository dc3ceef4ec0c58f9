//! Consistency checks on a calculated payroll.

use rust_decimal::Decimal;

use super::rounding::round_currency;
use crate::config::PayrollConfig;
use crate::models::{PayrollCalculationResult, ValidationOutcome};

/// Checks a payroll result for internal consistency.
///
/// Every check runs. Errors are reported in this order: negative basic
/// salary, negative total earnings, negative total deductions, negative net
/// salary, present days above working days, leave days above working days.
/// Warnings: PF above the configured cap, and HRA more than one unit away
/// from `round(basic_salary × hra_rate)`.
pub fn validate_payroll(result: &PayrollCalculationResult, config: &PayrollConfig) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();
    let working_days = result.working_days_decimal();

    if result.basic_salary < Decimal::ZERO {
        outcome.error("Basic salary cannot be negative");
    }
    if result.total_earnings < Decimal::ZERO {
        outcome.error("Total earnings cannot be negative");
    }
    if result.total_deductions < Decimal::ZERO {
        outcome.error("Total deductions cannot be negative");
    }
    if result.net_salary < Decimal::ZERO {
        outcome.error("Net salary cannot be negative");
    }
    if result.present_days > working_days {
        outcome.error("Present days cannot exceed working days");
    }
    if result.leave_days > working_days {
        outcome.error("Leave days cannot exceed working days");
    }

    if result.pf > config.statutory.max_pf_amount {
        outcome.warn("PF amount exceeds statutory maximum");
    }
    let expected_hra = round_currency(result.basic_salary * config.statutory.hra_rate);
    if (result.hra - expected_hra).abs() > Decimal::ONE {
        outcome.warn("HRA calculation may be incorrect");
    }

    outcome
}
