//! Organization-level payroll totals.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::PayrollCalculationResult;

/// Totals across a set of payroll results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of results summarized.
    pub employee_count: usize,
    /// Sum of basic salaries.
    pub total_basic_salary: Decimal,
    /// Sum of total earnings.
    pub total_earnings: Decimal,
    /// Sum of total deductions.
    pub total_deductions: Decimal,
    /// Sum of net salaries.
    pub total_net_salary: Decimal,
    /// Sum of PF contributions.
    pub total_pf: Decimal,
    /// Sum of ESI contributions.
    pub total_esi: Decimal,
    /// Sum of income tax.
    pub total_tax: Decimal,
    /// Mean net salary, rounded to 2 decimal places. Zero for an empty set.
    pub average_net_salary: Decimal,
}

/// Sums a set of payroll results. Results are not validated.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::summarize_payroll;
/// use rust_decimal::Decimal;
///
/// let summary = summarize_payroll(&[]);
/// assert_eq!(summary.employee_count, 0);
/// assert_eq!(summary.average_net_salary, Decimal::ZERO);
/// ```
pub fn summarize_payroll(results: &[PayrollCalculationResult]) -> PayrollSummary {
    let mut summary = results
        .iter()
        .fold(PayrollSummary::default(), |mut acc, r| {
            acc.employee_count += 1;
            acc.total_basic_salary += r.basic_salary;
            acc.total_earnings += r.total_earnings;
            acc.total_deductions += r.total_deductions;
            acc.total_net_salary += r.net_salary;
            acc.total_pf += r.pf;
            acc.total_esi += r.esi;
            acc.total_tax += r.tax;
            acc
        });

    if summary.employee_count > 0 {
        summary.average_net_salary = (summary.total_net_salary
            / Decimal::from(summary.employee_count))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    }

    summary
}
