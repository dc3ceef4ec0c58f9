//! Calculation logic for the Payroll Engine.
//!
//! This module contains the pure payroll functions: working-day counting,
//! attendance aggregation, basic salary pro-ration, the earnings and
//! statutory deduction formulas, both income tax formulas, the full
//! calculation pipeline and on-demand estimate, result validation and
//! summary aggregation.

mod attendance;
mod calculator;
mod component;
mod earnings;
mod estimate;
mod income_tax;
mod pro_ration;
mod rounding;
mod statutory;
mod summary;
mod validator;
mod working_days;

pub use attendance::{AttendanceSummary, aggregate_attendance};
pub use calculator::{CalculationOptions, calculate_payroll};
pub use component::ComponentAmount;
pub use earnings::{VariablePayResult, calculate_hra, calculate_overtime_pay, calculate_variable_pay};
pub use estimate::{PayrollEstimate, estimate_payroll};
pub use income_tax::{calculate_annualized_income_tax, calculate_monthly_slab_income_tax, slab_tax};
pub use pro_ration::{ProRationContext, ProRationResult, ProRationRule, calculate_pro_rated_salary};
pub use rounding::round_currency;
pub use statutory::{calculate_esi, calculate_insurance, calculate_leave_deduction, calculate_pf};
pub use summary::{PayrollSummary, summarize_payroll};
pub use validator::validate_payroll;
pub use working_days::working_days_in_month;
