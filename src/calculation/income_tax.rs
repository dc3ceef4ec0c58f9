//! Income tax.
//!
//! There are two formulas over the same slab table. The annualized one is
//! used when payroll is processed; the monthly-slab one is used by the
//! on-demand estimate. They disagree for most salaries, and both are kept.

use rust_decimal::Decimal;

use super::component::ComponentAmount;
use super::rounding::round_currency;
use crate::config::{TaxSlab, TAX_ANNUALIZATION_FACTOR};
use crate::models::AuditStep;

/// Applies the slab table to an amount.
///
/// The first slab whose upper bound covers `amount` gives
/// `base_tax + (amount - lower_limit) × rate`. Amounts at or below zero, or
/// not covered by any slab, are not taxed. The result is not rounded.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::slab_tax;
/// use payroll_engine::config::default_tax_slabs;
/// use rust_decimal::Decimal;
///
/// let slabs = default_tax_slabs();
/// assert_eq!(slab_tax(Decimal::new(250_000, 0), &slabs), Decimal::ZERO);
/// assert_eq!(slab_tax(Decimal::new(600_000, 0), &slabs), Decimal::new(32_500, 0));
/// ```
pub fn slab_tax(amount: Decimal, slabs: &[TaxSlab]) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    slabs
        .iter()
        .find(|slab| slab.covers(amount))
        .map(|slab| slab.base_tax + (amount - slab.lower_limit).max(Decimal::ZERO) * slab.rate)
        .unwrap_or(Decimal::ZERO)
}

/// Calculates monthly income tax by annualizing the gross.
///
/// `round(slab_tax(gross × 12) / 12)`. Used by payroll processing, with
/// `gross` being the month's total earnings.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_annualized_income_tax;
/// use payroll_engine::config::default_tax_slabs;
/// use rust_decimal::Decimal;
///
/// // 600000 annual -> 32500 / 12 = 2708.33
/// let result = calculate_annualized_income_tax(Decimal::new(50000, 0), &default_tax_slabs(), 1);
/// assert_eq!(result.amount, Decimal::new(2708, 0));
/// ```
pub fn calculate_annualized_income_tax(
    gross: Decimal,
    slabs: &[TaxSlab],
    step_number: u32,
) -> ComponentAmount {
    let annual_income = gross * TAX_ANNUALIZATION_FACTOR;
    let annual_tax = slab_tax(annual_income, slabs);
    let amount = round_currency(annual_tax / TAX_ANNUALIZATION_FACTOR);

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax_annualized".to_string(),
        rule_name: "Income Tax (Annualized)".to_string(),
        formula: "round(slab_tax(gross × 12) / 12)".to_string(),
        input: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "annual_income": annual_income.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual_tax": annual_tax.normalize().to_string(),
            "tax": amount.to_string()
        }),
        reasoning: format!(
            "Annual income {} attracts {} tax; monthly share is {}",
            annual_income.normalize(),
            annual_tax.normalize(),
            amount
        ),
    };

    ComponentAmount { amount, audit_step }
}

/// Calculates income tax by applying the slabs to the monthly gross directly.
///
/// `round(slab_tax(gross))`, with no annualization. Used by the on-demand
/// estimate.
pub fn calculate_monthly_slab_income_tax(
    gross: Decimal,
    slabs: &[TaxSlab],
    step_number: u32,
) -> ComponentAmount {
    let amount = round_currency(slab_tax(gross, slabs));

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax_monthly_slab".to_string(),
        rule_name: "Income Tax (Monthly Slab)".to_string(),
        formula: "round(slab_tax(gross))".to_string(),
        input: serde_json::json!({
            "gross": gross.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax": amount.to_string()
        }),
        reasoning: format!(
            "Slabs applied to monthly gross {} give {}",
            gross.normalize(),
            amount
        ),
    };

    ComponentAmount { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_tax_slabs;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // Slab table
    // ==========================================================================

    #[test]
    fn test_slab_tax_boundaries() {
        let slabs = default_tax_slabs();
        assert_eq!(slab_tax(dec("0"), &slabs), dec("0"));
        assert_eq!(slab_tax(dec("250000"), &slabs), dec("0"));
        assert_eq!(slab_tax(dec("250001"), &slabs), dec("0.05"));
        assert_eq!(slab_tax(dec("500000"), &slabs), dec("12500"));
        assert_eq!(slab_tax(dec("1000000"), &slabs), dec("112500"));
        assert_eq!(slab_tax(dec("1200000"), &slabs), dec("172500"));
    }

    #[test]
    fn test_slab_tax_negative_amount() {
        assert_eq!(slab_tax(dec("-5000"), &default_tax_slabs()), dec("0"));
    }

    #[test]
    fn test_slab_tax_empty_table() {
        assert_eq!(slab_tax(dec("900000"), &[]), dec("0"));
    }

    // ==========================================================================
    // Annualized
    // ==========================================================================

    #[test]
    fn test_annualized_50000() {
        let result = calculate_annualized_income_tax(dec("50000"), &default_tax_slabs(), 1);
        assert_eq!(result.amount, dec("2708"));
        assert_eq!(result.audit_step.input["annual_income"], "600000");
        assert_eq!(result.audit_step.output["annual_tax"], "32500");
    }

    #[test]
    fn test_annualized_below_exemption() {
        // 20000 × 12 = 240000
        let result = calculate_annualized_income_tax(dec("20000"), &default_tax_slabs(), 1);
        assert_eq!(result.amount, dec("0"));
    }

    #[test]
    fn test_annualized_second_slab() {
        // 30000 × 12 = 360000; 110000 × 0.05 = 5500; / 12 = 458.33
        let result = calculate_annualized_income_tax(dec("30000"), &default_tax_slabs(), 1);
        assert_eq!(result.amount, dec("458"));
    }

    #[test]
    fn test_annualized_top_slab() {
        // 100000 × 12 = 1200000; 112500 + 60000 = 172500; / 12 = 14375
        let result = calculate_annualized_income_tax(dec("100000"), &default_tax_slabs(), 1);
        assert_eq!(result.amount, dec("14375"));
    }

    #[test]
    fn test_annualized_70000() {
        // 840000 annual; 12500 + 68000 = 80500; / 12 = 6708.33
        let result = calculate_annualized_income_tax(dec("70000"), &default_tax_slabs(), 1);
        assert_eq!(result.amount, dec("6708"));
    }

    // ==========================================================================
    // Monthly slab
    // ==========================================================================

    #[test]
    fn test_monthly_slab_50000_is_untaxed() {
        let result = calculate_monthly_slab_income_tax(dec("50000"), &default_tax_slabs(), 1);
        assert_eq!(result.amount, dec("0"));
    }

    #[test]
    fn test_monthly_slab_high_gross() {
        // 300000 falls in the 5% slab: 50000 × 0.05
        let result = calculate_monthly_slab_income_tax(dec("300000"), &default_tax_slabs(), 1);
        assert_eq!(result.amount, dec("2500"));
    }

    #[test]
    fn test_formulas_disagree_for_typical_salary() {
        let slabs = default_tax_slabs();
        let annualized = calculate_annualized_income_tax(dec("50000"), &slabs, 1);
        let monthly = calculate_monthly_slab_income_tax(dec("50000"), &slabs, 1);

        assert_eq!(annualized.amount, dec("2708"));
        assert_eq!(monthly.amount, dec("0"));
        assert_ne!(annualized.amount, monthly.amount);
    }

    #[test]
    fn test_rule_ids_are_distinct() {
        let slabs = default_tax_slabs();
        assert_eq!(
            calculate_annualized_income_tax(dec("1"), &slabs, 1).audit_step.rule_id,
            "income_tax_annualized"
        );
        assert_eq!(
            calculate_monthly_slab_income_tax(dec("1"), &slabs, 1).audit_step.rule_id,
            "income_tax_monthly_slab"
        );
    }
}
