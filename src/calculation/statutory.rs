//! Statutory deductions: provident fund, employee state insurance,
//! leave deduction and insurance.

use rust_decimal::Decimal;

use super::component::ComponentAmount;
use super::rounding::round_currency;
use crate::config::StatutoryRates;
use crate::models::AuditStep;

/// Calculates the provident fund contribution: `min(round(basic × pf_rate), max_pf_amount)`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_pf;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::default();
/// assert_eq!(calculate_pf(Decimal::new(10000, 0), &rates, 1).amount, Decimal::new(1200, 0));
/// assert_eq!(calculate_pf(Decimal::new(50000, 0), &rates, 1).amount, Decimal::new(1800, 0));
/// ```
pub fn calculate_pf(basic_salary: Decimal, rates: &StatutoryRates, step_number: u32) -> ComponentAmount {
    let uncapped = round_currency(basic_salary * rates.pf_rate);
    let cap_applied = uncapped > rates.max_pf_amount;
    let amount = uncapped.min(rates.max_pf_amount);

    let reasoning = if cap_applied {
        format!(
            "{} × {} = {}, capped at {}",
            basic_salary.normalize(),
            rates.pf_rate.normalize(),
            uncapped,
            rates.max_pf_amount.normalize()
        )
    } else {
        format!(
            "{} × {} = {}",
            basic_salary.normalize(),
            rates.pf_rate.normalize(),
            amount
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pf".to_string(),
        rule_name: "Provident Fund".to_string(),
        formula: "min(round(basic_salary × pf_rate), max_pf_amount)".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "pf_rate": rates.pf_rate.normalize().to_string(),
            "max_pf_amount": rates.max_pf_amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "pf": amount.to_string(),
            "cap_applied": cap_applied
        }),
        reasoning,
    };

    ComponentAmount { amount, audit_step }
}

/// Calculates the employee state insurance contribution.
///
/// `round(basic × esi_rate)` when `basic <= esi_wage_ceiling`, otherwise 0.
pub fn calculate_esi(basic_salary: Decimal, rates: &StatutoryRates, step_number: u32) -> ComponentAmount {
    let eligible = basic_salary <= rates.esi_wage_ceiling;
    let amount = if eligible {
        round_currency(basic_salary * rates.esi_rate)
    } else {
        Decimal::ZERO
    };

    let reasoning = if eligible {
        format!(
            "{} × {} = {}",
            basic_salary.normalize(),
            rates.esi_rate.normalize(),
            amount
        )
    } else {
        format!(
            "Basic salary {} exceeds the ESI wage ceiling of {}; not applicable",
            basic_salary.normalize(),
            rates.esi_wage_ceiling.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "esi".to_string(),
        rule_name: "Employee State Insurance".to_string(),
        formula: "round(basic_salary × esi_rate) if basic_salary <= esi_wage_ceiling else 0"
            .to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "esi_rate": rates.esi_rate.normalize().to_string(),
            "esi_wage_ceiling": rates.esi_wage_ceiling.normalize().to_string()
        }),
        output: serde_json::json!({
            "esi": amount.to_string(),
            "eligible": eligible
        }),
        reasoning,
    };

    ComponentAmount { amount, audit_step }
}

/// Calculates the deduction for leave days: `round(basic / working_days × leave_days)`.
///
/// `basic_salary` is the nominal monthly salary. Zero when there are no leave
/// days or no working days.
pub fn calculate_leave_deduction(
    basic_salary: Decimal,
    working_days: u32,
    leave_days: Decimal,
    step_number: u32,
) -> ComponentAmount {
    let (amount, reasoning) = if leave_days <= Decimal::ZERO {
        (Decimal::ZERO, "No leave days".to_string())
    } else if working_days == 0 {
        (
            Decimal::ZERO,
            "No working days in the month; nothing to deduct".to_string(),
        )
    } else {
        let amount = round_currency(basic_salary / Decimal::from(working_days) * leave_days);
        (
            amount,
            format!(
                "{} / {} working days × {} leave days = {}",
                basic_salary.normalize(),
                working_days,
                leave_days.normalize(),
                amount
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_deduction".to_string(),
        rule_name: "Leave Deduction".to_string(),
        formula: "round(basic_salary / working_days × leave_days)".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "working_days": working_days,
            "leave_days": leave_days.normalize().to_string()
        }),
        output: serde_json::json!({
            "leave_deduction": amount.to_string()
        }),
        reasoning,
    };

    ComponentAmount { amount, audit_step }
}

/// Insurance premium deduction. Always zero.
pub fn calculate_insurance(step_number: u32) -> ComponentAmount {
    let audit_step = AuditStep {
        step_number,
        rule_id: "insurance".to_string(),
        rule_name: "Insurance".to_string(),
        formula: "0".to_string(),
        input: serde_json::json!({}),
        output: serde_json::json!({
            "insurance": "0"
        }),
        reasoning: "No insurance scheme configured".to_string(),
    };

    ComponentAmount {
        amount: Decimal::ZERO,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // PF
    // ==========================================================================

    #[test]
    fn test_pf_below_cap() {
        let rates = StatutoryRates::default();
        assert_eq!(calculate_pf(dec("12000"), &rates, 1).amount, dec("1440"));
    }

    #[test]
    fn test_pf_exactly_at_cap() {
        let rates = StatutoryRates::default();
        let result = calculate_pf(dec("15000"), &rates, 1);
        assert_eq!(result.amount, dec("1800"));
        assert_eq!(result.audit_step.output["cap_applied"], false);
    }

    #[test]
    fn test_pf_capped_at_1800() {
        let rates = StatutoryRates::default();
        for basic in ["15001", "50000", "100000", "1000000"] {
            let result = calculate_pf(dec(basic), &rates, 1);
            assert_eq!(result.amount, dec("1800"), "basic {}", basic);
        }
        assert_eq!(
            calculate_pf(dec("50000"), &rates, 1).audit_step.output["cap_applied"],
            true
        );
    }

    #[test]
    fn test_pf_rounds_half_up() {
        let rates = StatutoryRates::default();
        // 10012.5 × 0.12 = 1201.5
        assert_eq!(calculate_pf(dec("10012.5"), &rates, 1).amount, dec("1202"));
    }

    #[test]
    fn test_pf_custom_cap() {
        let rates = StatutoryRates {
            max_pf_amount: dec("2500"),
            ..StatutoryRates::default()
        };
        assert_eq!(calculate_pf(dec("50000"), &rates, 1).amount, dec("2500"));
    }

    // ==========================================================================
    // ESI
    // ==========================================================================

    #[test]
    fn test_esi_at_ceiling() {
        let rates = StatutoryRates::default();
        // 21000 × 0.0075 = 157.5 -> 158
        assert_eq!(calculate_esi(dec("21000"), &rates, 1).amount, dec("158"));
    }

    #[test]
    fn test_esi_just_above_ceiling() {
        let rates = StatutoryRates::default();
        let result = calculate_esi(dec("21001"), &rates, 1);
        assert_eq!(result.amount, dec("0"));
        assert_eq!(result.audit_step.output["eligible"], false);
        assert!(result.audit_step.reasoning.contains("exceeds"));
    }

    #[test]
    fn test_esi_low_salary() {
        let rates = StatutoryRates::default();
        assert_eq!(calculate_esi(dec("10000"), &rates, 1).amount, dec("75"));
    }

    #[test]
    fn test_esi_zero_salary() {
        let rates = StatutoryRates::default();
        assert_eq!(calculate_esi(dec("0"), &rates, 1).amount, dec("0"));
    }

    // ==========================================================================
    // Leave deduction
    // ==========================================================================

    #[test]
    fn test_leave_deduction() {
        // 44000 / 22 × 2 = 4000
        let result = calculate_leave_deduction(dec("44000"), 22, dec("2"), 1);
        assert_eq!(result.amount, dec("4000"));
    }

    #[test]
    fn test_leave_deduction_half_day() {
        // 50000 / 22 × 0.5 = 1136.36...
        let result = calculate_leave_deduction(dec("50000"), 22, dec("0.5"), 1);
        assert_eq!(result.amount, dec("1136"));
    }

    #[test]
    fn test_no_leave_days() {
        let result = calculate_leave_deduction(dec("44000"), 22, dec("0"), 1);
        assert_eq!(result.amount, dec("0"));
        assert_eq!(result.audit_step.reasoning, "No leave days");
    }

    #[test]
    fn test_leave_deduction_zero_working_days() {
        let result = calculate_leave_deduction(dec("44000"), 0, dec("3"), 1);
        assert_eq!(result.amount, dec("0"));
    }

    // ==========================================================================
    // Insurance
    // ==========================================================================

    #[test]
    fn test_insurance_is_zero() {
        let result = calculate_insurance(11);
        assert_eq!(result.amount, dec("0"));
        assert_eq!(result.audit_step.step_number, 11);
        assert_eq!(result.audit_step.rule_id, "insurance");
    }
}
