//! Configuration types for payroll calculation.
//!
//! This module contains the named calculation constants and the strongly-typed
//! configuration structures that are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// House rent allowance as a fraction of basic salary (40%).
pub const HRA_RATE: Decimal = Decimal::from_parts(40, 0, 0, false, 2);

/// Provident fund contribution as a fraction of basic salary (12%).
pub const PF_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Statutory monthly cap on the provident fund contribution.
pub const MAX_PF_AMOUNT: Decimal = Decimal::from_parts(1800, 0, 0, false, 0);

/// Employee state insurance contribution as a fraction of basic salary (0.75%).
pub const ESI_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 4);

/// Basic salary above which the employee is exempt from ESI.
pub const ESI_WAGE_CEILING: Decimal = Decimal::from_parts(21000, 0, 0, false, 0);

/// Hours in a standard working day; worked time beyond this is overtime.
pub const STANDARD_DAILY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Overtime pay multiplier applied to the hourly rate.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Number of months used to annualize a monthly gross for bracket lookup.
pub const TAX_ANNUALIZATION_FACTOR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Largest accepted monetary input (basic salary, allowances, deductions,
/// variable pay amounts). Keeps every intermediate within `Decimal` range.
pub const MAX_MONETARY_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Statutory rates and thresholds, as loaded from `statutory.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// HRA as a fraction of basic salary.
    pub hra_rate: Decimal,
    /// PF as a fraction of basic salary.
    pub pf_rate: Decimal,
    /// Monthly PF cap.
    pub max_pf_amount: Decimal,
    /// ESI as a fraction of basic salary.
    pub esi_rate: Decimal,
    /// ESI applies only when basic salary is at or below this amount.
    pub esi_wage_ceiling: Decimal,
    /// Hours in a standard working day.
    pub standard_daily_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            hra_rate: HRA_RATE,
            pf_rate: PF_RATE,
            max_pf_amount: MAX_PF_AMOUNT,
            esi_rate: ESI_RATE,
            esi_wage_ceiling: ESI_WAGE_CEILING,
            standard_daily_hours: STANDARD_DAILY_HOURS,
            overtime_multiplier: OVERTIME_MULTIPLIER,
        }
    }
}

/// A single income tax bracket.
///
/// Tax for an amount falling in this slab is
/// `base_tax + (amount - lower_limit) * rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    /// The amount at which this slab starts (exclusive, except for the first slab).
    pub lower_limit: Decimal,
    /// The inclusive upper bound of this slab; `None` for the open-ended top slab.
    #[serde(default)]
    pub upper_limit: Option<Decimal>,
    /// Tax accumulated by all lower slabs.
    pub base_tax: Decimal,
    /// Marginal rate within this slab.
    pub rate: Decimal,
}

impl TaxSlab {
    /// Returns true if `amount` falls within this slab's upper bound.
    pub fn covers(&self, amount: Decimal) -> bool {
        self.upper_limit.is_none_or(|upper| amount <= upper)
    }
}

/// Tax slab configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSlabsConfig {
    /// The slabs, lowest first.
    pub slabs: Vec<TaxSlab>,
}

/// Returns the default slab table (annual amounts).
///
/// | Annual amount          | Tax                                  |
/// |------------------------|--------------------------------------|
/// | up to 2,50,000         | nil                                  |
/// | up to 5,00,000         | 5% above 2,50,000                    |
/// | up to 10,00,000        | 12,500 + 20% above 5,00,000          |
/// | above 10,00,000        | 1,12,500 + 30% above 10,00,000       |
pub fn default_tax_slabs() -> Vec<TaxSlab> {
    vec![
        TaxSlab {
            lower_limit: Decimal::ZERO,
            upper_limit: Some(Decimal::new(250_000, 0)),
            base_tax: Decimal::ZERO,
            rate: Decimal::ZERO,
        },
        TaxSlab {
            lower_limit: Decimal::new(250_000, 0),
            upper_limit: Some(Decimal::new(500_000, 0)),
            base_tax: Decimal::ZERO,
            rate: Decimal::new(5, 2),
        },
        TaxSlab {
            lower_limit: Decimal::new(500_000, 0),
            upper_limit: Some(Decimal::new(1_000_000, 0)),
            base_tax: Decimal::new(12_500, 0),
            rate: Decimal::new(20, 2),
        },
        TaxSlab {
            lower_limit: Decimal::new(1_000_000, 0),
            upper_limit: None,
            base_tax: Decimal::new(112_500, 0),
            rate: Decimal::new(30, 2),
        },
    ]
}

/// The complete payroll configuration.
///
/// `Default` yields the module-level constants and [`default_tax_slabs`].
/// Fields are public so tests and callers can override individual values.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{PayrollConfig, MAX_PF_AMOUNT};
/// use rust_decimal::Decimal;
///
/// let mut config = PayrollConfig::default();
/// assert_eq!(config.statutory.max_pf_amount, MAX_PF_AMOUNT);
///
/// config.statutory.max_pf_amount = Decimal::new(2500, 0);
/// assert_eq!(config.statutory.max_pf_amount, Decimal::new(2500, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Statutory rates and thresholds.
    pub statutory: StatutoryRates,
    /// Income tax slabs, lowest first, amounts in annual terms.
    pub tax_slabs: Vec<TaxSlab>,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            statutory: StatutoryRates::default(),
            tax_slabs: default_tax_slabs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_constants_have_expected_values() {
        assert_eq!(HRA_RATE, dec("0.40"));
        assert_eq!(PF_RATE, dec("0.12"));
        assert_eq!(MAX_PF_AMOUNT, dec("1800"));
        assert_eq!(ESI_RATE, dec("0.0075"));
        assert_eq!(ESI_WAGE_CEILING, dec("21000"));
        assert_eq!(STANDARD_DAILY_HOURS, dec("8"));
        assert_eq!(OVERTIME_MULTIPLIER, dec("1.5"));
        assert_eq!(TAX_ANNUALIZATION_FACTOR, dec("12"));
        assert_eq!(MAX_MONETARY_AMOUNT, dec("1000000000000000"));
    }

    #[test]
    fn test_default_slabs_are_contiguous() {
        let slabs = default_tax_slabs();
        for pair in slabs.windows(2) {
            assert_eq!(pair[0].upper_limit, Some(pair[1].lower_limit));
        }
        assert!(slabs.last().unwrap().upper_limit.is_none());
    }

    #[test]
    fn test_slab_covers_inclusive_upper_bound() {
        let slab = &default_tax_slabs()[0];
        assert!(slab.covers(dec("250000")));
        assert!(!slab.covers(dec("250000.01")));
    }

    #[test]
    fn test_open_ended_slab_covers_everything() {
        let slab = &default_tax_slabs()[3];
        assert!(slab.covers(dec("999999999")));
    }

    #[test]
    fn test_tax_slab_deserializes_without_upper_limit() {
        let yaml = r#"
lower_limit: "1000000"
base_tax: "112500"
rate: "0.30"
"#;
        let slab: TaxSlab = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(slab.upper_limit, None);
        assert_eq!(slab.rate, dec("0.30"));
    }
}
