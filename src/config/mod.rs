//! Configuration loading and management for the Payroll Engine.
//!
//! This module holds the named calculation constants and provides
//! functionality to load statutory rates and income tax slabs from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap().into_config();
//! println!("HRA rate: {}", config.statutory.hra_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ESI_RATE, ESI_WAGE_CEILING, HRA_RATE, MAX_MONETARY_AMOUNT, MAX_PF_AMOUNT, OVERTIME_MULTIPLIER, PF_RATE,
    PayrollConfig, STANDARD_DAILY_HOURS, StatutoryRates, TAX_ANNUALIZATION_FACTOR, TaxSlab,
    TaxSlabsConfig, default_tax_slabs,
};
