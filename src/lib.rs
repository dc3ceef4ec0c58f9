//! Payroll Engine
//!
//! This crate calculates monthly payroll for salaried employees: working
//! days, attendance, basic salary pro-ration, house rent allowance, provident
//! fund, employee state insurance, overtime, variable pay, leave deductions
//! and income tax. Every calculation carries an audit trace of the rules it
//! applied, and results can be validated and summarized across employees.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod processing;
