//! Single-amount calculation results.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// A calculated pay component together with the audit step that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentAmount {
    /// The calculated amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}
