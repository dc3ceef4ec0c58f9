//! Variable pay entry model.
//!
//! Variable pay covers bonuses, incentives and commissions recorded against
//! an employee for a payroll month. Only approved entries are paid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Approval state of a variable pay entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    /// Awaiting approval; not paid.
    Pending,
    /// Approved; paid in this period.
    Approved,
    /// Rejected; never paid.
    Rejected,
}

/// The kind of variable pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariablePayType {
    /// One-off bonus. Reported separately as `bonus` on the result.
    Bonus,
    /// Performance incentive.
    Incentive,
    /// Sales commission.
    Commission,
    /// Anything else.
    #[default]
    Other,
}

/// A variable pay amount for the payroll period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{ApprovalStatus, VariablePayEntry, VariablePayType};
/// use rust_decimal::Decimal;
///
/// let entry = VariablePayEntry {
///     amount: Decimal::new(5000, 0),
///     status: ApprovalStatus::Approved,
///     pay_type: VariablePayType::Bonus,
///     description: Some("Quarterly bonus".to_string()),
/// };
/// assert!(entry.is_payable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariablePayEntry {
    /// The amount of the entry.
    pub amount: Decimal,
    /// The approval status.
    pub status: ApprovalStatus,
    /// The kind of variable pay.
    #[serde(default)]
    pub pay_type: VariablePayType,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl VariablePayEntry {
    /// Returns true if the entry contributes to pay.
    pub fn is_payable(&self) -> bool {
        self.status == ApprovalStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(status: ApprovalStatus) -> VariablePayEntry {
        VariablePayEntry {
            amount: Decimal::new(1000, 0),
            status,
            pay_type: VariablePayType::Incentive,
            description: None,
        }
    }

    #[test]
    fn test_only_approved_is_payable() {
        assert!(entry(ApprovalStatus::Approved).is_payable());
        assert!(!entry(ApprovalStatus::Pending).is_payable());
        assert!(!entry(ApprovalStatus::Rejected).is_payable());
    }

    #[test]
    fn test_deserialize_defaults_pay_type_to_other() {
        let json = r#"{ "amount": "2500.50", "status": "PENDING" }"#;
        let e: VariablePayEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.pay_type, VariablePayType::Other);
        assert_eq!(e.amount, Decimal::new(250050, 2));
        assert_eq!(e.status, ApprovalStatus::Pending);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ApprovalStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
        assert_eq!(
            serde_json::to_string(&VariablePayType::Commission).unwrap(),
            "\"COMMISSION\""
        );
    }
}
