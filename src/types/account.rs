//! Account-related types for the commerce ledger
//!
//! This module defines the Account asset mutated by the Ledger Account
//! Engine. Accounts are created externally (identity management is an
//! external collaborator) and never deleted.

use crate::store::{Asset, AssetKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account identifier
pub type AccountId = String;

/// Customer identifier (the participant who owns an account)
pub type CustomerId = String;

/// Ledger account state
///
/// The balance is kept non-negative by the engines: every debit is
/// validated against the fee-inclusive total before any mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account id
    pub id: AccountId,

    /// Current balance
    pub balance: Decimal,

    /// Customer who owns this account
    pub owner: CustomerId,

    /// Family group: account ids exempt from this sender's transfer fee
    pub family: Vec<AccountId>,
}

impl Account {
    /// Create an account with a zero balance and an empty family group
    pub fn new(id: impl Into<AccountId>, owner: impl Into<CustomerId>) -> Self {
        Account {
            id: id.into(),
            balance: Decimal::ZERO,
            owner: owner.into(),
            family: Vec::new(),
        }
    }

    /// Whether transfers to `account` are fee-exempt for this sender
    ///
    /// Membership is a linear scan; family groups are small bounded
    /// collections.
    pub fn is_family(&self, account: &str) -> bool {
        self.family.iter().any(|member| member == account)
    }
}

impl Asset for Account {
    const KIND: AssetKind = AssetKind::Account;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_starts_empty() {
        let account = Account::new("acct-1", "cust-1");
        assert_eq!(account.balance, Decimal::ZERO);
        assert_eq!(account.owner, "cust-1");
        assert!(account.family.is_empty());
    }

    #[test]
    fn test_is_family_scans_group() {
        let mut account = Account::new("acct-1", "cust-1");
        account.family.push("acct-2".to_string());

        assert!(account.is_family("acct-2"));
        assert!(!account.is_family("acct-3"));
    }
}
