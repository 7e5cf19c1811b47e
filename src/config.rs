//! Configuration for the commerce ledger engines
//!
//! Passed by value into the engines that need it; there is no global
//! state and no environment lookup inside the library.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Fixed surcharge on transfers outside the sender's family group
    ///
    /// The fee is destroyed, credited to no account.
    pub transfer_fee: Decimal,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            transfer_fee: Decimal::new(5, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fee_is_five_units() {
        let config = LedgerConfig::default();
        assert_eq!(config.transfer_fee, Decimal::new(5, 0));
    }
}
