//! Ledger account engine
//!
//! Balance transfers with a family-exempt fee, unconditional top-ups, and
//! debits that notify an external payment channel. Every operation
//! resolves its accounts from the store, validates against the
//! point-in-time read, and issues updates as its final step.

use crate::config::LedgerConfig;
use crate::events::{EventChannel, EventRecord};
use crate::store::AssetStore;
use crate::types::error::{LedgerError, Result};
use crate::types::Account;
use rust_decimal::Decimal;
use tracing::debug;

/// Engine for balance transfers, top-ups, and payments
pub struct AccountEngine<S: AssetStore, E: EventChannel> {
    store: S,
    events: E,
    config: LedgerConfig,
}

impl<S: AssetStore, E: EventChannel> AccountEngine<S, E> {
    /// Create an engine over the given store and event channel
    pub fn new(store: S, events: E, config: LedgerConfig) -> Self {
        AccountEngine {
            store,
            events,
            config,
        }
    }

    /// Move `amount` from one account to another
    ///
    /// A fixed surcharge is charged to the sender unless the receiving
    /// account is in the sender's family group; the fee is destroyed,
    /// credited to no one. The sufficiency check includes the fee, so a
    /// successful transfer can never drive the sender's balance negative.
    ///
    /// # Errors
    ///
    /// - `InvalidQuantity` if `amount <= 0`
    /// - `NotFound` if either account does not exist
    /// - `InsufficientFunds` if the sender cannot cover amount plus fee
    /// - `ConcurrentModification` if either account changed since the read
    pub fn transfer(&self, from_id: &str, to_id: &str, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_quantity(amount, "transfer"));
        }

        let mut from = self.store.get::<Account>(from_id)?;
        let mut to = self.store.get::<Account>(to_id)?;

        let fee = if from.asset.is_family(to_id) {
            debug!(from = from_id, to = to_id, "fee waived for family transfer");
            Decimal::ZERO
        } else {
            self.config.transfer_fee
        };

        let total = amount + fee;
        if from.asset.balance < total {
            return Err(LedgerError::insufficient_funds(
                from_id,
                from.asset.balance,
                total,
            ));
        }

        // The fee is destroyed: debited from the sender, credited nowhere
        from.asset.balance -= total;
        to.asset.balance += amount;

        self.store.update(from)?;
        self.store.update(to)?;

        debug!(from = from_id, to = to_id, %amount, %fee, "transfer committed");
        Ok(())
    }

    /// Credit an account unconditionally
    ///
    /// # Errors
    ///
    /// - `InvalidQuantity` if `amount <= 0`
    /// - `NotFound` if the account does not exist
    /// - `ConcurrentModification` if the account changed since the read
    pub fn top_up(&self, to_id: &str, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_quantity(amount, "top-up"));
        }

        let mut to = self.store.get::<Account>(to_id)?;
        to.asset.balance += amount;
        self.store.update(to)?;

        debug!(to = to_id, %amount, "top-up committed");
        Ok(())
    }

    /// Debit an account and notify the payment channel
    ///
    /// The notification is fire-and-forget: it is emitted before the
    /// update is issued, and a delivery miss never rolls back the debit.
    ///
    /// # Errors
    ///
    /// - `InvalidQuantity` if `amount <= 0`
    /// - `NotFound` if the account does not exist
    /// - `InsufficientFunds` if the balance cannot cover the amount
    /// - `ConcurrentModification` if the account changed since the read
    pub fn payment(&self, from_id: &str, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_quantity(amount, "payment"));
        }

        let mut from = self.store.get::<Account>(from_id)?;
        if from.asset.balance < amount {
            return Err(LedgerError::insufficient_funds(
                from_id,
                from.asset.balance,
                amount,
            ));
        }

        from.asset.balance -= amount;

        self.events.emit(EventRecord::PaymentNotification {
            account: from_id.to_string(),
            amount,
        });

        self.store.update(from)?;

        debug!(from = from_id, %amount, "payment committed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{NullEventChannel, TokioEventChannel};
    use crate::store::MemoryStore;

    fn engine(store: &MemoryStore) -> AccountEngine<MemoryStore, NullEventChannel> {
        AccountEngine::new(store.clone(), NullEventChannel, LedgerConfig::default())
    }

    fn seed_account(store: &MemoryStore, id: &str, balance: i64) {
        let mut account = Account::new(id, format!("cust-{}", id));
        account.balance = Decimal::new(balance, 0);
        store.add(account).unwrap();
    }

    fn balance(store: &MemoryStore, id: &str) -> Decimal {
        store.get::<Account>(id).unwrap().asset.balance
    }

    #[test]
    fn test_transfer_charges_fee_outside_family() {
        let store = MemoryStore::new();
        seed_account(&store, "acct-x", 100);
        seed_account(&store, "acct-y", 100);

        engine(&store)
            .transfer("acct-x", "acct-y", Decimal::new(20, 0))
            .unwrap();

        assert_eq!(balance(&store, "acct-x"), Decimal::new(75, 0));
        assert_eq!(balance(&store, "acct-y"), Decimal::new(120, 0));
    }

    #[test]
    fn test_transfer_waives_fee_for_family() {
        let store = MemoryStore::new();
        let mut sender = Account::new("acct-x", "cust-x");
        sender.balance = Decimal::new(100, 0);
        sender.family.push("acct-y".to_string());
        store.add(sender).unwrap();
        seed_account(&store, "acct-y", 100);

        engine(&store)
            .transfer("acct-x", "acct-y", Decimal::new(20, 0))
            .unwrap();

        assert_eq!(balance(&store, "acct-x"), Decimal::new(80, 0));
        assert_eq!(balance(&store, "acct-y"), Decimal::new(120, 0));
    }

    #[test]
    fn test_transfer_rejects_when_fee_makes_balance_insufficient() {
        let store = MemoryStore::new();
        seed_account(&store, "acct-x", 22);
        seed_account(&store, "acct-y", 0);

        // 20 would pass a fee-blind check, but 20 + 5 exceeds 22
        let result = engine(&store).transfer("acct-x", "acct-y", Decimal::new(20, 0));

        assert_eq!(
            result.unwrap_err(),
            LedgerError::insufficient_funds("acct-x", Decimal::new(22, 0), Decimal::new(25, 0))
        );
        assert_eq!(balance(&store, "acct-x"), Decimal::new(22, 0));
        assert_eq!(balance(&store, "acct-y"), Decimal::ZERO);
    }

    #[test]
    fn test_transfer_with_insufficient_funds_leaves_both_untouched() {
        let store = MemoryStore::new();
        seed_account(&store, "acct-x", 10);
        seed_account(&store, "acct-y", 10);

        let result = engine(&store).transfer("acct-x", "acct-y", Decimal::new(50, 0));

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InsufficientFunds { .. }
        ));
        assert_eq!(balance(&store, "acct-x"), Decimal::new(10, 0));
        assert_eq!(balance(&store, "acct-y"), Decimal::new(10, 0));
    }

    #[test]
    fn test_transfer_rejects_non_positive_amounts() {
        let store = MemoryStore::new();
        seed_account(&store, "acct-x", 100);
        seed_account(&store, "acct-y", 100);

        for amount in [Decimal::ZERO, Decimal::new(-5, 0)] {
            let result = engine(&store).transfer("acct-x", "acct-y", amount);
            assert_eq!(
                result.unwrap_err(),
                LedgerError::invalid_quantity(amount, "transfer")
            );
        }
    }

    #[test]
    fn test_transfer_to_missing_account_fails_before_any_debit() {
        let store = MemoryStore::new();
        seed_account(&store, "acct-x", 100);

        let result = engine(&store).transfer("acct-x", "acct-9", Decimal::new(20, 0));

        assert_eq!(
            result.unwrap_err(),
            LedgerError::not_found("account", "acct-9")
        );
        assert_eq!(balance(&store, "acct-x"), Decimal::new(100, 0));
    }

    #[test]
    fn test_top_up_credits_account() {
        let store = MemoryStore::new();
        seed_account(&store, "acct-x", 10);

        engine(&store).top_up("acct-x", Decimal::new(40, 0)).unwrap();

        assert_eq!(balance(&store, "acct-x"), Decimal::new(50, 0));
    }

    #[test]
    fn test_top_up_rejects_non_positive_amounts() {
        let store = MemoryStore::new();
        seed_account(&store, "acct-x", 10);

        let result = engine(&store).top_up("acct-x", Decimal::ZERO);
        assert_eq!(
            result.unwrap_err(),
            LedgerError::invalid_quantity(Decimal::ZERO, "top-up")
        );
    }

    #[test]
    fn test_payment_debits_and_notifies() {
        let store = MemoryStore::new();
        seed_account(&store, "acct-x", 100);

        let (channel, mut receiver) = TokioEventChannel::channel();
        let engine = AccountEngine::new(store.clone(), channel, LedgerConfig::default());

        engine.payment("acct-x", Decimal::new(30, 0)).unwrap();

        assert_eq!(balance(&store, "acct-x"), Decimal::new(70, 0));
        assert_eq!(
            receiver.try_recv().unwrap(),
            EventRecord::PaymentNotification {
                account: "acct-x".to_string(),
                amount: Decimal::new(30, 0),
            }
        );
    }

    #[test]
    fn test_payment_with_insufficient_funds_emits_nothing() {
        let store = MemoryStore::new();
        seed_account(&store, "acct-x", 10);

        let (channel, mut receiver) = TokioEventChannel::channel();
        let engine = AccountEngine::new(store.clone(), channel, LedgerConfig::default());

        let result = engine.payment("acct-x", Decimal::new(50, 0));

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InsufficientFunds { .. }
        ));
        assert_eq!(balance(&store, "acct-x"), Decimal::new(10, 0));
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_payment_survives_dropped_receiver() {
        let store = MemoryStore::new();
        seed_account(&store, "acct-x", 100);

        let (channel, receiver) = TokioEventChannel::channel();
        drop(receiver);
        let engine = AccountEngine::new(store.clone(), channel, LedgerConfig::default());

        // the debit must commit even though nobody is listening
        engine.payment("acct-x", Decimal::new(30, 0)).unwrap();
        assert_eq!(balance(&store, "acct-x"), Decimal::new(70, 0));
    }
}
