//! In-memory reference implementation of the asset store
//!
//! Backed by a sharded concurrent map so multiple substrate threads can
//! submit transactions against the same registry. Each entry carries a
//! monotonic version; `update` is a per-entry compare-and-bump, which is
//! all the optimistic concurrency the contract requires.

use super::{Asset, AssetKind, AssetStore, Versioned};
use crate::types::error::{LedgerError, Result};
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

/// One stored asset: its version and the type-erased state
struct Record {
    version: u64,
    data: Arc<dyn Any + Send + Sync>,
}

/// Shared in-memory asset registry
///
/// Cloning a `MemoryStore` clones a handle to the same underlying
/// registry; engines each hold their own handle.
#[derive(Clone, Default)]
pub struct MemoryStore {
    registries: Arc<DashMap<(AssetKind, String), Record>>,
}

impl MemoryStore {
    /// Create an empty registry
    pub fn new() -> Self {
        MemoryStore {
            registries: Arc::new(DashMap::new()),
        }
    }
}

impl AssetStore for MemoryStore {
    fn get<A: Asset>(&self, id: &str) -> Result<Versioned<A>> {
        let entry = self
            .registries
            .get(&(A::KIND, id.to_string()))
            .ok_or_else(|| LedgerError::not_found(A::KIND.to_string(), id))?;

        // The registry is keyed by kind, so the stored type always matches
        let asset = entry
            .data
            .downcast_ref::<A>()
            .ok_or_else(|| LedgerError::not_found(A::KIND.to_string(), id))?
            .clone();

        Ok(Versioned {
            version: entry.version,
            asset,
        })
    }

    fn add<A: Asset>(&self, asset: A) -> Result<()> {
        let key = (A::KIND, asset.id().to_string());
        let id = asset.id().to_string();

        // entry() holds the shard lock, so the occupancy check and the
        // insert are atomic with respect to concurrent adds
        let mut inserted = false;
        self.registries.entry(key).or_insert_with(|| {
            inserted = true;
            Record {
                version: 1,
                data: Arc::new(asset),
            }
        });

        if inserted {
            Ok(())
        } else {
            Err(LedgerError::duplicate_id(A::KIND, &id))
        }
    }

    fn update<A: Asset>(&self, read: Versioned<A>) -> Result<()> {
        let key = (A::KIND, read.asset.id().to_string());
        let mut entry = self
            .registries
            .get_mut(&key)
            .ok_or_else(|| LedgerError::not_found(A::KIND.to_string(), read.asset.id()))?;

        if entry.version != read.version {
            return Err(LedgerError::concurrent_modification(
                A::KIND,
                read.asset.id(),
            ));
        }

        entry.version += 1;
        entry.data = Arc::new(read.asset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;
    use rust_decimal::Decimal;

    #[test]
    fn test_get_missing_asset_fails_not_found() {
        let store = MemoryStore::new();
        let result = store.get::<Account>("acct-9");

        assert_eq!(
            result.unwrap_err(),
            LedgerError::not_found("account", "acct-9")
        );
    }

    #[test]
    fn test_add_then_get_round_trips() {
        let store = MemoryStore::new();
        let mut account = Account::new("acct-1", "cust-1");
        account.balance = Decimal::new(100, 0);

        store.add(account.clone()).unwrap();

        let read = store.get::<Account>("acct-1").unwrap();
        assert_eq!(read.version, 1);
        assert_eq!(read.asset, account);
    }

    #[test]
    fn test_add_duplicate_id_fails() {
        let store = MemoryStore::new();
        store.add(Account::new("acct-1", "cust-1")).unwrap();

        let result = store.add(Account::new("acct-1", "cust-2"));
        assert_eq!(
            result.unwrap_err(),
            LedgerError::duplicate_id(AssetKind::Account, "acct-1")
        );
    }

    #[test]
    fn test_update_bumps_version() {
        let store = MemoryStore::new();
        store.add(Account::new("acct-1", "cust-1")).unwrap();

        let mut read = store.get::<Account>("acct-1").unwrap();
        read.asset.balance = Decimal::new(50, 0);
        store.update(read).unwrap();

        let reread = store.get::<Account>("acct-1").unwrap();
        assert_eq!(reread.version, 2);
        assert_eq!(reread.asset.balance, Decimal::new(50, 0));
    }

    #[test]
    fn test_stale_update_fails_and_leaves_state_untouched() {
        let store = MemoryStore::new();
        store.add(Account::new("acct-1", "cust-1")).unwrap();

        let stale = store.get::<Account>("acct-1").unwrap();

        // A second reader wins the race
        let mut fresh = store.get::<Account>("acct-1").unwrap();
        fresh.asset.balance = Decimal::new(75, 0);
        store.update(fresh).unwrap();

        let mut conflicting = stale;
        conflicting.asset.balance = Decimal::new(10, 0);
        let result = store.update(conflicting);

        assert_eq!(
            result.unwrap_err(),
            LedgerError::concurrent_modification(AssetKind::Account, "acct-1")
        );

        // The winning write is still in place
        let read = store.get::<Account>("acct-1").unwrap();
        assert_eq!(read.asset.balance, Decimal::new(75, 0));
        assert_eq!(read.version, 2);
    }

    #[test]
    fn test_handles_share_one_registry() {
        let store = MemoryStore::new();
        let handle = store.clone();

        handle.add(Account::new("acct-1", "cust-1")).unwrap();

        assert!(store.get::<Account>("acct-1").is_ok());
    }

    #[test]
    fn test_registries_are_partitioned_by_kind() {
        let store = MemoryStore::new();
        store.add(Account::new("shared-id", "cust-1")).unwrap();

        // The same id is free in a different registry
        let result = store.add(crate::types::Trip::new("shared-id", 10));
        assert!(result.is_ok());
    }
}
