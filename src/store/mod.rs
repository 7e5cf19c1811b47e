//! Asset store contract
//!
//! The ordering substrate durably commits state; the engines only see it
//! through this contract: versioned `get`, id-unique `add`, and
//! optimistically concurrent `update`. Every engine operation resolves its
//! assets from a store handle passed in explicitly, validates against the
//! point-in-time read, and issues mutations as its final step, so a
//! version conflict aborts with no partial effect recorded.

mod memory;

pub use memory::MemoryStore;

use crate::types::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registries the store partitions assets into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Ledger accounts
    Account,
    /// Lotteries
    Lottery,
    /// Sold lottery tickets
    LotteryTicket,
    /// Capacity-bounded trips/events
    Trip,
    /// Rentable units
    RentalUnit,
    /// Date-range reservations on rentable units
    UnitReservation,
    /// Seat-limited restaurants
    Restaurant,
    /// Per-date seat buckets
    SeatingDay,
    /// Seat reservations inside a bucket
    SeatReservation,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Account => "account",
            AssetKind::Lottery => "lottery",
            AssetKind::LotteryTicket => "lottery ticket",
            AssetKind::Trip => "trip",
            AssetKind::RentalUnit => "rental unit",
            AssetKind::UnitReservation => "unit reservation",
            AssetKind::Restaurant => "restaurant",
            AssetKind::SeatingDay => "seating day",
            AssetKind::SeatReservation => "seat reservation",
        };
        write!(f, "{}", name)
    }
}

/// A record the store can hold
///
/// Each asset type declares its registry and exposes its id; the store
/// never inspects anything else.
pub trait Asset: Clone + Send + Sync + 'static {
    /// Registry this asset type lives in
    const KIND: AssetKind;

    /// Unique id within the registry
    fn id(&self) -> &str;
}

/// A point-in-time read of an asset
///
/// Carries the version observed at read time; `update` succeeds only if
/// the stored version still matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<A> {
    /// Version of the asset when it was read
    pub version: u64,

    /// The asset state as read
    pub asset: A,
}

/// The versioned key-type registry contract
///
/// Handles are cheap to clone and share one underlying registry, which is
/// how an explicit store handle is passed into every engine. All three
/// operations are total: a miss, an id collision, or a stale write is an
/// error value, never a panic.
pub trait AssetStore: Clone + Send + Sync + 'static {
    /// Read the current state and version of an asset
    ///
    /// Fails `NotFound` if no asset with this id exists in the type's
    /// registry.
    fn get<A: Asset>(&self, id: &str) -> Result<Versioned<A>>;

    /// Persist a new asset
    ///
    /// Fails `DuplicateId` if the id is already in use in the type's
    /// registry.
    fn add<A: Asset>(&self, asset: A) -> Result<()>;

    /// Write back a previously read asset
    ///
    /// Fails `ConcurrentModification` if the stored version changed since
    /// this read was taken, and `NotFound` if the asset no longer exists.
    fn update<A: Asset>(&self, read: Versioned<A>) -> Result<()>;
}
