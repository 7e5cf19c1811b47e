//! Commerce Ledger Transaction Core
//! # Overview
//!
//! This library implements the invariant-enforcing state-transition logic
//! of a permissioned commerce ledger: account transfers and payments,
//! lottery ticket sales and draws, capacity-bounded trip enrollment,
//! exclusive date-range rentals, and per-day seat pools.
//!
//! The ordering/consensus substrate, identity management, and event
//! delivery transport are external collaborators. The substrate invokes
//! [`core::engine::CommerceEngine::process`] once per ordered transaction;
//! each operation resolves its assets from the [`store::AssetStore`],
//! validates every invariant against the point-in-time read, and issues
//! mutations as its final step, so a version conflict aborts with no
//! partial effect recorded.
//!
//! # Architecture
//!
//! - [`types`] - Asset and request records (Account, Lottery, Trip, ...)
//! - [`store`] - The versioned asset-store contract and an in-memory
//!   reference implementation
//! - [`events`] - The fire-and-forget notification seam
//! - [`config`] - Engine configuration
//! - [`core`] - Business logic components:
//!   - [`core::accounts`] - Transfers with a family-exempt fee, top-ups,
//!     payments
//!   - [`core::lottery`] - Capped ticket sales and draws without
//!     replacement
//!   - [`core::trips`] - Headcount-bounded enrollment
//!   - [`core::rentals`] - Exclusive date-range reservations
//!   - [`core::seating`] - Per-day seat pools
//!   - [`core::engine`] - Request routing over all of the above
//!
//! # Concurrency
//!
//! There are no locks, timers, or retries in the core. Conflict detection
//! is delegated to the store's optimistic versioning: a stale write fails
//! `ConcurrentModification` and the caller retries the whole request
//! against a fresh read. Lottery randomness is injected so draws are
//! reproducible under a seeded generator.

// Module declarations
pub mod config;
pub mod core;
pub mod events;
pub mod store;
pub mod types;

pub use config::LedgerConfig;
pub use self::core::{
    AccountEngine, CommerceEngine, LotteryEngine, RentalEngine, SeatingEngine, TripEngine,
};
pub use events::{EventChannel, EventRecord, NullEventChannel, TokioEventChannel};
pub use store::{Asset, AssetKind, AssetStore, MemoryStore, Versioned};
pub use types::{
    Account, AccountId, CustomerId, LedgerError, Lottery, LotteryId, LotteryTicket, RentalUnit,
    ReservationId, ResourceStatus, Restaurant, RestaurantId, Result, SeatReservation, SeatingDay,
    TicketId, TransactionRequest, Trip, TripId, UnitId, UnitReservation,
};
