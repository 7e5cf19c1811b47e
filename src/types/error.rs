//! Error types for the commerce ledger
//!
//! This module defines every failure a transaction can be rejected with.
//! Errors carry the context needed to diagnose the rejection and are the
//! outcome of the whole transaction: validation happens before any
//! mutation, so a returned error means no state was changed by this
//! request.
//!
//! # Error Categories
//!
//! - **Funds errors**: insufficient balance for a transfer, payment, or
//!   ticket purchase
//! - **Lifecycle errors**: operations against a resource that is no longer
//!   open
//! - **Capacity errors**: participant caps, ticket caps, seat pools
//! - **Booking errors**: interval conflicts, duplicate reservations
//! - **Store errors**: id collisions and optimistic-concurrency conflicts
//!   surfaced by the asset store

use crate::store::AssetKind;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Main error type for the commerce ledger
///
/// Each variant includes the asset ids and amounts involved so a caller
/// can log or surface the rejection without re-reading state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Balance too low for a debit (transfer, payment, or ticket purchase)
    ///
    /// For transfers the requested amount includes the fee when one
    /// applies.
    #[error("Insufficient funds for account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account being debited
        account: String,
        /// Balance at the time of the read
        balance: Decimal,
        /// Amount the operation needed
        requested: Decimal,
    },

    /// Operation against a lottery, trip, or event that is not open
    #[error("{resource} is not open")]
    NotOpen {
        /// Id of the closed resource
        resource: String,
    },

    /// Customer is already enrolled in the capacity resource
    #[error("Customer {customer} is already enrolled in {trip}")]
    AlreadyEnrolled {
        /// Id of the trip/event
        trip: String,
        /// Customer attempting to enroll twice
        customer: String,
    },

    /// A referenced asset, participant, or reservation does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// What was looked up (e.g. "account", "participant", "reservation")
        entity: String,
        /// The id that missed
        id: String,
    },

    /// Per-user ticket cap reached for a lottery
    #[error("Ticket limit {limit} reached for customer {customer} in lottery {lottery}")]
    LimitExceeded {
        /// Lottery being bought into
        lottery: String,
        /// Customer at the cap
        customer: String,
        /// The configured tickets-per-user cap
        limit: u32,
    },

    /// Not enough seats left in the day's pool
    #[error("Sold out for {restaurant} on {date}: available {available}, requested {requested}")]
    SoldOut {
        /// Restaurant id
        restaurant: String,
        /// Calendar date of the booking
        date: NaiveDate,
        /// Seats remaining in the pool
        available: u32,
        /// Seats the booking asked for
        requested: u32,
    },

    /// Customer already holds a reservation for this resource and date
    #[error("Customer {customer} already has a reservation for {restaurant} on {date}")]
    DuplicateReservation {
        /// Restaurant id
        restaurant: String,
        /// Calendar date of the booking
        date: NaiveDate,
        /// Customer with the existing reservation
        customer: String,
    },

    /// Date range conflicts with an existing reservation or is inverted
    ///
    /// Overlap, containment, and boundary-touching are all rejected: no
    /// two reservations on a unit may share or cross any date.
    #[error("Invalid interval {start} to {end} for unit {unit}")]
    InvalidInterval {
        /// Rentable unit id
        unit: String,
        /// Requested start date (inclusive)
        start: NaiveDate,
        /// Requested end date (inclusive)
        end: NaiveDate,
    },

    /// Non-positive amount or seat count
    #[error("Invalid quantity {quantity} for {operation}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: Decimal,
        /// Operation that rejected it
        operation: String,
    },

    /// Draw asked for more winners than tickets sold
    #[error("Lottery {lottery} holds {tickets} tickets, cannot draw {requested} winners")]
    InsufficientPool {
        /// Lottery being drawn
        lottery: String,
        /// Tickets in the pool
        tickets: usize,
        /// Winners requested
        requested: usize,
    },

    /// An asset with this id already exists in the registry
    #[error("Duplicate id {id} in the {kind} registry")]
    DuplicateId {
        /// Registry the collision happened in
        kind: AssetKind,
        /// The colliding id
        id: String,
    },

    /// The asset's version changed between the read and the write
    ///
    /// The caller may retry by resubmitting the full request against a
    /// fresh read; nothing was recorded for this transaction.
    #[error("Concurrent modification of {kind} {id}")]
    ConcurrentModification {
        /// Registry of the contested asset
        kind: AssetKind,
        /// Id of the contested asset
        id: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create a NotOpen error
    pub fn not_open(resource: &str) -> Self {
        LedgerError::NotOpen {
            resource: resource.to_string(),
        }
    }

    /// Create an AlreadyEnrolled error
    pub fn already_enrolled(trip: &str, customer: &str) -> Self {
        LedgerError::AlreadyEnrolled {
            trip: trip.to_string(),
            customer: customer.to_string(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        LedgerError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a LimitExceeded error
    pub fn limit_exceeded(lottery: &str, customer: &str, limit: u32) -> Self {
        LedgerError::LimitExceeded {
            lottery: lottery.to_string(),
            customer: customer.to_string(),
            limit,
        }
    }

    /// Create a SoldOut error
    pub fn sold_out(restaurant: &str, date: NaiveDate, available: u32, requested: u32) -> Self {
        LedgerError::SoldOut {
            restaurant: restaurant.to_string(),
            date,
            available,
            requested,
        }
    }

    /// Create a DuplicateReservation error
    pub fn duplicate_reservation(restaurant: &str, date: NaiveDate, customer: &str) -> Self {
        LedgerError::DuplicateReservation {
            restaurant: restaurant.to_string(),
            date,
            customer: customer.to_string(),
        }
    }

    /// Create an InvalidInterval error
    pub fn invalid_interval(unit: &str, start: NaiveDate, end: NaiveDate) -> Self {
        LedgerError::InvalidInterval {
            unit: unit.to_string(),
            start,
            end,
        }
    }

    /// Create an InvalidQuantity error
    pub fn invalid_quantity(quantity: Decimal, operation: &str) -> Self {
        LedgerError::InvalidQuantity {
            quantity,
            operation: operation.to_string(),
        }
    }

    /// Create an InsufficientPool error
    pub fn insufficient_pool(lottery: &str, tickets: usize, requested: usize) -> Self {
        LedgerError::InsufficientPool {
            lottery: lottery.to_string(),
            tickets,
            requested,
        }
    }

    /// Create a DuplicateId error
    pub fn duplicate_id(kind: AssetKind, id: &str) -> Self {
        LedgerError::DuplicateId {
            kind,
            id: id.to_string(),
        }
    }

    /// Create a ConcurrentModification error
    pub fn concurrent_modification(kind: AssetKind, id: &str) -> Self {
        LedgerError::ConcurrentModification {
            kind,
            id: id.to_string(),
        }
    }
}
