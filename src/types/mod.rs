//! Types module
//!
//! Contains the asset and request records shared across the engines.
//! This module organizes types into logical submodules:
//! - `account`: ledger accounts and customer/account ids
//! - `lottery`: lotteries and sold tickets
//! - `trip`: capacity-bounded trips/events
//! - `rental`: rentable units and date-range reservations
//! - `seating`: restaurants and per-day seat buckets
//! - `status`: the shared open/close lifecycle
//! - `request`: the transaction request schema
//! - `error`: error types for the commerce ledger

pub mod account;
pub mod error;
pub mod lottery;
pub mod rental;
pub mod request;
pub mod seating;
pub mod status;
pub mod trip;

pub use account::{Account, AccountId, CustomerId};
pub use error::{LedgerError, Result};
pub use lottery::{Lottery, LotteryId, LotteryTicket, TicketId};
pub use rental::{RentalUnit, ReservationId, UnitId, UnitReservation};
pub use request::TransactionRequest;
pub use seating::{Restaurant, RestaurantId, SeatReservation, SeatingDay};
pub use status::ResourceStatus;
pub use trip::{Trip, TripId};
