//! Transaction request schema
//!
//! One flat record per engine operation, wrapped in a tagged enum the
//! ordering substrate submits to [`crate::core::engine::CommerceEngine`].
//! Each variant names the referenced asset ids plus the operation's scalar
//! parameters; assets themselves are always resolved through the store.

use super::account::{AccountId, CustomerId};
use super::lottery::{LotteryId, TicketId};
use super::rental::{ReservationId, UnitId};
use super::seating::RestaurantId;
use super::trip::TripId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single transaction request, tagged by operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionRequest {
    /// Move `amount` between accounts; a fixed fee applies outside the
    /// sender's family group
    AccountTransfer {
        /// Account being debited
        from: AccountId,
        /// Account being credited
        to: AccountId,
        /// Amount to move (the fee is charged on top)
        amount: Decimal,
    },

    /// Unconditional credit
    TopUpAccount {
        /// Account being credited
        to: AccountId,
        /// Amount to credit
        amount: Decimal,
    },

    /// Debit with a fire-and-forget payment notification
    Payment {
        /// Account being debited
        from: AccountId,
        /// Amount to debit
        amount: Decimal,
    },

    /// Sell one lottery ticket to the buyer
    BuyTicket {
        /// Lottery being bought into
        lottery: LotteryId,
        /// Account paying for the ticket
        buyer: AccountId,
        /// Caller-supplied id for the new ticket
        ticket_id: TicketId,
    },

    /// Draw winners without replacement and close the lottery
    DrawLottery {
        /// Lottery being drawn
        lottery: LotteryId,
        /// Winners to pick from the ticket pool
        num_winners: usize,
    },

    /// Enroll a customer in a capacity-bounded trip/event
    Enroll {
        /// Trip being enrolled into
        trip: TripId,
        /// Customer enrolling
        customer: CustomerId,
    },

    /// Withdraw a customer from a still-open trip/event
    CancelEnrollment {
        /// Trip being cancelled from
        trip: TripId,
        /// Customer withdrawing
        customer: CustomerId,
    },

    /// Reserve a rentable unit for an inclusive date range
    BookUnit {
        /// Unit being reserved
        unit: UnitId,
        /// Customer holding the reservation
        customer: CustomerId,
        /// First reserved date (inclusive)
        start: NaiveDate,
        /// Last reserved date (inclusive)
        end: NaiveDate,
        /// Caller-supplied id for the new reservation
        reservation_id: ReservationId,
    },

    /// Cancel the reservation matching customer and exact date range
    CancelUnitBooking {
        /// Unit the reservation is on
        unit: UnitId,
        /// Customer who holds it
        customer: CustomerId,
        /// Exact start date of the reservation
        start: NaiveDate,
        /// Exact end date of the reservation
        end: NaiveDate,
    },

    /// Take seats from a restaurant's pool for one date
    BookSeats {
        /// Restaurant being booked
        restaurant: RestaurantId,
        /// Customer holding the seats
        customer: CustomerId,
        /// Calendar date of the booking
        date: NaiveDate,
        /// Seats to take from the day's pool
        seats: u32,
        /// Caller-supplied id for the new reservation
        reservation_id: ReservationId,
    },

    /// Release a customer's seats for one date back to the pool
    CancelSeats {
        /// Restaurant the seats belong to
        restaurant: RestaurantId,
        /// Customer whose reservation is cancelled
        customer: CustomerId,
        /// Calendar date of the reservation
        date: NaiveDate,
    },
}
