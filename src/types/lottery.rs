//! Lottery-related types
//!
//! A lottery sells tickets while open, accumulates the proceeds in its
//! pool, and is drawn at most once. Tickets are immutable once created:
//! they are persisted standalone (so ticket-id uniqueness is enforced by
//! the store) and also carried in the lottery's ordered ticket list,
//! which doubles as the draw pool.

use super::account::CustomerId;
use super::status::ResourceStatus;
use crate::store::{Asset, AssetKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lottery identifier
pub type LotteryId = String;

/// Lottery ticket identifier
pub type TicketId = String;

/// A sold lottery ticket
///
/// Immutable once created; owned by the lottery it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotteryTicket {
    /// Unique ticket id (caller-supplied)
    pub id: TicketId,

    /// Customer who bought the ticket
    pub customer: CustomerId,

    /// Lottery the ticket belongs to
    pub lottery: LotteryId,

    /// Unit price at the time of sale
    pub price_paid: Decimal,
}

impl Asset for LotteryTicket {
    const KIND: AssetKind = AssetKind::LotteryTicket;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Lottery state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lottery {
    /// Unique lottery id
    pub id: LotteryId,

    /// Lifecycle status; Close is terminal (no resale, no redraw)
    pub status: ResourceStatus,

    /// Unit ticket price
    pub price: Decimal,

    /// Maximum tickets a single customer may hold
    pub tickets_per_user: u32,

    /// Optional cap on distinct participants; reaching it closes the sale
    pub max_participants: Option<u32>,

    /// Accumulated proceeds from ticket sales
    pub pool_amount: Decimal,

    /// Ordered list of sold tickets; the pool a draw removes from
    pub tickets: Vec<LotteryTicket>,

    /// Winning tickets, in draw order
    pub winners: Vec<LotteryTicket>,

    /// Distinct customers holding at least one ticket
    pub participants: u32,
}

impl Lottery {
    /// Create an open lottery with no tickets sold
    pub fn new(
        id: impl Into<LotteryId>,
        price: Decimal,
        tickets_per_user: u32,
        max_participants: Option<u32>,
    ) -> Self {
        Lottery {
            id: id.into(),
            status: ResourceStatus::Open,
            price,
            tickets_per_user,
            max_participants,
            pool_amount: Decimal::ZERO,
            tickets: Vec::new(),
            winners: Vec::new(),
            participants: 0,
        }
    }

    /// Tickets currently held by `customer`
    pub fn tickets_owned_by(&self, customer: &str) -> usize {
        self.tickets
            .iter()
            .filter(|ticket| ticket.customer == customer)
            .count()
    }

    /// Recount distinct ticket owners by scanning the ticket list
    pub fn distinct_participants(&self) -> u32 {
        let owners: HashSet<&str> = self
            .tickets
            .iter()
            .map(|ticket| ticket.customer.as_str())
            .collect();
        owners.len() as u32
    }
}

impl Asset for Lottery {
    const KIND: AssetKind = AssetKind::Lottery;

    fn id(&self) -> &str {
        &self.id
    }
}
