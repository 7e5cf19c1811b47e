//! Lottery engine
//!
//! Ticket sales with per-user and participant caps, and a random draw
//! without replacement. The random generator is injected at construction
//! so draws are reproducible under a seeded generator.

use crate::store::AssetStore;
use crate::types::error::{LedgerError, Result};
use crate::types::{Account, Lottery, LotteryTicket, ResourceStatus};
use rand::Rng;
use tracing::{debug, info};

/// Engine for ticket sales and draws
pub struct LotteryEngine<S: AssetStore, R: Rng> {
    store: S,
    rng: R,
}

impl<S: AssetStore, R: Rng> LotteryEngine<S, R> {
    /// Create an engine over the given store and random generator
    pub fn new(store: S, rng: R) -> Self {
        LotteryEngine { store, rng }
    }

    /// Sell one ticket to the buyer
    ///
    /// Preconditions are checked in order: the lottery must be open, the
    /// buyer must cover the ticket price, and the buyer's customer must be
    /// under the per-user cap. Effects are applied only after all checks
    /// pass; the ticket is persisted first among the mutations, so a
    /// caller-supplied id collision aborts before any balance moves.
    ///
    /// Reaching a configured participant cap closes the lottery.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the lottery or buyer account does not exist
    /// - `NotOpen` if the lottery is closed
    /// - `InsufficientFunds` if the buyer cannot cover the price
    /// - `LimitExceeded` if the buyer's customer is at the per-user cap
    /// - `DuplicateId` if the ticket id is already in use
    /// - `ConcurrentModification` if an asset changed since the read
    pub fn buy_ticket(&self, lottery_id: &str, buyer_id: &str, ticket_id: &str) -> Result<()> {
        let mut lottery = self.store.get::<Lottery>(lottery_id)?;

        if !lottery.asset.status.is_open() {
            return Err(LedgerError::not_open(lottery_id));
        }

        let mut buyer = self.store.get::<Account>(buyer_id)?;

        if buyer.asset.balance < lottery.asset.price {
            return Err(LedgerError::insufficient_funds(
                buyer_id,
                buyer.asset.balance,
                lottery.asset.price,
            ));
        }

        let owned = lottery.asset.tickets_owned_by(&buyer.asset.owner);
        if owned >= lottery.asset.tickets_per_user as usize {
            return Err(LedgerError::limit_exceeded(
                lottery_id,
                &buyer.asset.owner,
                lottery.asset.tickets_per_user,
            ));
        }

        let price = lottery.asset.price;
        let ticket = LotteryTicket {
            id: ticket_id.to_string(),
            customer: buyer.asset.owner.clone(),
            lottery: lottery_id.to_string(),
            price_paid: price,
        };

        buyer.asset.balance -= price;
        lottery.asset.pool_amount += price;
        lottery.asset.tickets.push(ticket.clone());
        lottery.asset.participants = lottery.asset.distinct_participants();

        if let Some(cap) = lottery.asset.max_participants {
            if lottery.asset.participants >= cap {
                lottery.asset.status = ResourceStatus::Close;
                info!(lottery = lottery_id, cap, "participant cap reached, lottery closed");
            }
        }

        self.store.add(ticket)?;
        self.store.update(buyer)?;
        self.store.update(lottery)?;

        debug!(lottery = lottery_id, buyer = buyer_id, ticket = ticket_id, "ticket sold");
        Ok(())
    }

    /// Draw winners without replacement and close the lottery
    ///
    /// Each winner is picked uniformly at random from the remaining
    /// ticket pool and removed from it before the next pick, equivalent
    /// to taking the first `num_winners` elements of a uniform random
    /// permutation of the pool. Closing is terminal: a drawn lottery can
    /// be neither redrawn nor resold.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the lottery does not exist
    /// - `NotOpen` if the lottery was already drawn or closed
    /// - `InsufficientPool` if fewer tickets than winners were sold
    /// - `ConcurrentModification` if the lottery changed since the read
    pub fn draw_lottery(&mut self, lottery_id: &str, num_winners: usize) -> Result<()> {
        let mut lottery = self.store.get::<Lottery>(lottery_id)?;

        if !lottery.asset.status.is_open() {
            return Err(LedgerError::not_open(lottery_id));
        }

        if num_winners > lottery.asset.tickets.len() {
            return Err(LedgerError::insufficient_pool(
                lottery_id,
                lottery.asset.tickets.len(),
                num_winners,
            ));
        }

        for _ in 0..num_winners {
            let index = self.rng.gen_range(0..lottery.asset.tickets.len());
            let winner = lottery.asset.tickets.remove(index);
            lottery.asset.winners.push(winner);
        }

        lottery.asset.status = ResourceStatus::Close;
        self.store.update(lottery)?;

        info!(lottery = lottery_id, num_winners, "draw completed, lottery closed");
        Ok(())
    }
}
