//! Transaction routing engine
//!
//! `CommerceEngine` owns one of each domain engine and dispatches a
//! [`TransactionRequest`] to the matching operation. This is the single
//! entry point the ordering substrate invokes, once per committed
//! transaction; the outcome of the whole transaction is the returned
//! result.

use crate::config::LedgerConfig;
use crate::core::accounts::AccountEngine;
use crate::core::lottery::LotteryEngine;
use crate::core::rentals::RentalEngine;
use crate::core::seating::SeatingEngine;
use crate::core::trips::TripEngine;
use crate::events::EventChannel;
use crate::store::AssetStore;
use crate::types::error::Result;
use crate::types::TransactionRequest;
use rand::Rng;

/// Transaction processing engine for the commerce ledger
///
/// Generic over the store handle, the event channel, and the random
/// generator used by lottery draws. Engines share the store through
/// cheap handle clones; nothing else is shared between them.
pub struct CommerceEngine<S: AssetStore, E: EventChannel, R: Rng> {
    accounts: AccountEngine<S, E>,
    lottery: LotteryEngine<S, R>,
    trips: TripEngine<S>,
    rentals: RentalEngine<S>,
    seating: SeatingEngine<S>,
}

impl<S: AssetStore, E: EventChannel, R: Rng> CommerceEngine<S, E, R> {
    /// Create an engine over the given store, event channel, and random
    /// generator
    pub fn new(store: S, events: E, rng: R, config: LedgerConfig) -> Self {
        CommerceEngine {
            accounts: AccountEngine::new(store.clone(), events, config),
            lottery: LotteryEngine::new(store.clone(), rng),
            trips: TripEngine::new(store.clone()),
            rentals: RentalEngine::new(store.clone()),
            seating: SeatingEngine::new(store),
        }
    }

    /// Process a single transaction request
    ///
    /// Routes the request to the matching engine operation. Validation
    /// always precedes mutation inside each operation, so an error means
    /// the transaction recorded nothing.
    pub fn process(&mut self, request: TransactionRequest) -> Result<()> {
        match request {
            TransactionRequest::AccountTransfer { from, to, amount } => {
                self.accounts.transfer(&from, &to, amount)
            }
            TransactionRequest::TopUpAccount { to, amount } => self.accounts.top_up(&to, amount),
            TransactionRequest::Payment { from, amount } => self.accounts.payment(&from, amount),
            TransactionRequest::BuyTicket {
                lottery,
                buyer,
                ticket_id,
            } => self.lottery.buy_ticket(&lottery, &buyer, &ticket_id),
            TransactionRequest::DrawLottery {
                lottery,
                num_winners,
            } => self.lottery.draw_lottery(&lottery, num_winners),
            TransactionRequest::Enroll { trip, customer } => self.trips.enroll(&trip, &customer),
            TransactionRequest::CancelEnrollment { trip, customer } => {
                self.trips.cancel(&trip, &customer)
            }
            TransactionRequest::BookUnit {
                unit,
                customer,
                start,
                end,
                reservation_id,
            } => self
                .rentals
                .book(&unit, &customer, start, end, &reservation_id),
            TransactionRequest::CancelUnitBooking {
                unit,
                customer,
                start,
                end,
            } => self.rentals.cancel(&unit, &customer, start, end),
            TransactionRequest::BookSeats {
                restaurant,
                customer,
                date,
                seats,
                reservation_id,
            } => self
                .seating
                .book(&restaurant, &customer, date, seats, &reservation_id),
            TransactionRequest::CancelSeats {
                restaurant,
                customer,
                date,
            } => self.seating.cancel(&restaurant, &customer, date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullEventChannel;
    use crate::store::MemoryStore;
    use crate::types::{Account, LedgerError, Lottery, ResourceStatus, Trip};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;

    fn engine(store: &MemoryStore) -> CommerceEngine<MemoryStore, NullEventChannel, StdRng> {
        CommerceEngine::new(
            store.clone(),
            NullEventChannel,
            StdRng::seed_from_u64(42),
            LedgerConfig::default(),
        )
    }

    fn seed_account(store: &MemoryStore, id: &str, owner: &str, balance: i64) {
        let mut account = Account::new(id, owner);
        account.balance = Decimal::new(balance, 0);
        store.add(account).unwrap();
    }

    #[test]
    fn test_process_routes_transfer() {
        let store = MemoryStore::new();
        seed_account(&store, "acct-x", "cust-x", 100);
        seed_account(&store, "acct-y", "cust-y", 100);

        engine(&store)
            .process(TransactionRequest::AccountTransfer {
                from: "acct-x".to_string(),
                to: "acct-y".to_string(),
                amount: Decimal::new(20, 0),
            })
            .unwrap();

        let from = store.get::<Account>("acct-x").unwrap().asset;
        assert_eq!(from.balance, Decimal::new(75, 0));
    }

    #[test]
    fn test_process_routes_lottery_buy_and_draw() {
        let store = MemoryStore::new();
        store
            .add(Lottery::new("lottery-1", Decimal::new(10, 0), 2, None))
            .unwrap();
        seed_account(&store, "acct-1", "cust-1", 25);
        let mut engine = engine(&store);

        engine
            .process(TransactionRequest::BuyTicket {
                lottery: "lottery-1".to_string(),
                buyer: "acct-1".to_string(),
                ticket_id: "t1".to_string(),
            })
            .unwrap();
        engine
            .process(TransactionRequest::DrawLottery {
                lottery: "lottery-1".to_string(),
                num_winners: 1,
            })
            .unwrap();

        let lottery = store.get::<Lottery>("lottery-1").unwrap().asset;
        assert_eq!(lottery.status, ResourceStatus::Close);
        assert_eq!(lottery.winners.len(), 1);
    }

    #[test]
    fn test_process_surfaces_engine_errors() {
        let store = MemoryStore::new();
        store.add(Trip::new("trip-1", 1)).unwrap();
        let mut engine = engine(&store);

        engine
            .process(TransactionRequest::Enroll {
                trip: "trip-1".to_string(),
                customer: "cust-1".to_string(),
            })
            .unwrap();

        let result = engine.process(TransactionRequest::Enroll {
            trip: "trip-1".to_string(),
            customer: "cust-2".to_string(),
        });
        assert_eq!(result.unwrap_err(), LedgerError::not_open("trip-1"));
    }

    #[test]
    fn test_process_routes_seating_cycle() {
        let store = MemoryStore::new();
        store
            .add(crate::types::Restaurant::new("rest-1", 10))
            .unwrap();
        let mut engine = engine(&store);
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        engine
            .process(TransactionRequest::BookSeats {
                restaurant: "rest-1".to_string(),
                customer: "cust-1".to_string(),
                date,
                seats: 6,
                reservation_id: "res-1".to_string(),
            })
            .unwrap();
        engine
            .process(TransactionRequest::CancelSeats {
                restaurant: "rest-1".to_string(),
                customer: "cust-1".to_string(),
                date,
            })
            .unwrap();

        let day = store
            .get::<crate::types::SeatingDay>("rest-1:2024-06-01")
            .unwrap()
            .asset;
        assert_eq!(day.available_seats, 10);
    }
}
