//! Daily capacity ledger
//!
//! Per-day seat pools for a restaurant. Buckets are created lazily on the
//! first booking for a date and keyed so distinct dates can never alias.
//! Within a bucket, a customer holds at most one reservation and the pool
//! never goes negative.

use crate::store::{AssetStore, Versioned};
use crate::types::error::{LedgerError, Result};
use crate::types::{Restaurant, SeatReservation, SeatingDay};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

/// Engine for per-day seat booking
pub struct SeatingEngine<S: AssetStore> {
    store: S,
}

impl<S: AssetStore> SeatingEngine<S> {
    /// Create an engine over the given store
    pub fn new(store: S) -> Self {
        SeatingEngine { store }
    }

    /// Take seats from a restaurant's pool for one date
    ///
    /// The first booking for a date creates the bucket with the
    /// restaurant's full seat pool and records its key in the
    /// restaurant's bucket index.
    ///
    /// # Errors
    ///
    /// - `InvalidQuantity` if `seats == 0`
    /// - `NotFound` if the restaurant does not exist
    /// - `DuplicateReservation` if the customer already holds seats for
    ///   that date
    /// - `SoldOut` if the pool cannot cover the requested seats
    /// - `DuplicateId` if the reservation id is already in use
    /// - `ConcurrentModification` if an asset changed since the read
    pub fn book(
        &self,
        restaurant_id: &str,
        customer: &str,
        date: NaiveDate,
        seats: u32,
        reservation_id: &str,
    ) -> Result<()> {
        if seats == 0 {
            return Err(LedgerError::invalid_quantity(
                Decimal::from(seats),
                "seat booking",
            ));
        }

        let mut restaurant = self.store.get::<Restaurant>(restaurant_id)?;

        let key = SeatingDay::key(restaurant_id, date);
        let (mut day, read_version) = match self.store.get::<SeatingDay>(&key) {
            Ok(read) => (read.asset, Some(read.version)),
            Err(LedgerError::NotFound { .. }) => {
                debug!(restaurant = restaurant_id, %date, "creating seating day");
                (
                    SeatingDay::new(restaurant_id, date, restaurant.asset.total_seats),
                    None,
                )
            }
            Err(other) => return Err(other),
        };

        if day.has_reservation_for(customer) {
            return Err(LedgerError::duplicate_reservation(
                restaurant_id,
                date,
                customer,
            ));
        }

        if day.available_seats < seats {
            return Err(LedgerError::sold_out(
                restaurant_id,
                date,
                day.available_seats,
                seats,
            ));
        }

        let reservation = SeatReservation {
            id: reservation_id.to_string(),
            customer: customer.to_string(),
            restaurant: restaurant_id.to_string(),
            date,
            seats,
        };

        day.available_seats -= seats;
        day.reservations.push(reservation.clone());

        self.store.add(reservation)?;
        match read_version {
            Some(version) => self.store.update(Versioned {
                version,
                asset: day,
            })?,
            None => {
                // fresh bucket: persist it and index it on the restaurant
                self.store.add(day)?;
                restaurant.asset.days.push(key);
                self.store.update(restaurant)?;
            }
        }

        debug!(restaurant = restaurant_id, customer, %date, seats, "seats booked");
        Ok(())
    }

    /// Release a customer's seats for one date back to the pool
    ///
    /// # Errors
    ///
    /// - `NotFound` if no bucket exists for the date or the customer has
    ///   no reservation in it
    /// - `ConcurrentModification` if the bucket changed since the read
    pub fn cancel(&self, restaurant_id: &str, customer: &str, date: NaiveDate) -> Result<()> {
        let key = SeatingDay::key(restaurant_id, date);
        let mut day = self.store.get::<SeatingDay>(&key)?;

        let position = day
            .asset
            .reservations
            .iter()
            .position(|r| r.customer == customer)
            .ok_or_else(|| LedgerError::not_found("reservation", customer))?;

        let reservation = day.asset.reservations.remove(position);
        day.asset.available_seats += reservation.seats;

        self.store.update(day)?;

        debug!(restaurant = restaurant_id, customer, %date, seats = reservation.seats, "seats released");
        Ok(())
    }
}
