//! Capacity reservation engine
//!
//! Headcount-bounded enrollment for trips and events. Filling the last
//! seat closes the resource; status transitions are one-way, so a closed
//! trip accepts neither enrollments nor cancellations and a cancellation
//! never reopens anything.

use crate::store::AssetStore;
use crate::types::error::{LedgerError, Result};
use crate::types::{ResourceStatus, Trip};
use tracing::{debug, info};

/// Engine for trip/event enrollment
pub struct TripEngine<S: AssetStore> {
    store: S,
}

impl<S: AssetStore> TripEngine<S> {
    /// Create an engine over the given store
    pub fn new(store: S) -> Self {
        TripEngine { store }
    }

    /// Enroll a customer in a trip
    ///
    /// Filling the last seat transitions the trip to closed.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the trip does not exist
    /// - `NotOpen` if the trip is closed
    /// - `AlreadyEnrolled` if the customer is already a participant
    /// - `ConcurrentModification` if the trip changed since the read
    pub fn enroll(&self, trip_id: &str, customer: &str) -> Result<()> {
        let mut trip = self.store.get::<Trip>(trip_id)?;

        if !trip.asset.status.is_open() {
            return Err(LedgerError::not_open(trip_id));
        }

        if trip.asset.is_enrolled(customer) {
            return Err(LedgerError::already_enrolled(trip_id, customer));
        }

        trip.asset.participants.push(customer.to_string());
        trip.asset.participant_count += 1;

        if trip.asset.participant_count == trip.asset.max_participants {
            trip.asset.status = ResourceStatus::Close;
            info!(trip = trip_id, "headcount full, trip closed");
        }

        self.store.update(trip)?;

        debug!(trip = trip_id, customer, "enrollment committed");
        Ok(())
    }

    /// Withdraw a customer from a still-open trip
    ///
    /// The status is deliberately left untouched: dropping below the
    /// maximum never reopens a closed trip, and cancellation itself is
    /// refused once the trip closed.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the trip does not exist or the customer is not
    ///   enrolled
    /// - `NotOpen` if the trip is closed
    /// - `ConcurrentModification` if the trip changed since the read
    pub fn cancel(&self, trip_id: &str, customer: &str) -> Result<()> {
        let mut trip = self.store.get::<Trip>(trip_id)?;

        if !trip.asset.status.is_open() {
            return Err(LedgerError::not_open(trip_id));
        }

        let position = trip
            .asset
            .participants
            .iter()
            .position(|p| p == customer)
            .ok_or_else(|| LedgerError::not_found("participant", customer))?;

        trip.asset.participants.remove(position);
        trip.asset.participant_count -= 1;

        self.store.update(trip)?;

        debug!(trip = trip_id, customer, "cancellation committed");
        Ok(())
    }
}
