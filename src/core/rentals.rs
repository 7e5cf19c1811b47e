//! Interval booking engine
//!
//! Date-range reservations on a rentable unit. The exclusion rule is
//! strict: a candidate range is rejected if it overlaps, contains, is
//! contained by, or merely touches the boundary of any existing
//! reservation on the unit.

use crate::store::AssetStore;
use crate::types::error::{LedgerError, Result};
use crate::types::{RentalUnit, UnitReservation};
use chrono::NaiveDate;
use tracing::debug;

/// Engine for date-range unit reservations
pub struct RentalEngine<S: AssetStore> {
    store: S,
}

impl<S: AssetStore> RentalEngine<S> {
    /// Create an engine over the given store
    pub fn new(store: S) -> Self {
        RentalEngine { store }
    }

    /// Reserve a unit for an inclusive date range
    ///
    /// The reservation is persisted standalone first among the mutations,
    /// so a caller-supplied id collision aborts before the unit is
    /// touched.
    ///
    /// # Errors
    ///
    /// - `InvalidInterval` if `start > end`, or the range shares or
    ///   crosses any date with an existing reservation
    /// - `NotFound` if the unit does not exist
    /// - `DuplicateId` if the reservation id is already in use
    /// - `ConcurrentModification` if the unit changed since the read
    pub fn book(
        &self,
        unit_id: &str,
        customer: &str,
        start: NaiveDate,
        end: NaiveDate,
        reservation_id: &str,
    ) -> Result<()> {
        // An inverted range satisfies none of the conflict predicates but
        // is meaningless, so it is rejected before the scan
        if start > end {
            return Err(LedgerError::invalid_interval(unit_id, start, end));
        }

        let mut unit = self.store.get::<RentalUnit>(unit_id)?;

        if unit
            .asset
            .reservations
            .iter()
            .any(|r| r.conflicts_with(start, end))
        {
            return Err(LedgerError::invalid_interval(unit_id, start, end));
        }

        let reservation = UnitReservation::new(reservation_id, customer, start, end);
        self.store.add(reservation.clone())?;

        unit.asset.reservations.push(reservation);
        self.store.update(unit)?;

        debug!(unit = unit_id, customer, %start, %end, "unit booked");
        Ok(())
    }

    /// Cancel the reservation matching customer and exact date range
    ///
    /// # Errors
    ///
    /// - `NotFound` if the unit does not exist or no reservation matches
    ///   the customer with exactly these dates
    /// - `ConcurrentModification` if the unit changed since the read
    pub fn cancel(
        &self,
        unit_id: &str,
        customer: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<()> {
        let mut unit = self.store.get::<RentalUnit>(unit_id)?;

        let position = unit
            .asset
            .reservations
            .iter()
            .position(|r| r.customer == customer && r.start == start && r.end == end)
            .ok_or_else(|| LedgerError::not_found("reservation", customer))?;

        unit.asset.reservations.remove(position);
        self.store.update(unit)?;

        debug!(unit = unit_id, customer, %start, %end, "unit booking cancelled");
        Ok(())
    }
}
