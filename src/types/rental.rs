//! Rentable unit (interval booking) types
//!
//! A rentable unit (the canonical example is a beach umbrella) carries an
//! ordered set of date-range reservations. The set invariant is strict:
//! no two reservations may overlap, contain one another, or even share a
//! boundary date.

use super::account::CustomerId;
use crate::store::{Asset, AssetKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rentable unit identifier
pub type UnitId = String;

/// Reservation identifier (shared with seat reservations)
pub type ReservationId = String;

/// A date-range reservation on a rentable unit
///
/// Both `start` and `end` are inclusive; `days` is the inclusive day
/// count, computed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitReservation {
    /// Unique reservation id (caller-supplied)
    pub id: ReservationId,

    /// Customer holding the reservation
    pub customer: CustomerId,

    /// First reserved date (inclusive)
    pub start: NaiveDate,

    /// Last reserved date (inclusive)
    pub end: NaiveDate,

    /// Inclusive day count between start and end
    pub days: i64,
}

impl UnitReservation {
    /// Create a reservation, computing the inclusive day count
    pub fn new(
        id: impl Into<ReservationId>,
        customer: impl Into<CustomerId>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        UnitReservation {
            id: id.into(),
            customer: customer.into(),
            start,
            end,
            days: (end - start).num_days() + 1,
        }
    }

    /// Whether the candidate range `[start, end]` conflicts with this one
    ///
    /// Rejects overlap, containment, and boundary-touching in either
    /// direction: the candidate conflicts if either endpoint equals one of
    /// this reservation's endpoints, either endpoint falls strictly inside
    /// this reservation, or this reservation's start falls strictly inside
    /// the candidate.
    pub fn conflicts_with(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start == self.start
            || start == self.end
            || end == self.start
            || end == self.end
            || (start > self.start && start < self.end)
            || (end > self.start && end < self.end)
            || (self.start > start && self.start < end)
    }
}

impl Asset for UnitReservation {
    const KIND: AssetKind = AssetKind::UnitReservation;

    fn id(&self) -> &str {
        &self.id
    }
}

/// A rentable unit and its ordered reservation set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalUnit {
    /// Unique unit id
    pub id: UnitId,

    /// Active reservations, in booking order
    pub reservations: Vec<UnitReservation>,
}

impl RentalUnit {
    /// Create a unit with no reservations
    pub fn new(id: impl Into<UnitId>) -> Self {
        RentalUnit {
            id: id.into(),
            reservations: Vec::new(),
        }
    }
}

impl Asset for RentalUnit {
    const KIND: AssetKind = AssetKind::RentalUnit;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn jun(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_days_is_inclusive() {
        let reservation = UnitReservation::new("r1", "cust-1", jun(1), jun(5));
        assert_eq!(reservation.days, 5);

        let single = UnitReservation::new("r2", "cust-1", jun(10), jun(10));
        assert_eq!(single.days, 1);
    }

    #[rstest]
    // existing reservation is Jun 1 - Jun 5
    #[case::shared_start(jun(1), jun(3), true)]
    #[case::starts_on_existing_end(jun(5), jun(7), true)]
    #[case::ends_on_existing_start(jun(4), jun(1), true)]
    #[case::ends_on_existing_end(jun(3), jun(5), true)]
    #[case::start_strictly_inside(jun(2), jun(9), true)]
    #[case::end_strictly_inside(jun(4), jun(4), true)]
    #[case::contains_existing(jun(5), jun(28), true)]
    #[case::disjoint_after(jun(6), jun(8), false)]
    #[case::disjoint_before(jun(10), jun(20), false)]
    fn test_conflicts_with(#[case] start: NaiveDate, #[case] end: NaiveDate, #[case] expected: bool) {
        let existing = UnitReservation::new("r1", "cust-1", jun(1), jun(5));
        assert_eq!(existing.conflicts_with(start, end), expected);
    }

    #[test]
    fn test_containment_is_rejected_both_ways() {
        let existing = UnitReservation::new("r1", "cust-1", jun(10), jun(12));

        // candidate strictly inside the existing range
        assert!(existing.conflicts_with(jun(11), jun(11)));
        // candidate strictly containing the existing range
        assert!(existing.conflicts_with(jun(8), jun(15)));
    }
}
