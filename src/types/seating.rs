//! Daily seat-pool (restaurant) types
//!
//! A restaurant has a fixed number of seats per calendar day. Seats are
//! tracked in per-date buckets created lazily on the first booking for a
//! date; the restaurant keeps an index of bucket keys it has spawned.

use super::account::CustomerId;
use super::rental::ReservationId;
use crate::store::{Asset, AssetKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Restaurant identifier
pub type RestaurantId = String;

/// A seat-limited resource with a per-day capacity pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique restaurant id
    pub id: RestaurantId,

    /// Seats available on any single day
    pub total_seats: u32,

    /// Keys of the seating-day buckets created so far
    pub days: Vec<String>,
}

impl Restaurant {
    /// Create a restaurant with no seating days yet
    pub fn new(id: impl Into<RestaurantId>, total_seats: u32) -> Self {
        Restaurant {
            id: id.into(),
            total_seats,
            days: Vec::new(),
        }
    }
}

impl Asset for Restaurant {
    const KIND: AssetKind = AssetKind::Restaurant;

    fn id(&self) -> &str {
        &self.id
    }
}

/// A single seat reservation inside a seating-day bucket
///
/// Tied 1:1 to a slot in exactly one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatReservation {
    /// Unique reservation id (caller-supplied)
    pub id: ReservationId,

    /// Customer holding the seats
    pub customer: CustomerId,

    /// Restaurant the seats belong to
    pub restaurant: RestaurantId,

    /// Calendar date of the reservation
    pub date: NaiveDate,

    /// Seats taken from the day's pool
    pub seats: u32,
}

impl Asset for SeatReservation {
    const KIND: AssetKind = AssetKind::SeatReservation;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Per-date seat pool for one restaurant
///
/// Invariants held by the booking engine: `available_seats` plus the sum
/// of reservation seats always equals the restaurant's `total_seats`, and
/// no customer holds more than one reservation in a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingDay {
    /// Composite bucket key, see [`SeatingDay::key`]
    pub id: String,

    /// Restaurant this bucket belongs to
    pub restaurant: RestaurantId,

    /// Calendar date the pool covers
    pub date: NaiveDate,

    /// Seats still available on this date
    pub available_seats: u32,

    /// Reservations holding seats from this pool
    pub reservations: Vec<SeatReservation>,
}

impl SeatingDay {
    /// Bucket key for a `(restaurant, date)` pair
    ///
    /// The date component is zero-padded ISO (`%Y-%m-%d`), so day 1 of
    /// month 12 can never alias day 12 of month 1.
    pub fn key(restaurant: &str, date: NaiveDate) -> String {
        format!("{}:{}", restaurant, date.format("%Y-%m-%d"))
    }

    /// Create a fresh bucket with the restaurant's full seat pool
    pub fn new(restaurant: &str, date: NaiveDate, total_seats: u32) -> Self {
        SeatingDay {
            id: Self::key(restaurant, date),
            restaurant: restaurant.to_string(),
            date,
            available_seats: total_seats,
            reservations: Vec::new(),
        }
    }

    /// Whether `customer` already holds a reservation in this bucket
    pub fn has_reservation_for(&self, customer: &str) -> bool {
        self.reservations.iter().any(|r| r.customer == customer)
    }
}

impl Asset for SeatingDay {
    const KIND: AssetKind = AssetKind::SeatingDay;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_key_is_zero_padded() {
        // day 1 of month 12 vs day 12 of month 1 must not alias
        let dec_first = SeatingDay::key("rest-1", date(2024, 12, 1));
        let jan_twelfth = SeatingDay::key("rest-1", date(2024, 1, 12));

        assert_eq!(dec_first, "rest-1:2024-12-01");
        assert_eq!(jan_twelfth, "rest-1:2024-01-12");
        assert_ne!(dec_first, jan_twelfth);
    }

    #[test]
    fn test_new_bucket_holds_full_pool() {
        let day = SeatingDay::new("rest-1", date(2024, 6, 1), 10);
        assert_eq!(day.id, "rest-1:2024-06-01");
        assert_eq!(day.available_seats, 10);
        assert!(day.reservations.is_empty());
    }

    #[test]
    fn test_has_reservation_for_scans_bucket() {
        let mut day = SeatingDay::new("rest-1", date(2024, 6, 1), 10);
        day.reservations.push(SeatReservation {
            id: "res-1".to_string(),
            customer: "cust-1".to_string(),
            restaurant: "rest-1".to_string(),
            date: date(2024, 6, 1),
            seats: 4,
        });

        assert!(day.has_reservation_for("cust-1"));
        assert!(!day.has_reservation_for("cust-2"));
    }
}
