//! Capacity resource (trip/event) types
//!
//! A trip holds a bounded headcount. Enrollment appends a participant and
//! closes the trip when full. Status transitions are one-way: a closed
//! trip never reopens, and cancellation is only permitted while the trip
//! is still open.

use super::account::CustomerId;
use super::status::ResourceStatus;
use crate::store::{Asset, AssetKind};
use serde::{Deserialize, Serialize};

/// Trip/event identifier
pub type TripId = String;

/// Headcount-bounded trip or event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique trip id
    pub id: TripId,

    /// Lifecycle status; set to Close when the headcount fills
    pub status: ResourceStatus,

    /// Maximum participants
    pub max_participants: u32,

    /// Current participant count
    pub participant_count: u32,

    /// Enrolled participants, unique by customer id
    pub participants: Vec<CustomerId>,
}

impl Trip {
    /// Create an open trip with no participants
    pub fn new(id: impl Into<TripId>, max_participants: u32) -> Self {
        Trip {
            id: id.into(),
            status: ResourceStatus::Open,
            max_participants,
            participant_count: 0,
            participants: Vec::new(),
        }
    }

    /// Whether `customer` is already enrolled
    pub fn is_enrolled(&self, customer: &str) -> bool {
        self.participants.iter().any(|p| p == customer)
    }
}

impl Asset for Trip {
    const KIND: AssetKind = AssetKind::Trip;

    fn id(&self) -> &str {
        &self.id
    }
}
