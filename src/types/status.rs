//! Lifecycle status shared by saleable resources
//!
//! Lotteries and capacity resources (trips/events) move through the same
//! two-state lifecycle: they are created open and close at most once.
//! Close is terminal; nothing in the engines flips a closed resource back.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a lottery or capacity resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceStatus {
    /// Accepting purchases/enrollments
    Open,

    /// Terminal: no further purchases, enrollments, or draws
    Close,
}

impl ResourceStatus {
    /// Whether the resource still accepts state-changing operations
    pub fn is_open(self) -> bool {
        matches!(self, ResourceStatus::Open)
    }
}
