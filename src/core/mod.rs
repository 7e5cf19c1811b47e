//! Core business logic components
//!
//! One engine per shared mutable asset family, plus the routing engine
//! the ordering substrate invokes:
//! - `accounts`: balance transfers, top-ups, payments
//! - `lottery`: ticket sales and draws without replacement
//! - `trips`: headcount-bounded enrollment
//! - `rentals`: exclusive date-range reservations
//! - `seating`: per-day seat pools
//! - `engine`: request routing over all of the above

pub mod accounts;
pub mod engine;
pub mod lottery;
pub mod rentals;
pub mod seating;
pub mod trips;

pub use accounts::AccountEngine;
pub use engine::CommerceEngine;
pub use lottery::LotteryEngine;
pub use rentals::RentalEngine;
pub use seating::SeatingEngine;
pub use trips::TripEngine;
