//! Event channel seam
//!
//! Engines emit notifications through this trait; delivery is
//! at-most-once and fire-and-forget. The transport is an external
//! collaborator, so `emit` is infallible at the call site: a lost event
//! never rolls back the transaction that produced it.

use crate::types::account::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// A notification emitted by an engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventRecord {
    /// A payment debited an account
    PaymentNotification {
        /// Account that was debited
        account: AccountId,
        /// Amount of the debit
        amount: Decimal,
    },
}

/// Fire-and-forget notification sink
pub trait EventChannel: Send + Sync + 'static {
    /// Emit an event; delivery is at-most-once with no guarantee
    /// surfaced to the caller
    fn emit(&self, event: EventRecord);
}

/// Event channel backed by an unbounded tokio mpsc sender
///
/// A closed receiver is an allowed delivery miss, not an error.
#[derive(Clone)]
pub struct TokioEventChannel {
    sender: mpsc::UnboundedSender<EventRecord>,
}

impl TokioEventChannel {
    /// Create a channel and the receiver the transport drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<EventRecord>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (TokioEventChannel { sender }, receiver)
    }
}

impl EventChannel for TokioEventChannel {
    fn emit(&self, event: EventRecord) {
        let _ = self.sender.send(event);
    }
}

/// Event channel that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventChannel;

impl EventChannel for NullEventChannel {
    fn emit(&self, _event: EventRecord) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(account: &str, amount: i64) -> EventRecord {
        EventRecord::PaymentNotification {
            account: account.to_string(),
            amount: Decimal::new(amount, 0),
        }
    }

    #[test]
    fn test_tokio_channel_delivers_in_order() {
        let (channel, mut receiver) = TokioEventChannel::channel();

        channel.emit(payment("acct-1", 10));
        channel.emit(payment("acct-2", 20));

        assert_eq!(receiver.try_recv().unwrap(), payment("acct-1", 10));
        assert_eq!(receiver.try_recv().unwrap(), payment("acct-2", 20));
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_emit_after_receiver_dropped_is_silent() {
        let (channel, receiver) = TokioEventChannel::channel();
        drop(receiver);

        // must not panic or surface the miss
        channel.emit(payment("acct-1", 10));
    }

    #[test]
    fn test_null_channel_swallows_events() {
        NullEventChannel.emit(payment("acct-1", 10));
    }
}
