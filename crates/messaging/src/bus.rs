//! Message publishing/subscription abstraction (mechanics only).
//!
//! The bus is intentionally lightweight and makes minimal assumptions:
//!
//! - **Transport-agnostic**: in-memory channels here; anything with the same
//!   delivery shape would do.
//! - **At-most-once, fire-and-forget**: a message posted with no live
//!   listener is simply gone. Senders get no delivery confirmation.
//! - **No cross-channel ordering**: ordering holds only within a single
//!   sender-receiver pair, which is all the protocol relies on.
//! - **No persistence**: the bus distributes, it does not store.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to a message stream.
///
/// Each subscription gets a copy of every message published to the bus
/// (broadcast semantics). Designed for single-threaded consumption; the
/// protocol drains it on the consuming context's own schedule.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Domain-agnostic message bus (pub/sub abstraction).
///
/// `publish()` can fail on the implementation's own terms (e.g. a poisoned
/// lock); callers on the fire-and-forget path log and move on, because the
/// transport contract offers no delivery guarantee either way.
pub trait MessageBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> MessageBus<M> for Arc<B>
where
    B: MessageBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
