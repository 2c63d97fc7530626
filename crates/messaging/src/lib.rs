//! Cross-context messaging between the panel and the embedded form.
//!
//! The two sides run as isolated contexts with no shared memory; the only
//! channel is an asynchronous, at-most-once, fire-and-forget message bus.
//! This crate owns the wire envelope, the typed message vocabulary, origin
//! trust, and the modal state machine that decides which inbound messages
//! are acted on.

pub mod bus;
pub mod envelope;
pub mod in_memory_bus;
pub mod link;
pub mod message;
pub mod origin;
pub mod state;

pub use bus::{MessageBus, Subscription};
pub use envelope::{PostedMessage, WireEnvelope};
pub use in_memory_bus::{InMemoryBusError, InMemoryMessageBus};
pub use link::{LinkEndpoint, connect};
pub use message::{FormMessage, HostMessage, SubmitPayload, SubmitStatus};
pub use origin::{Origin, OriginPolicy};
pub use state::{ModalState, ProtocolState, Transition};
