//! The host↔form link: two endpoints joined by a pair of one-way buses.
//!
//! Each endpoint can only post under its own origin - the stamp is applied
//! here, not by callers - so origin trust reduces to checking the stamp on
//! arrival. Posting is fire-and-forget; a message posted while the other
//! side has no live subscription is lost, exactly like the transport this
//! models.

use std::sync::Arc;

use crate::bus::{MessageBus, Subscription};
use crate::envelope::{PostedMessage, WireEnvelope};
use crate::in_memory_bus::InMemoryMessageBus;
use crate::origin::Origin;

/// One side of the link. Both contexts hold the same capability shape: an
/// identity, a way to post, and a way to drain inbound messages.
#[derive(Debug)]
pub struct LinkEndpoint<B = InMemoryMessageBus<PostedMessage>>
where
    B: MessageBus<PostedMessage>,
{
    origin: Origin,
    outbound: Arc<B>,
    inbound: Subscription<PostedMessage>,
}

impl<B> LinkEndpoint<B>
where
    B: MessageBus<PostedMessage>,
{
    pub fn new(origin: Origin, outbound: Arc<B>, inbound: Subscription<PostedMessage>) -> Self {
        Self {
            origin,
            outbound,
            inbound,
        }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Post an envelope, stamped with this endpoint's origin.
    /// Fire-and-forget: delivery failures are traced and swallowed.
    pub fn post(&self, envelope: WireEnvelope) {
        let kind = envelope.kind().to_string();
        let posted = PostedMessage::new(self.origin.clone(), envelope);
        if self.outbound.publish(posted).is_err() {
            tracing::debug!(origin = %self.origin, %kind, "outbound message dropped: channel unavailable");
        }
    }

    /// Drain the next inbound message, if any.
    pub fn try_recv(&self) -> Option<PostedMessage> {
        self.inbound.try_recv().ok()
    }
}

/// Build a connected (host, form) endpoint pair over in-memory buses.
pub fn connect(host_origin: Origin, form_origin: Origin) -> (LinkEndpoint, LinkEndpoint) {
    let to_form = Arc::new(InMemoryMessageBus::new());
    let to_host = Arc::new(InMemoryMessageBus::new());

    let host = LinkEndpoint::new(host_origin, Arc::clone(&to_form), to_host.subscribe());
    let form = LinkEndpoint::new(form_origin, to_host, to_form.subscribe());
    (host, form)
}
