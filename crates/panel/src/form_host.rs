//! Embedded form lifecycle: load, reference, teardown.
//!
//! The transport is fire-and-forget, so a message posted before the form has
//! loaded is simply lost. The host therefore parks the seed payload and
//! flushes it on the load signal; when the form is already loaded from a
//! previous open, the send goes out immediately. Either way every open gets
//! its own send - nothing hinges on a one-time load event.

use stockdeck_messaging::{LinkEndpoint, PostedMessage, WireEnvelope};

#[derive(Debug)]
pub struct FormHost {
    endpoint: LinkEndpoint,
    loaded: bool,
    pending: Option<WireEnvelope>,
}

impl FormHost {
    /// Wrap an endpoint for a form that has not signaled load yet.
    pub fn new(endpoint: LinkEndpoint) -> Self {
        Self {
            endpoint,
            loaded: false,
            pending: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The form's load signal. Flushes at most one parked envelope.
    pub fn notify_loaded(&mut self) {
        self.loaded = true;
        if let Some(envelope) = self.pending.take() {
            self.endpoint.post(envelope);
        }
    }

    /// Teardown: the form reference is gone; any parked payload with it.
    pub fn unload(&mut self) {
        self.loaded = false;
        self.pending = None;
    }

    /// Send, deferring until load if necessary. A newer envelope replaces an
    /// older parked one - only the latest open's payload matters.
    pub fn send(&mut self, envelope: WireEnvelope) {
        if self.loaded {
            self.endpoint.post(envelope);
        } else {
            self.pending = Some(envelope);
        }
    }

    /// Best-effort send: posted only if the form is loaded, never parked.
    pub fn send_if_loaded(&self, envelope: WireEnvelope) {
        if self.loaded {
            self.endpoint.post(envelope);
        }
    }

    /// Drain the next inbound message from the form, if any.
    pub fn poll(&self) -> Option<PostedMessage> {
        self.endpoint.try_recv()
    }
}
