use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::origin::Origin;

/// The `{ type, payload }` wrapper exchanged in both directions.
///
/// `payload` is schema-free at this level; decoding into the typed message
/// vocabulary happens in [`crate::message`], and anything that fails to
/// decode is dropped there rather than raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEnvelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    payload: Value,
}

impl WireEnvelope {
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// An envelope as it travels the channel: stamped with the origin of the
/// endpoint that posted it. The stamp is applied by the transport, not by
/// user code, so a context cannot claim a foreign origin through the normal
/// send path.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedMessage {
    origin: Origin,
    envelope: WireEnvelope,
}

impl PostedMessage {
    pub fn new(origin: Origin, envelope: WireEnvelope) -> Self {
        Self { origin, envelope }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn envelope(&self) -> &WireEnvelope {
        &self.envelope
    }

    pub fn into_envelope(self) -> WireEnvelope {
        self.envelope
    }
}
