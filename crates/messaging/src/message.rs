//! Typed message vocabulary over the wire envelope.
//!
//! Decoding is tolerant by contract: an unknown `type`, or a payload that
//! does not match the expected shape, yields `None` and the caller drops the
//! message. Nothing here returns an error to the sender; the transport is
//! fire-and-forget in both directions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use stockdeck_catalog::{Product, ProductPatch};
use stockdeck_core::ProductId;

use crate::envelope::WireEnvelope;

pub const TYPE_PRODUCT_DATA: &str = "productData";
pub const TYPE_RESET_FORM: &str = "resetForm";
pub const TYPE_DATA_AFTER_SUBMIT_FORM: &str = "dataAfterSubmitForm";
pub const TYPE_CLOSE_MODAL: &str = "closeModal";

/// Messages the panel sends to the embedded form.
#[derive(Debug, Clone, PartialEq)]
pub enum HostMessage {
    /// Seed the form: the record under edit, or `None` for create mode.
    ProductData(Option<Product>),
    /// Ask the form to clear its fields (explicit cancel).
    ResetForm,
}

impl HostMessage {
    pub fn message_type(&self) -> &'static str {
        match self {
            HostMessage::ProductData(_) => TYPE_PRODUCT_DATA,
            HostMessage::ResetForm => TYPE_RESET_FORM,
        }
    }

    pub fn to_envelope(&self) -> WireEnvelope {
        let payload = match self {
            HostMessage::ProductData(Some(product)) => {
                serde_json::to_value(product).unwrap_or(Value::Null)
            }
            HostMessage::ProductData(None) | HostMessage::ResetForm => Value::Null,
        };
        WireEnvelope::new(self.message_type(), payload)
    }

    pub fn from_envelope(envelope: &WireEnvelope) -> Option<Self> {
        match envelope.kind() {
            TYPE_PRODUCT_DATA => {
                if envelope.payload().is_null() {
                    Some(HostMessage::ProductData(None))
                } else {
                    serde_json::from_value(envelope.payload().clone())
                        .ok()
                        .map(|product| HostMessage::ProductData(Some(product)))
                }
            }
            TYPE_RESET_FORM => Some(HostMessage::ResetForm),
            _ => None,
        }
    }
}

/// Outcome reported by the embedded form on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    Success,
    Failure,
}

/// Payload of `dataAfterSubmitForm`.
///
/// `id` present means "merge into that record"; absent means "this is a
/// create". The form never mints ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub status: SubmitStatus,
    #[serde(default)]
    pub data: ProductPatch,
}

/// Messages the embedded form sends to the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMessage {
    DataAfterSubmitForm(SubmitPayload),
    /// Dismiss without submitting.
    CloseModal,
}

impl FormMessage {
    pub fn message_type(&self) -> &'static str {
        match self {
            FormMessage::DataAfterSubmitForm(_) => TYPE_DATA_AFTER_SUBMIT_FORM,
            FormMessage::CloseModal => TYPE_CLOSE_MODAL,
        }
    }

    pub fn to_envelope(&self) -> WireEnvelope {
        let payload = match self {
            FormMessage::DataAfterSubmitForm(payload) => {
                serde_json::to_value(payload).unwrap_or(Value::Null)
            }
            FormMessage::CloseModal => Value::Null,
        };
        WireEnvelope::new(self.message_type(), payload)
    }

    pub fn from_envelope(envelope: &WireEnvelope) -> Option<Self> {
        match envelope.kind() {
            TYPE_DATA_AFTER_SUBMIT_FORM => serde_json::from_value(envelope.payload().clone())
                .ok()
                .map(FormMessage::DataAfterSubmitForm),
            TYPE_CLOSE_MODAL => Some(FormMessage::CloseModal),
            _ => None,
        }
    }
}
