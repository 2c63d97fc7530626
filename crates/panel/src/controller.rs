//! The panel controller: single source of truth for the product collection
//! and the modal, and the sole entry point for inbound protocol events.

use stockdeck_catalog::{Product, ProductPatch};
use stockdeck_core::{DomainResult, ProductId};
use stockdeck_messaging::{
    FormMessage, HostMessage, OriginPolicy, PostedMessage, ProtocolState, SubmitPayload,
    SubmitStatus, Transition,
};

use crate::collection::ProductCollection;
use crate::form_host::FormHost;
use crate::notify::Notification;

#[derive(Debug)]
pub struct PanelController {
    collection: ProductCollection,
    state: ProtocolState,
    /// Editing target; survives a close until the next open.
    editing: Option<ProductId>,
    policy: OriginPolicy,
    form: FormHost,
    notifications: Vec<Notification>,
}

impl PanelController {
    pub fn new(
        seed: Vec<Product>,
        policy: OriginPolicy,
        form: FormHost,
    ) -> DomainResult<Self> {
        Ok(Self {
            collection: ProductCollection::seeded(seed)?,
            state: ProtocolState::new(),
            editing: None,
            policy,
            form,
            notifications: Vec::new(),
        })
    }

    /// Read-only view for the list presentation.
    pub fn products(&self) -> &[Product] {
        self.collection.as_slice()
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.is_open()
    }

    /// The product under edit, if the current open targets one.
    pub fn editing_product(&self) -> Option<&Product> {
        self.editing.and_then(|id| self.collection.get(&id))
    }

    /// Drain queued notifications for display.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Open the modal in create mode and seed the form with a null record.
    pub fn open_for_create(&mut self) {
        self.editing = None;
        self.state.open();
        self.form
            .send(HostMessage::ProductData(None).to_envelope());
        tracing::debug!("modal opened for create");
    }

    /// Open the modal in edit mode and seed the form with the full record.
    /// Fails if no product has the given id.
    pub fn open_for_edit(&mut self, id: ProductId) -> DomainResult<()> {
        let product = self
            .collection
            .get(&id)
            .cloned()
            .ok_or_else(stockdeck_core::DomainError::not_found)?;

        self.editing = Some(id);
        self.state.open();
        self.form
            .send(HostMessage::ProductData(Some(product)).to_envelope());
        tracing::debug!(%id, "modal opened for edit");
        Ok(())
    }

    /// User-initiated close. The editing target is kept until the next open;
    /// the form is asked, best-effort, to clear its fields.
    pub fn close_modal(&mut self) {
        self.state.close();
        self.form
            .send_if_loaded(HostMessage::ResetForm.to_envelope());
        tracing::debug!("modal closed by user");
    }

    /// The embedded form's load signal (flushes any parked seed payload).
    pub fn form_loaded(&mut self) {
        self.form.notify_loaded();
    }

    /// The embedded form was torn down.
    pub fn form_unloaded(&mut self) {
        self.form.unload();
    }

    /// Drain and handle every queued inbound message.
    pub fn pump(&mut self) {
        while let Some(posted) = self.form.poll() {
            self.on_form_message(posted);
        }
    }

    /// Sole entry point for inbound protocol events. Untrusted origins and
    /// unrecognized shapes are dropped here, before the state machine sees
    /// anything.
    pub fn on_form_message(&mut self, posted: PostedMessage) {
        if !self.policy.allows(posted.origin()) {
            tracing::debug!(origin = %posted.origin(), "dropping message from untrusted origin");
            return;
        }

        let Some(message) = FormMessage::from_envelope(posted.envelope()) else {
            tracing::debug!(kind = posted.envelope().kind(), "dropping unrecognized message");
            return;
        };

        match self.state.on_inbound(message) {
            Transition::Submitted(payload) => self.apply_submission(payload),
            Transition::Dismissed => tracing::debug!("form dismissed the modal"),
            Transition::Ignored => {
                tracing::debug!(kind = posted.envelope().kind(), "inbound message ignored while closed");
            }
        }
    }

    /// Confirmed delete from the list view.
    pub fn delete_confirmed(&mut self, id: ProductId) {
        match self.collection.remove(&id) {
            Some(product) => {
                tracing::info!(%id, name = %product.name, "product deleted");
                self.notifications.push(Notification::Success(
                    "Product deleted successfully.".to_string(),
                ));
            }
            None => tracing::debug!(%id, "delete for unknown product id"),
        }
    }

    /// The user backed out of a delete confirmation.
    pub fn delete_canceled(&mut self) {
        self.notifications
            .push(Notification::Info("Deletion canceled.".to_string()));
    }

    fn apply_submission(&mut self, payload: SubmitPayload) {
        match payload.status {
            SubmitStatus::Failure => {
                tracing::warn!("form reported a failed submission");
                self.notifications.push(Notification::Error(
                    "Product could not be saved".to_string(),
                ));
            }
            SubmitStatus::Success => match payload.id {
                Some(id) => self.apply_edit(id, &payload.data),
                None => self.apply_create(payload.data),
            },
        }
    }

    fn apply_edit(&mut self, id: ProductId, patch: &ProductPatch) {
        if self.collection.merge(&id, patch) {
            tracing::info!(%id, "product edited");
        } else {
            tracing::debug!(%id, "submission for unknown product id; nothing merged");
        }
        self.notifications.push(Notification::Success(
            "Product edited successfully".to_string(),
        ));
    }

    fn apply_create(&mut self, patch: ProductPatch) {
        let id = ProductId::new();
        match patch.into_product(id) {
            Ok(product) => {
                if let Err(err) = self.collection.append(product) {
                    tracing::error!(%id, %err, "failed to append created product");
                    return;
                }
                tracing::info!(%id, "product created");
                self.notifications.push(Notification::Success(
                    "Product created successfully".to_string(),
                ));
            }
            Err(err) => {
                tracing::warn!(%err, "create submission was missing required fields");
                self.notifications.push(Notification::Error(
                    "Product could not be saved".to_string(),
                ));
            }
        }
    }
}
