//! The embedded form context.
//!
//! Runs on the far side of the link: it holds draft state, validates on
//! submit (errors block the send entirely), and reports outcomes back with
//! `dataAfterSubmitForm`. It trusts exactly one origin - the panel's - and
//! drops everything else, mirroring the panel's own inbound policy.

use chrono::NaiveDate;

use stockdeck_catalog::{FieldError, ProductDraft, ProviderCatalog, TagCatalog};
use stockdeck_core::ProductId;
use stockdeck_messaging::{
    FormMessage, HostMessage, LinkEndpoint, OriginPolicy, PostedMessage, SubmitPayload,
    SubmitStatus,
};

#[derive(Debug)]
pub struct FormPane {
    endpoint: LinkEndpoint,
    policy: OriginPolicy,
    draft: ProductDraft,
    /// Set by a `productData` seed carrying a record; the submission echoes
    /// it so the panel can match the target. Never minted here.
    editing_id: Option<ProductId>,
    providers: ProviderCatalog,
    tags: TagCatalog,
    errors: Vec<FieldError>,
}

impl FormPane {
    pub fn new(endpoint: LinkEndpoint, policy: OriginPolicy) -> Self {
        Self {
            endpoint,
            policy,
            draft: ProductDraft::default(),
            editing_id: None,
            providers: ProviderCatalog::new(),
            tags: TagCatalog::new(),
            errors: Vec::new(),
        }
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    pub fn editing_id(&self) -> Option<ProductId> {
        self.editing_id
    }

    /// Field errors from the last failed submit attempt.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn providers(&self) -> &ProviderCatalog {
        &self.providers
    }

    pub fn tag_catalog(&self) -> &TagCatalog {
        &self.tags
    }

    /// Add a tag to the catalog (and return the name actually stored).
    pub fn add_tag(&mut self, name: &str) -> String {
        self.tags.add(name)
    }

    /// Drain and handle every queued message from the panel.
    pub fn pump(&mut self) {
        while let Some(posted) = self.endpoint.try_recv() {
            self.on_host_message(posted);
        }
    }

    /// Handle one message from the panel. Untrusted origins and unknown
    /// shapes are dropped.
    pub fn on_host_message(&mut self, posted: PostedMessage) {
        if !self.policy.allows(posted.origin()) {
            tracing::debug!(origin = %posted.origin(), "form dropping message from untrusted origin");
            return;
        }

        match HostMessage::from_envelope(posted.envelope()) {
            Some(HostMessage::ProductData(Some(product))) => {
                self.editing_id = Some(product.id);
                for tag in &product.tags {
                    self.tags.add(tag);
                }
                self.draft = ProductDraft::from_product(&product);
                self.errors.clear();
            }
            Some(HostMessage::ProductData(None)) | Some(HostMessage::ResetForm) => self.reset(),
            None => {
                tracing::debug!(kind = posted.envelope().kind(), "form dropping unrecognized message");
            }
        }
    }

    /// Validate and, if clean, send the submission. Field errors block the
    /// send entirely; nothing goes over the wire.
    pub fn submit(&mut self, today: NaiveDate) -> Result<(), Vec<FieldError>> {
        let errors = self.draft.validate(today, &self.providers);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        self.errors.clear();
        let payload = SubmitPayload {
            id: self.editing_id,
            status: SubmitStatus::Success,
            data: self.draft.clone().into_patch(),
        };
        self.endpoint
            .post(FormMessage::DataAfterSubmitForm(payload).to_envelope());
        Ok(())
    }

    /// Report a post-validation failure (e.g. the thumbnail could not be
    /// resolved). The panel closes the modal and surfaces the failure.
    pub fn report_failure(&self) {
        let payload = SubmitPayload {
            id: self.editing_id,
            status: SubmitStatus::Failure,
            data: stockdeck_catalog::ProductPatch::default(),
        };
        self.endpoint
            .post(FormMessage::DataAfterSubmitForm(payload).to_envelope());
    }

    /// Dismiss without submitting.
    pub fn cancel(&mut self) {
        self.endpoint.post(FormMessage::CloseModal.to_envelope());
        self.reset();
    }

    fn reset(&mut self) {
        self.editing_id = None;
        self.draft = ProductDraft::default();
        self.errors.clear();
    }
}
