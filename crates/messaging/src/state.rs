//! Modal state machine.
//!
//! Two states, and every inbound message is resolved against them before
//! anything else happens. Messages that arrive in the wrong state are
//! ignored without a transition; the collection owner only ever sees
//! [`Transition::Submitted`] for a message that was legal where it landed.

use crate::message::{FormMessage, SubmitPayload};

/// Modal visibility as the protocol sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    /// Open, form seeded, waiting for a submission or dismissal. There is no
    /// timeout; a form that never answers leaves the modal open until the
    /// user closes it.
    OpenAwaitingSubmit,
}

/// Outcome of feeding one inbound message to the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// A submission arrived while open; the modal is now closed.
    Submitted(SubmitPayload),
    /// The form asked to close without submitting; the modal is now closed.
    Dismissed,
    /// The message was not legal in the current state; nothing changed.
    Ignored,
}

#[derive(Debug, Default)]
pub struct ProtocolState {
    modal: ModalState,
}

impl ProtocolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_open(&self) -> bool {
        self.modal == ModalState::OpenAwaitingSubmit
    }

    /// Open (or re-open) the modal. Idempotent.
    pub fn open(&mut self) {
        self.modal = ModalState::OpenAwaitingSubmit;
    }

    /// Close the modal without consuming an inbound message (user-initiated
    /// cancel).
    pub fn close(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Resolve one inbound message against the current state.
    pub fn on_inbound(&mut self, message: FormMessage) -> Transition {
        match (self.modal, message) {
            (ModalState::OpenAwaitingSubmit, FormMessage::DataAfterSubmitForm(payload)) => {
                self.modal = ModalState::Closed;
                Transition::Submitted(payload)
            }
            (ModalState::OpenAwaitingSubmit, FormMessage::CloseModal) => {
                self.modal = ModalState::Closed;
                Transition::Dismissed
            }
            (ModalState::Closed, _) => Transition::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::SubmitStatus;
    use stockdeck_catalog::ProductPatch;

    fn submission() -> FormMessage {
        FormMessage::DataAfterSubmitForm(SubmitPayload {
            id: None,
            status: SubmitStatus::Success,
            data: ProductPatch::default(),
        })
    }

    #[test]
    fn starts_closed() {
        let state = ProtocolState::new();
        assert_eq!(state.modal(), ModalState::Closed);
    }

    #[test]
    fn submission_while_open_closes_and_yields_the_payload() {
        let mut state = ProtocolState::new();
        state.open();

        match state.on_inbound(submission()) {
            Transition::Submitted(payload) => assert_eq!(payload.status, SubmitStatus::Success),
            other => panic!("unexpected transition: {other:?}"),
        }
        assert_eq!(state.modal(), ModalState::Closed);
    }

    #[test]
    fn close_modal_while_open_dismisses() {
        let mut state = ProtocolState::new();
        state.open();

        assert_eq!(state.on_inbound(FormMessage::CloseModal), Transition::Dismissed);
        assert_eq!(state.modal(), ModalState::Closed);
    }

    #[test]
    fn inbound_while_closed_is_ignored() {
        let mut state = ProtocolState::new();

        assert_eq!(state.on_inbound(submission()), Transition::Ignored);
        assert_eq!(state.on_inbound(FormMessage::CloseModal), Transition::Ignored);
        assert_eq!(state.modal(), ModalState::Closed);
    }

    #[test]
    fn duplicate_submission_after_close_is_ignored() {
        let mut state = ProtocolState::new();
        state.open();

        assert!(matches!(state.on_inbound(submission()), Transition::Submitted(_)));
        // The first submission closed the modal; the duplicate lands closed.
        assert_eq!(state.on_inbound(submission()), Transition::Ignored);
    }

    #[test]
    fn reopen_after_dismissal_accepts_a_new_submission() {
        let mut state = ProtocolState::new();
        state.open();
        state.on_inbound(FormMessage::CloseModal);

        state.open();
        assert!(matches!(state.on_inbound(submission()), Transition::Submitted(_)));
    }
}
