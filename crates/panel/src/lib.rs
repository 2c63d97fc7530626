//! The panel side of the inventory admin: the collection owner, the modal
//! controller, the embedded-form lifecycle, and the list-view queries.
//!
//! `PanelController` is the only writer of the product collection. The list
//! view reads `&[Product]` and routes edit/delete intents back through the
//! controller; the embedded form talks to it exclusively over the message
//! link.

pub mod collection;
pub mod controller;
pub mod form;
pub mod form_host;
pub mod list;
pub mod notify;

pub use collection::ProductCollection;
pub use controller::PanelController;
pub use form::FormPane;
pub use form_host::FormHost;
pub use list::{ListQuery, SortKey, SortOrder};
pub use notify::Notification;
