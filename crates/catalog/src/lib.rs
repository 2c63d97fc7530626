//! Products domain module.
//!
//! This crate contains the product record shape and its business rules,
//! implemented purely as deterministic domain logic (no IO, no transport,
//! no presentation).

pub mod catalogs;
pub mod display;
pub mod draft;
pub mod patch;
pub mod product;
pub mod seed;

pub use catalogs::{ProviderCatalog, TagCatalog};
pub use draft::{FieldError, ProductDraft};
pub use patch::ProductPatch;
pub use product::{Category, NAME_MAX_CHARS, Product, ProductStatus};
