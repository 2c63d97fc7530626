//! The in-memory product collection.
//!
//! An append-ordered sequence with unique ids. Only the controller holds a
//! mutable handle; presentation code sees `&[Product]`.

use stockdeck_catalog::{Product, ProductPatch};
use stockdeck_core::{DomainError, DomainResult, ProductId};

#[derive(Debug, Default)]
pub struct ProductCollection {
    products: Vec<Product>,
}

impl ProductCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from seed data, rejecting duplicate ids.
    pub fn seeded(products: Vec<Product>) -> DomainResult<Self> {
        let mut collection = Self::new();
        for product in products {
            collection.append(product)?;
        }
        Ok(collection)
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Append a product. Fails on a duplicate id.
    pub fn append(&mut self, product: Product) -> DomainResult<()> {
        if self.contains(&product.id) {
            return Err(DomainError::conflict(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        self.products.push(product);
        Ok(())
    }

    /// Merge a patch into the product with the given id. Returns whether a
    /// product matched; no match is a no-op, not an error.
    pub fn merge(&mut self, id: &ProductId, patch: &ProductPatch) -> bool {
        match self.products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                patch.apply_to(product);
                true
            }
            None => false,
        }
    }

    /// Remove and return the product with the given id, if present.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == id)?;
        Some(self.products.remove(index))
    }
}
