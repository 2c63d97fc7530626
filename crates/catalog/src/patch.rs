use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockdeck_core::{DomainError, DomainResult, ProductId, ValueObject};

use crate::product::{Category, Product, ProductStatus};

/// Partial product record, as carried by form submissions.
///
/// Merge semantics are field-wise: a present field overwrites, an absent
/// field leaves the target untouched. `id` is deliberately not part of the
/// patch; identity is assigned and matched by the collection owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// An empty string clears the thumbnail (the form sends "" when the
    /// upload is removed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}

impl ValueObject for ProductPatch {}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.thumbnail.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.provider.is_none()
            && self.expired_at.is_none()
            && self.tags.is_none()
            && self.status.is_none()
    }

    /// Merge present fields into an existing product. The product's `id` is
    /// never touched.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(thumbnail) = &self.thumbnail {
            product.thumbnail = if thumbnail.is_empty() {
                None
            } else {
                Some(thumbnail.clone())
            };
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(provider) = &self.provider {
            product.provider = provider.clone();
        }
        if let Some(expired_at) = self.expired_at {
            product.expired_at = Some(expired_at);
        }
        if let Some(tags) = &self.tags {
            product.tags = tags.clone();
        }
        if let Some(status) = self.status {
            product.status = status;
        }
    }

    /// Materialize a full product from this patch under a freshly assigned
    /// id. Fails when a required field is missing; optional fields default.
    pub fn into_product(self, id: ProductId) -> DomainResult<Product> {
        let name = self
            .name
            .ok_or_else(|| DomainError::validation("name is required"))?;
        let quantity = self
            .quantity
            .ok_or_else(|| DomainError::validation("quantity is required"))?;
        let price = self
            .price
            .ok_or_else(|| DomainError::validation("price is required"))?;
        let category = self
            .category
            .ok_or_else(|| DomainError::validation("category is required"))?;
        let provider = self
            .provider
            .ok_or_else(|| DomainError::validation("provider is required"))?;
        let status = self
            .status
            .ok_or_else(|| DomainError::validation("status is required"))?;

        Ok(Product {
            id,
            name,
            thumbnail: self.thumbnail.filter(|t| !t.is_empty()),
            quantity,
            price,
            category,
            provider,
            expired_at: self.expired_at,
            tags: self.tags.unwrap_or_default(),
            status,
        })
    }
}
