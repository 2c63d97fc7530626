//! Form-side draft state and field-level validation.

use chrono::NaiveDate;

use crate::catalogs::ProviderCatalog;
use crate::patch::ProductPatch;
use crate::product::{Category, NAME_MAX_CHARS, Product, ProductStatus};

/// A field-level validation error. These are reported inline by the form and
/// block submission; no payload is sent while any exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// In-progress form state. Everything except `name` is optional until
/// validation; `name` defaults to empty, which validation rejects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub thumbnail: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub provider: Option<String>,
    pub expired_at: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub status: Option<ProductStatus>,
}

impl ProductDraft {
    /// Pre-fill the draft from an existing product (edit mode).
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            thumbnail: product.thumbnail.clone(),
            quantity: Some(product.quantity),
            price: Some(product.price),
            category: Some(product.category),
            provider: Some(product.provider.clone()),
            expired_at: product.expired_at,
            tags: product.tags.clone(),
            status: Some(product.status),
        }
    }

    /// Field-level validation. `today` is the reference date for the expiry
    /// rule; passing it in keeps the rule deterministic.
    pub fn validate(&self, today: NaiveDate, providers: &ProviderCatalog) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        } else if self.name.chars().count() > NAME_MAX_CHARS {
            errors.push(FieldError::new("name", "Name cannot exceed 100 characters"));
        }

        match &self.provider {
            None => errors.push(FieldError::new("provider", "Provider is required")),
            Some(provider) if !providers.contains(provider) => {
                errors.push(FieldError::new("provider", "Unknown provider"));
            }
            _ => {}
        }

        match self.expired_at {
            Some(date) if date < today => {
                errors.push(FieldError::new(
                    "expired_at",
                    "Expiry date cannot be in the past",
                ));
            }
            _ => {}
        }

        if self.category.is_none() {
            errors.push(FieldError::new("category", "Category is required"));
        }

        match self.quantity {
            None => errors.push(FieldError::new("quantity", "Quantity is required")),
            Some(quantity) if quantity < 1 => {
                errors.push(FieldError::new("quantity", "Quantity must be at least 1"));
            }
            _ => {}
        }

        match self.price {
            None => errors.push(FieldError::new("price", "Price is required")),
            Some(price) if !(price.is_finite() && price >= 0.0) => {
                errors.push(FieldError::new("price", "Price must be at least 0"));
            }
            _ => {}
        }

        if self.status.is_none() {
            errors.push(FieldError::new("status", "Status is required"));
        }

        errors
    }

    /// Convert the draft into the submission payload. Only present fields
    /// land in the patch.
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: if self.name.trim().is_empty() {
                None
            } else {
                Some(self.name)
            },
            thumbnail: self.thumbnail,
            quantity: self.quantity,
            price: self.price,
            category: self.category,
            provider: self.provider,
            expired_at: self.expired_at,
            tags: if self.tags.is_empty() {
                None
            } else {
                Some(self.tags)
            },
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdeck_core::ProductId;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "Espresso Beans".to_string(),
            quantity: Some(3),
            price: Some(14.25),
            category: Some(Category::Food),
            provider: Some("Northwind Traders".to_string()),
            status: Some(ProductStatus::InStock),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn a_valid_draft_produces_no_errors() {
        assert!(valid_draft().validate(today(), &ProviderCatalog::new()).is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let draft = ProductDraft {
            name: "   ".to_string(),
            ..valid_draft()
        };
        let errors = draft.validate(today(), &ProviderCatalog::new());
        assert!(errors.iter().any(|e| e.field == "name" && e.message == "Name is required"));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let draft = ProductDraft {
            name: "x".repeat(NAME_MAX_CHARS + 1),
            ..valid_draft()
        };
        let errors = draft.validate(today(), &ProviderCatalog::new());
        assert!(errors.iter().any(|e| e.message == "Name cannot exceed 100 characters"));
    }

    #[test]
    fn name_of_exactly_the_limit_passes() {
        let draft = ProductDraft {
            name: "x".repeat(NAME_MAX_CHARS),
            ..valid_draft()
        };
        assert!(draft.validate(today(), &ProviderCatalog::new()).is_empty());
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let draft = ProductDraft {
            provider: Some("Definitely Not A Vendor".to_string()),
            ..valid_draft()
        };
        let errors = draft.validate(today(), &ProviderCatalog::new());
        assert!(errors.iter().any(|e| e.field == "provider" && e.message == "Unknown provider"));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let draft = ProductDraft {
            quantity: Some(0),
            ..valid_draft()
        };
        let errors = draft.validate(today(), &ProviderCatalog::new());
        assert!(errors.iter().any(|e| e.message == "Quantity must be at least 1"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let draft = ProductDraft {
            price: Some(-0.01),
            ..valid_draft()
        };
        let errors = draft.validate(today(), &ProviderCatalog::new());
        assert!(errors.iter().any(|e| e.message == "Price must be at least 0"));
    }

    #[test]
    fn non_finite_price_is_rejected() {
        for price in [f64::NAN, f64::INFINITY] {
            let draft = ProductDraft {
                price: Some(price),
                ..valid_draft()
            };
            let errors = draft.validate(today(), &ProviderCatalog::new());
            assert!(errors.iter().any(|e| e.field == "price"), "price {price} passed");
        }
    }

    #[test]
    fn zero_price_passes() {
        let draft = ProductDraft {
            price: Some(0.0),
            ..valid_draft()
        };
        assert!(draft.validate(today(), &ProviderCatalog::new()).is_empty());
    }

    #[test]
    fn past_expiry_is_rejected_and_today_passes() {
        let yesterday = today().pred_opt().unwrap();
        let draft = ProductDraft {
            expired_at: Some(yesterday),
            ..valid_draft()
        };
        let errors = draft.validate(today(), &ProviderCatalog::new());
        assert!(errors.iter().any(|e| e.field == "expired_at"));

        let draft = ProductDraft {
            expired_at: Some(today()),
            ..valid_draft()
        };
        assert!(draft.validate(today(), &ProviderCatalog::new()).is_empty());
    }

    #[test]
    fn every_missing_required_field_is_reported() {
        let errors = ProductDraft::default().validate(today(), &ProviderCatalog::new());
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        for field in ["name", "provider", "category", "quantity", "price", "status"] {
            assert!(fields.contains(&field), "missing error for {field}");
        }
    }

    #[test]
    fn round_trips_product_to_draft_to_patch() {
        let product = Product {
            id: ProductId::new(),
            name: "Smart Watch".to_string(),
            thumbnail: Some("watch.png".to_string()),
            quantity: 9,
            price: 199.0,
            category: Category::Wearables,
            provider: "Globex".to_string(),
            expired_at: None,
            tags: vec!["new".to_string()],
            status: ProductStatus::InStock,
        };

        let patch = ProductDraft::from_product(&product).into_patch();
        let mut target = product.clone();
        patch.apply_to(&mut target);
        assert_eq!(target, product);
    }
}
