//! List-view queries: pure filtering and sorting over a read-only view.
//!
//! The table never writes the collection; it renders what `apply` returns
//! and routes edit/delete intents through the controller.

use std::cmp::Ordering;

use chrono::NaiveDate;

use stockdeck_catalog::{Category, Product, ProductStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Quantity,
    Price,
    TagCount,
    Status,
    ExpiredAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascend,
    Descend,
}

/// Filter/sort parameters, combined conjunctively. Empty filter lists match
/// everything.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub name_contains: Option<String>,
    pub provider_contains: Option<String>,
    pub categories: Vec<Category>,
    pub statuses: Vec<ProductStatus>,
    /// Any-of match against the product's tags.
    pub tags: Vec<String>,
    /// Inclusive range; products without an expiry date never match.
    pub expires_between: Option<(NaiveDate, NaiveDate)>,
    pub sort: Option<(SortKey, SortOrder)>,
}

impl ListQuery {
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut rows: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();

        if let Some((key, order)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare_by(key, a, b);
                match order {
                    SortOrder::Ascend => ordering,
                    SortOrder::Descend => ordering.reverse(),
                }
            });
        }

        rows
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(needle) = &self.name_contains {
            if !contains_ignore_case(&product.name, needle) {
                return false;
            }
        }
        if let Some(needle) = &self.provider_contains {
            if !contains_ignore_case(&product.provider, needle) {
                return false;
            }
        }
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&product.status) {
            return false;
        }
        if !self.tags.is_empty() && !product.tags.iter().any(|t| self.tags.contains(t)) {
            return false;
        }
        if let Some((start, end)) = self.expires_between {
            match product.expired_at {
                Some(date) => {
                    if date < start || date > end {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn compare_by(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        SortKey::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortKey::TagCount => a.tags.len().cmp(&b.tags.len()),
        SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        SortKey::ExpiredAt => a.expired_at.cmp(&b.expired_at),
    }
}
