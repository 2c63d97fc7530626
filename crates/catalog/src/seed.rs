//! Static mock data used to seed the in-memory collection.
//!
//! State is lost on restart; this is the whole "database".

use chrono::NaiveDate;

use stockdeck_core::ProductId;

use crate::product::{Category, Product, ProductStatus};

fn product(
    name: &str,
    quantity: i64,
    price: f64,
    category: Category,
    provider: &str,
    tags: &[&str],
    status: ProductStatus,
    expired_at: Option<NaiveDate>,
) -> Product {
    Product {
        id: ProductId::new(),
        name: name.to_string(),
        thumbnail: None,
        quantity,
        price,
        category,
        provider: provider.to_string(),
        expired_at,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        status,
    }
}

/// Mock product set. Ids are minted fresh on every call.
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "Wireless Headphones",
            24,
            89.99,
            Category::Audio,
            "Globex",
            &["new", "popular"],
            ProductStatus::InStock,
            None,
        ),
        product(
            "Trail Running Shoes",
            12,
            119.50,
            Category::Footwear,
            "Acme Supplies",
            &["sale"],
            ProductStatus::InStock,
            None,
        ),
        product(
            "Mechanical Keyboard",
            3,
            74.00,
            Category::Computers,
            "Initech",
            &[],
            ProductStatus::OutOfStock,
            None,
        ),
        product(
            "4K Action Camera",
            7,
            249.00,
            Category::Cameras,
            "Initech",
            &["limited"],
            ProductStatus::InStock,
            None,
        ),
        product(
            "Vitamin C Serum",
            40,
            19.99,
            Category::Cosmetics,
            "Umbrella Labs",
            &["eco"],
            ProductStatus::InStock,
            NaiveDate::from_ymd_opt(2027, 3, 1),
        ),
        product(
            "Whey Protein Powder",
            18,
            34.90,
            Category::Nutrition,
            "Fabrikam",
            &["imported"],
            ProductStatus::InStock,
            NaiveDate::from_ymd_opt(2026, 12, 31),
        ),
        product(
            "Smart Watch",
            9,
            199.00,
            Category::Wearables,
            "Globex",
            &["new"],
            ProductStatus::InStock,
            None,
        ),
        product(
            "Espresso Beans",
            5,
            14.25,
            Category::Food,
            "Northwind Traders",
            &["popular", "imported"],
            ProductStatus::OutOfStock,
            NaiveDate::from_ymd_opt(2026, 11, 15),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let products = seed_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn seed_records_satisfy_the_field_constraints() {
        for product in seed_products() {
            assert!(!product.name.trim().is_empty());
            assert!(product.name.chars().count() <= crate::product::NAME_MAX_CHARS);
            assert!(product.quantity >= 1, "{}", product.name);
            assert!(product.price >= 0.0, "{}", product.name);
            assert!(
                crate::catalogs::KNOWN_PROVIDERS.contains(&product.provider.as_str()),
                "{} has unknown provider {}",
                product.name,
                product.provider
            );
        }
    }

    #[test]
    fn seed_tags_come_from_the_seed_catalog() {
        let catalog = crate::catalogs::TagCatalog::new();
        for product in seed_products() {
            for tag in &product.tags {
                assert!(catalog.contains(tag), "unknown seed tag {tag}");
            }
        }
    }
}
