use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockdeck_core::{Entity, ProductId, ValueObject};

/// Maximum length of a product name, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Product category (fixed enumeration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Footwear,
    Computers,
    Audio,
    Wearables,
    Food,
    Cameras,
    Accessories,
    Cosmetics,
    Pharmaceuticals,
    Nutrition,
    PersonalCare,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Electronics,
        Category::Footwear,
        Category::Computers,
        Category::Audio,
        Category::Wearables,
        Category::Food,
        Category::Cameras,
        Category::Accessories,
        Category::Cosmetics,
        Category::Pharmaceuticals,
        Category::Nutrition,
        Category::PersonalCare,
    ];

    /// Wire-level name, as exchanged with the embedded form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Footwear => "footwear",
            Category::Computers => "computers",
            Category::Audio => "audio",
            Category::Wearables => "wearables",
            Category::Food => "food",
            Category::Cameras => "cameras",
            Category::Accessories => "accessories",
            Category::Cosmetics => "cosmetics",
            Category::Pharmaceuticals => "pharmaceuticals",
            Category::Nutrition => "nutrition",
            Category::PersonalCare => "personal_care",
        }
    }
}

impl ValueObject for Category {}

/// Stock status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    InStock,
    OutOfStock,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 2] = [ProductStatus::InStock, ProductStatus::OutOfStock];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::InStock => "in_stock",
            ProductStatus::OutOfStock => "out_of_stock",
        }
    }
}

impl ValueObject for ProductStatus {}

/// The product record.
///
/// This shape doubles as the in-memory record and the interchange format
/// between the panel and the embedded form, so it is fully serde-visible.
/// The collection invariants (unique `id`, append order) live with the
/// collection owner, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Immutable once assigned; never minted by the form.
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub quantity: i64,
    pub price: f64,
    pub category: Category,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<NaiveDate>,
    /// Insertion order is display order; not significant for matching.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub status: ProductStatus,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new(),
            name: "Widget".to_string(),
            thumbnail: None,
            quantity: 5,
            price: 9.99,
            category: Category::Electronics,
            provider: "Acme Supplies".to_string(),
            expired_at: None,
            tags: vec!["new".to_string()],
            status: ProductStatus::InStock,
        }
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let mut product = sample();
        product.expired_at = NaiveDate::from_ymd_opt(2027, 1, 15);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["category"], "electronics");
        assert_eq!(json["status"], "in_stock");
        assert_eq!(json["expiredAt"], "2027-01-15");
        assert_eq!(json["price"], 9.99);
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let product = Product {
            tags: Vec::new(),
            ..sample()
        };
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("thumbnail").is_none());
        assert!(json.get("expiredAt").is_none());
        assert!(json.get("tags").is_none());
    }

    #[test]
    fn deserializes_the_interchange_shape() {
        let id = ProductId::new();
        let json = serde_json::json!({
            "id": id.to_string(),
            "name": "Trail Running Shoes",
            "quantity": 12,
            "price": 119.5,
            "category": "footwear",
            "provider": "Acme Supplies",
            "expiredAt": "2026-12-31",
            "tags": ["sale"],
            "status": "out_of_stock"
        });

        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.category, Category::Footwear);
        assert_eq!(product.status, ProductStatus::OutOfStock);
        assert_eq!(product.expired_at, NaiveDate::from_ymd_opt(2026, 12, 31));
    }

    #[test]
    fn category_wire_names_cover_all_variants() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.as_str());
        }
    }

    #[test]
    fn snake_case_survives_multi_word_variants() {
        assert_eq!(Category::PersonalCare.as_str(), "personal_care");
        assert_eq!(ProductStatus::OutOfStock.as_str(), "out_of_stock");
    }
}
