//! Presentation helpers: pure mapping/formatting functions shared by the
//! list view and the modal chrome.

use crate::product::{Product, ProductStatus};

/// Palette for tag chips. A tag is bucketed by its first character so the
/// same tag always renders in the same color.
pub const TAG_COLORS: [&str; 11] = [
    "magenta", "volcano", "orange", "gold", "lime", "green", "cyan", "blue", "geekblue", "purple",
    "red",
];

pub fn color_for_tag(tag: &str) -> &'static str {
    match tag.to_lowercase().chars().next() {
        Some(c) => TAG_COLORS[(c as usize) % TAG_COLORS.len()],
        None => TAG_COLORS[0],
    }
}

/// Two decimal places, `$ ` prefixed.
pub fn format_price(price: f64) -> String {
    format!("$ {:.2}", price)
}

/// Modal title: edit mode names the product, create mode is generic.
pub fn modal_title(editing: Option<&Product>) -> String {
    match editing {
        Some(product) => format!("Update {}", product.name),
        None => "Create new product".to_string(),
    }
}

/// Badge text and color for a stock status.
pub fn status_badge(status: ProductStatus) -> (&'static str, &'static str) {
    match status {
        ProductStatus::InStock => ("In Stock", "green"),
        ProductStatus::OutOfStock => ("Out of Stock", "red"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Category;
    use stockdeck_core::ProductId;

    #[test]
    fn tag_color_is_stable_and_case_insensitive() {
        assert_eq!(color_for_tag("new"), color_for_tag("new"));
        assert_eq!(color_for_tag("Sale"), color_for_tag("sale"));
    }

    #[test]
    fn empty_tag_gets_the_first_palette_entry() {
        assert_eq!(color_for_tag(""), TAG_COLORS[0]);
    }

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(9.99), "$ 9.99");
        assert_eq!(format_price(14.0), "$ 14.00");
        assert_eq!(format_price(0.0), "$ 0.00");
        assert_eq!(format_price(119.5), "$ 119.50");
    }

    #[test]
    fn modal_title_names_the_product_in_edit_mode() {
        let product = Product {
            id: ProductId::new(),
            name: "Widget".to_string(),
            thumbnail: None,
            quantity: 1,
            price: 1.0,
            category: Category::Electronics,
            provider: "Globex".to_string(),
            expired_at: None,
            tags: Vec::new(),
            status: ProductStatus::InStock,
        };
        assert_eq!(modal_title(Some(&product)), "Update Widget");
        assert_eq!(modal_title(None), "Create new product");
    }

    #[test]
    fn status_badges_match_the_table_rendering() {
        assert_eq!(status_badge(ProductStatus::InStock), ("In Stock", "green"));
        assert_eq!(status_badge(ProductStatus::OutOfStock), ("Out of Stock", "red"));
    }
}
