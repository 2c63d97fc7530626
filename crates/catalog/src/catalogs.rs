//! Provider and tag catalogs.
//!
//! Providers are a fixed list; tags are extensible at edit time and keep
//! insertion order for display.

/// Known providers. Fixed; the form rejects anything else.
pub const KNOWN_PROVIDERS: [&str; 6] = [
    "Acme Supplies",
    "Northwind Traders",
    "Globex",
    "Initech",
    "Fabrikam",
    "Umbrella Labs",
];

/// Seed tags offered by the form before any user additions.
pub const SEED_TAGS: [&str; 7] = [
    "new", "sale", "popular", "limited", "eco", "imported", "fragile",
];

/// Fixed catalog of known providers.
#[derive(Debug, Clone)]
pub struct ProviderCatalog {
    providers: Vec<String>,
}

impl Default for ProviderCatalog {
    fn default() -> Self {
        Self {
            providers: KNOWN_PROVIDERS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl ProviderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, provider: &str) -> bool {
        self.providers.iter().any(|p| p == provider)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Extensible tag catalog, insertion-ordered.
#[derive(Debug, Clone)]
pub struct TagCatalog {
    tags: Vec<String>,
    // Counter behind the "New item N" fallback names.
    next_index: usize,
}

impl Default for TagCatalog {
    fn default() -> Self {
        Self {
            tags: SEED_TAGS.iter().map(|t| t.to_string()).collect(),
            next_index: 0,
        }
    }
}

impl TagCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            tags: Vec::new(),
            next_index: 0,
        }
    }

    /// Add a tag, returning the name actually stored. A blank name falls
    /// back to a generated `New item N`. Re-adding an existing tag keeps the
    /// catalog unchanged.
    pub fn add(&mut self, name: &str) -> String {
        let name = name.trim();
        let name = if name.is_empty() {
            let generated = format!("New item {}", self.next_index);
            self.next_index += 1;
            generated
        } else {
            name.to_string()
        };

        if !self.contains(&name) {
            self.tags.push(name.clone());
        }
        name
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_catalog_knows_the_fixed_list() {
        let catalog = ProviderCatalog::new();
        assert!(catalog.contains("Globex"));
        assert!(!catalog.contains("Totally Real Vendors Inc"));
        assert_eq!(catalog.len(), KNOWN_PROVIDERS.len());
    }

    #[test]
    fn added_tags_keep_insertion_order() {
        let mut catalog = TagCatalog::empty();
        catalog.add("vegan");
        catalog.add("refurbished");
        catalog.add("vegan");

        let tags: Vec<&str> = catalog.iter().collect();
        assert_eq!(tags, vec!["vegan", "refurbished"]);
    }

    #[test]
    fn blank_names_fall_back_to_generated_items() {
        let mut catalog = TagCatalog::empty();
        assert_eq!(catalog.add(""), "New item 0");
        assert_eq!(catalog.add("   "), "New item 1");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn add_trims_surrounding_whitespace() {
        let mut catalog = TagCatalog::empty();
        assert_eq!(catalog.add("  vegan "), "vegan");
        assert!(catalog.contains("vegan"));
    }

    #[test]
    fn seeded_catalog_starts_with_the_mock_tags() {
        let catalog = TagCatalog::new();
        for tag in SEED_TAGS {
            assert!(catalog.contains(tag));
        }
    }
}
