//! Product catalog
//!
//! Read-only lookup over the built-in item set. Loaded once at startup;
//! everything else in the engine borrows items from here.

mod data;

use shared::models::CatalogItem;

/// In-memory product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Load the built-in catalog.
    pub fn load() -> Self {
        let items = data::mock_items();
        tracing::debug!(count = items.len(), "catalog loaded");
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact id lookup.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Exact barcode lookup.
    pub fn by_barcode(&self, code: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.barcode == code)
    }

    /// Case-insensitive substring search over name and brand.
    ///
    /// An empty or whitespace-only query matches every item.
    pub fn search(&self, query: &str) -> Vec<&CatalogItem> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                needle.is_empty()
                    || item.name.to_lowercase().contains(&needle)
                    || item.brand.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Items in the given category, exact match.
    pub fn by_category(&self, category: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for item in &self.items {
            if !out.contains(&item.category.as_str()) {
                out.push(&item.category);
            }
        }
        out
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for item in &self.items {
            if !out.contains(&item.brand.as_str()) {
                out.push(&item.brand);
            }
        }
        out
    }
}
