//! Catalog item model

use serde::{Deserialize, Serialize};

/// Static product record.
///
/// The catalog is loaded once at startup and never mutated. `id` and
/// `barcode` are unique across the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Unit price in Malaysian Ringgit. Weighed produce is priced per gram.
    pub price: f64,
    /// Human-readable shelf location, e.g. "Dairy Section, Top Shelf".
    pub location: String,
    /// Coarse zone identifier used for navigation lookup.
    pub aisle: String,
    pub barcode: String,
    /// Presentational image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<Promotion>,
}

/// Promotion metadata attached to a catalog item.
///
/// Purely decorative: no expiry or date logic, no effect on pricing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promotion {
    #[serde(flatten)]
    pub kind: PromotionKind,
    pub description: String,
}

/// Promotion kind, tagged the way the storefront displays it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PromotionKind {
    Discount { original_price: f64 },
    Bundle,
    Special,
}
