//! Cart line model

use super::item::CatalogItem;
use serde::{Deserialize, Serialize};

/// One distinct product in the active session's cart.
///
/// Invariant (enforced by the ledger): at most one line per catalog `id`.
/// Repeated detections of the same product increment `quantity` and
/// accumulate `weight` on the existing line instead of duplicating it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CatalogItem,
    /// Always at least 1. Decrementing to 0 is removal, not an edit.
    pub quantity: u32,
    /// Cumulative sensed weight in kg, kept only for weight-detected items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl CartLine {
    pub fn new(item: CatalogItem, quantity: u32, weight: Option<f64>) -> Self {
        Self {
            item,
            quantity,
            weight,
        }
    }

    /// Catalog id of the underlying product.
    pub fn id(&self) -> &str {
        &self.item.id
    }
}
