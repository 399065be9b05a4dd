//! Purchase history sample
//!
//! Past purchases shown on the profile screen. This is a fixed read-only
//! sample, not a persistence layer.

use super::cart::CartLine;
use super::item::CatalogItem;
use serde::{Deserialize, Serialize};

/// One completed purchase from a previous visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRecord {
    pub id: u32,
    /// Purchase date, ISO "YYYY-MM-DD".
    pub date: String,
    /// Local time of day, "HH:MM".
    pub time: String,
    pub items: Vec<CartLine>,
    pub total: f64,
    pub payment_method: String,
    pub points_earned: u32,
}

fn history_item(
    id: &str,
    name: &str,
    brand: &str,
    category: &str,
    price: f64,
    location: &str,
    aisle: &str,
    barcode: &str,
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
        price,
        location: location.to_string(),
        aisle: aisle.to_string(),
        barcode: barcode.to_string(),
        image: None,
        promotion: None,
    }
}

/// The fixed purchase history sample shown to logged-in members.
pub fn sample_history() -> Vec<PurchaseRecord> {
    vec![
        PurchaseRecord {
            id: 1,
            date: "2025-10-30".to_string(),
            time: "14:35".to_string(),
            total: 45.50,
            payment_method: "Credit Card".to_string(),
            points_earned: 45,
            items: vec![
                CartLine::new(
                    history_item(
                        "1",
                        "Fresh Milk Full Cream",
                        "Farm Fresh",
                        "Dairy",
                        8.90,
                        "Dairy Section",
                        "Dairy Section",
                        "1234567890123",
                    ),
                    2,
                    None,
                ),
                CartLine::new(
                    history_item(
                        "2",
                        "Whole Wheat Bread",
                        "Gardenia",
                        "Bakery",
                        4.50,
                        "Bakery Section",
                        "Bakery Section",
                        "2234567890123",
                    ),
                    1,
                    None,
                ),
                CartLine::new(
                    history_item(
                        "3",
                        "Free Range Eggs (10pcs)",
                        "Sunshine",
                        "Eggs",
                        12.90,
                        "Refrigerated Section",
                        "Aisle 2",
                        "3234567890123",
                    ),
                    1,
                    None,
                ),
                CartLine::new(
                    history_item(
                        "4",
                        "Red Chili",
                        "Local Farm",
                        "Fresh Produce",
                        0.45,
                        "Vegetable Section",
                        "Fresh Produce",
                        "4234567890123",
                    ),
                    1,
                    Some(150.0),
                ),
                CartLine::new(
                    history_item(
                        "5",
                        "Basmati Rice 5kg",
                        "Faiza",
                        "Grains",
                        18.90,
                        "Dry Goods",
                        "Aisle 3",
                        "5234567890123",
                    ),
                    1,
                    None,
                ),
            ],
        },
        PurchaseRecord {
            id: 2,
            date: "2025-10-22".to_string(),
            time: "19:12".to_string(),
            total: 28.70,
            payment_method: "E-Wallet".to_string(),
            points_earned: 28,
            items: vec![
                CartLine::new(
                    history_item(
                        "10",
                        "Cornflakes",
                        "Kellogg's",
                        "Breakfast",
                        12.90,
                        "Aisle 3, Cereals",
                        "Aisle 3",
                        "1034567890123",
                    ),
                    1,
                    None,
                ),
                CartLine::new(
                    history_item(
                        "11",
                        "Chocolate Milk",
                        "Dutch Lady",
                        "Dairy",
                        9.90,
                        "Dairy Section, Refrigerated",
                        "Dairy Section",
                        "1134567890123",
                    ),
                    1,
                    None,
                ),
                CartLine::new(
                    history_item(
                        "15",
                        "Biscuits Assorted",
                        "Julie's",
                        "Snacks",
                        5.90,
                        "Aisle 5, Snacks",
                        "Aisle 5",
                        "1534567890123",
                    ),
                    1,
                    None,
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_history_is_stable() {
        let history = sample_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].total, 45.50);
        assert_eq!(history[0].items.len(), 5);
        assert_eq!(history[1].payment_method, "E-Wallet");
    }
}
