//! Built-in demo catalog
//!
//! Eighteen Malaysian grocery SKUs covering every aisle the navigation map
//! knows about. Image references are not bundled with the engine.

use shared::models::{CatalogItem, Promotion, PromotionKind};

fn item(
    id: &str,
    name: &str,
    brand: &str,
    category: &str,
    price: f64,
    location: &str,
    aisle: &str,
    barcode: &str,
    promotion: Option<Promotion>,
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
        promotion,
    }
}

fn discount(original_price: f64, description: &str) -> Option<Promotion> {
    Some(Promotion {
        kind: PromotionKind::Discount { original_price },
        description: description.to_string(),
    })
}

fn bundle(description: &str) -> Option<Promotion> {
    Some(Promotion {
        kind: PromotionKind::Bundle,
        description: description.to_string(),
    })
}

fn special(description: &str) -> Option<Promotion> {
    Some(Promotion {
        kind: PromotionKind::Special,
        description: description.to_string(),
    })
}

pub(super) fn mock_items() -> Vec<CatalogItem> {
    vec![
        item(
            "1",
            "Fresh Milk Full Cream",
            "Farm Fresh",
            "Dairy",
            8.90,
            "Dairy Section, Top Shelf",
            "Dairy Section",
            "1234567890123",
            discount(10.90, "20% OFF - Special Weekend Deal"),
        ),
        item(
            "1b",
            "Full Cream Fresh Milk",
            "Dutch Lady",
            "Dairy",
            9.50,
            "Dairy Section, Top Shelf",
            "Dairy Section",
            "1234567890124",
            None,
        ),
        item(
            "1c",
            "UHT Full Cream Milk",
            "Marigold",
            "Dairy",
            7.90,
            "Dairy Section, Top Shelf",
            "Dairy Section",
            "1234567890125",
            bundle("Buy 2 Get 1 Free"),
        ),
        item(
            "2",
            "Whole Wheat Bread",
            "Gardenia",
            "Bakery",
            4.50,
            "Bakery Section, Fresh Goods",
            "Bakery Section",
            "2234567890123",
            None,
        ),
        item(
            "2b",
            "Wholemeal Bread",
            "Massimo",
            "Bakery",
            4.20,
            "Bakery Section, Fresh Goods",
            "Bakery Section",
            "2234567890124",
            special("Fresh Daily Baked"),
        ),
        item(
            "3",
            "Grade A Eggs",
            "Farm Fresh",
            "Dairy",
            12.90,
            "Dairy Section, Refrigerated",
            "Dairy Section",
            "3234567890123",
            None,
        ),
        item(
            "4",
            "Orange Juice",
            "Minute Maid",
            "Beverages",
            11.50,
            "Aisle 2, Left Side",
            "Aisle 2",
            "4234567890123",
            discount(13.90, "Save RM2.40!"),
        ),
        item(
            "4b",
            "Freshly Squeezed Orange",
            "Tropicana",
            "Beverages",
            10.90,
            "Aisle 2, Left Side",
            "Aisle 2",
            "4234567890124",
            None,
        ),
        item(
            "5",
            "Chicken Breast",
            "Ayamas",
            "Meat",
            18.90,
            "Meat & Poultry, Chilled",
            "Meat & Poultry",
            "5234567890123",
            None,
        ),
        item(
            "6",
            "Cavendish Bananas",
            "Local Farm",
            "Produce",
            5.90,
            "Produce Section, Fresh Fruits",
            "Produce Section",
            "6234567890123",
            None,
        ),
        item(
            "7",
            "Cherry Tomatoes",
            "Cameron Highlands",
            "Produce",
            6.90,
            "Produce Section, Vegetables",
            "Produce Section",
            "7234567890123",
            None,
        ),
        item(
            "8",
            "Spaghetti Pasta",
            "San Remo",
            "Pantry",
            5.50,
            "Aisle 4, Pasta Section",
            "Aisle 4",
            "8234567890123",
            None,
        ),
        item(
            "9",
            "Extra Virgin Olive Oil",
            "Bertolli",
            "Pantry",
            24.90,
            "Aisle 4, Cooking Oils",
            "Aisle 4",
            "9234567890123",
            discount(29.90, "RM5 OFF Premium Quality"),
        ),
        item(
            "10",
            "Cornflakes",
            "Kellogg's",
            "Breakfast",
            12.90,
            "Aisle 3, Cereals",
            "Aisle 3",
            "1034567890123",
            None,
        ),
        item(
            "11",
            "Chocolate Milk",
            "Dutch Lady",
            "Dairy",
            9.90,
            "Dairy Section, Refrigerated",
            "Dairy Section",
            "1134567890123",
            bundle("Buy 3 for RM25"),
        ),
        item(
            "12",
            "Instant Noodles",
            "Maggi",
            "Pantry",
            8.50,
            "Aisle 1, Quick Meals",
            "Aisle 1",
            "1234567890126",
            bundle("5-Pack Bundle Deal"),
        ),
        item(
            "13",
            "Fresh Curry Leaves",
            "Local Farm",
            "Produce",
            0.05,
            "Produce Section, Herbs & Spices",
            "Produce Section",
            "1334567890123",
            special("Priced per gram - RM0.05/g"),
        ),
        item(
            "14",
            "Red Chili Fresh",
            "Cameron Highlands",
            "Produce",
            0.08,
            "Produce Section, Herbs & Spices",
            "Produce Section",
            "1434567890123",
            special("Priced per gram - RM0.08/g"),
        ),
    ]
}
