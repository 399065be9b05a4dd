//! Assistant knowledge tables
//!
//! Static recipe cards, ingredient synonyms, and canned replies. Table
//! order is significant: lookups scan top to bottom and the first hit
//! wins.

/// A message containing any of these words is treated as a recipe query.
pub(super) const RECIPE_KEYWORDS: &[&str] =
    &["recipe", "make", "cook", "prepare", "ingredients", "need"];

pub(super) struct Recipe {
    /// Lowercase phrase matched against the user message.
    pub key: &'static str,
    /// Display name used in the reply text.
    pub name: &'static str,
    /// (ingredient name, amount) pairs.
    pub ingredients: &'static [(&'static str, &'static str)],
}

pub(super) const RECIPES: &[Recipe] = &[
    Recipe {
        key: "buttermilk chicken",
        name: "Buttermilk Chicken",
        ingredients: &[
            ("Chicken Breast", "500g"),
            ("Full Cream Fresh Milk", "1 cup (for buttermilk)"),
            ("Eggs", "2 pieces"),
            ("Olive Oil", "2 tbsp"),
            ("Curry Leaves", "10g"),
            ("Red Chili", "5g"),
        ],
    },
    Recipe {
        key: "spaghetti",
        name: "Spaghetti",
        ingredients: &[
            ("Spaghetti Pasta", "400g"),
            ("Olive Oil", "3 tbsp"),
            ("Cherry Tomatoes", "200g"),
        ],
    },
    Recipe {
        key: "french toast",
        name: "French Toast",
        ingredients: &[
            ("Bread", "4 slices"),
            ("Eggs", "2 pieces"),
            ("Fresh Milk", "1/4 cup"),
        ],
    },
    Recipe {
        key: "banana smoothie",
        name: "Banana Smoothie",
        ingredients: &[("Bananas", "2 pieces"), ("Fresh Milk", "1 cup")],
    },
];

/// Fallback synonyms for ingredient lookup when no catalog name contains
/// the ingredient phrase directly. First matching key terminates the
/// scan, whether or not its target resolves to a stocked item.
pub(super) const SYNONYMS: &[(&str, &str)] = &[
    ("chicken breast", "chicken breast"),
    ("chicken", "chicken"),
    ("milk", "milk"),
    ("eggs", "eggs"),
    ("egg", "eggs"),
    ("olive oil", "olive oil"),
    ("oil", "olive oil"),
    ("bread", "bread"),
    ("spaghetti", "spaghetti"),
    ("pasta", "pasta"),
    ("tomatoes", "tomatoes"),
    ("tomato", "tomatoes"),
    ("bananas", "bananas"),
    ("banana", "bananas"),
    ("curry", "curry"),
    ("chili", "chili"),
    ("chilli", "chili"),
];

/// Canned replies, keyed by substring of the lowercased user message.
pub(super) const RESPONSES: &[(&str, &str)] = &[
    (
        "item details",
        "I can help you find information about any item in the store. Please tell me which product you're interested in, and I'll provide details like price, location, and available promotions.",
    ),
    (
        "payment help",
        "For payment issues: 1) Ensure your card is properly inserted, 2) Check if contactless payment is enabled, 3) Try an alternative payment method. If problems persist, our staff at checkout counter 3 can assist you.",
    ),
    (
        "customer service",
        "Our customer service team is here to help! You can find staff members at the information counter near the entrance, or press the assistance button on your trolley for immediate help.",
    ),
    (
        "device issue",
        "If your SwiftCart device is malfunctioning: 1) Try restarting by logging out and back in, 2) Check if the screen is clean and responsive, 3) If the scanner isn't working, use manual barcode entry. For urgent issues, please visit the customer service desk.",
    ),
    (
        "store location",
        "Use the store map feature in the search menu to navigate. I can also guide you to specific aisles. Which section are you looking for?",
    ),
    (
        "return policy",
        "Our return policy allows returns within 30 days with receipt. Perishable items must be returned within 7 days. Fresh produce and dairy can be exchanged at the customer service counter.",
    ),
    (
        "promotion",
        "Current promotions include: Farm Fresh Milk 20% off, Marigold Milk Buy 2 Get 1 Free, Minute Maid Juice save RM2.40, and Bertolli Olive Oil RM5 off. Check items with the purple promotion badge!",
    ),
    (
        "brand",
        "We carry popular brands including Farm Fresh, Dutch Lady, Marigold, Gardenia, Massimo, Ayamas, and many more. Use the brand comparison feature in item search to compare prices.",
    ),
    (
        "compare",
        "To compare brands: Go to Search Items \u{2192} Select a category \u{2192} Tap \"Compare Brands\" to see price differences between similar products from different brands.",
    ),
    (
        "checkout",
        "To checkout: 1) Ensure all items are scanned, 2) Review your cart total, 3) Tap \"Proceed to Payment\" button, 4) Choose your payment method. The system will verify payment before you can exit.",
    ),
    (
        "scan",
        "Items are automatically detected when placed in your trolley using weight and camera sensors. You can also manually scan barcodes if needed. Items detected will appear in your cart instantly.",
    ),
];

pub(super) const DEFAULT_RESPONSE: &str = "I'm your SwiftCart assistant! I can help with item information, payment issues, device problems, and general store inquiries. How can I assist you today?";

pub(super) const RECIPE_FALLBACK: &str = "I can help you find ingredients for recipes! Try asking about: Buttermilk Chicken, Spaghetti, French Toast, or Banana Smoothie.";

pub const GREETING: &str = "Hello! I'm your SwiftCart assistant. How can I help you today?";
