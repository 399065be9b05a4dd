//! In-kiosk assistant
//!
//! Keyword-driven reply engine plus the per-session transcript. Replies
//! are computed synchronously from static tables; recipe queries also
//! resolve each ingredient against the catalog so the caller can offer
//! navigation to stocked items.

mod recipes;
mod transcript;

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use shared::models::CatalogItem;

pub use recipes::GREETING;
pub use transcript::{ConversationMessage, Sender, Transcript};

/// One recipe ingredient, resolved against the catalog where possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: String,
    /// The stocked product backing this ingredient, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<CatalogItem>,
}

/// Computed assistant reply.
#[derive(Debug, Clone, PartialEq)]
pub struct BotReply {
    pub text: String,
    /// Present only for successful recipe lookups.
    pub ingredients: Vec<RecipeIngredient>,
}

/// Compute the assistant's reply to a user message.
///
/// Recipe queries take priority: any message containing a recipe keyword
/// is answered from the recipe tables, even when no recipe name matches.
/// Otherwise the canned-reply table is scanned in order, falling back to
/// the generic self-introduction.
pub fn respond(catalog: &Catalog, input: &str) -> BotReply {
    let input = input.to_lowercase();

    if recipes::RECIPE_KEYWORDS.iter().any(|kw| input.contains(kw)) {
        for recipe in recipes::RECIPES {
            if input.contains(recipe.key) {
                let ingredients: Vec<RecipeIngredient> = recipe
                    .ingredients
                    .iter()
                    .map(|(name, amount)| RecipeIngredient {
                        name: name.to_string(),
                        amount: amount.to_string(),
                        item: find_item_for_ingredient(catalog, name).cloned(),
                    })
                    .collect();
                let found = ingredients.iter().filter(|ing| ing.item.is_some()).count();
                let total = ingredients.len();
                return BotReply {
                    text: format!(
                        "Great! Here are the ingredients you need to make {}. I found {} out of {} items in our store. Tap \"Navigate\" to find each item!",
                        recipe.name, found, total
                    ),
                    ingredients,
                };
            }
        }
        return BotReply {
            text: recipes::RECIPE_FALLBACK.to_string(),
            ingredients: Vec::new(),
        };
    }

    for (key, text) in recipes::RESPONSES {
        if input.contains(key) {
            return BotReply {
                text: text.to_string(),
                ingredients: Vec::new(),
            };
        }
    }

    BotReply {
        text: recipes::DEFAULT_RESPONSE.to_string(),
        ingredients: Vec::new(),
    }
}

/// Resolve an ingredient name to a stocked product.
///
/// Direct name containment first, then the synonym table. The first
/// synonym key contained in the ingredient name ends the scan even if
/// its target is not stocked.
fn find_item_for_ingredient<'a>(catalog: &'a Catalog, ingredient: &str) -> Option<&'a CatalogItem> {
    let needle = ingredient.to_lowercase();

    if let Some(item) = catalog
        .items()
        .iter()
        .find(|item| item.name.to_lowercase().contains(&needle))
    {
        return Some(item);
    }

    for (key, target) in recipes::SYNONYMS {
        if needle.contains(key) {
            return catalog
                .items()
                .iter()
                .find(|item| item.name.to_lowercase().contains(target));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load()
    }

    #[test]
    fn test_spaghetti_recipe_resolves_all_ingredients() {
        let catalog = catalog();
        let reply = respond(&catalog, "How do I make spaghetti?");

        assert!(reply.text.contains("Spaghetti"));
        assert!(reply.text.contains("3 out of 3"));
        assert_eq!(reply.ingredients.len(), 3);
        assert!(reply.ingredients.iter().all(|ing| ing.item.is_some()));

        let pasta = reply.ingredients[0].item.as_ref().unwrap();
        assert_eq!(pasta.id, "8");
    }

    #[test]
    fn test_buttermilk_chicken_resolves_every_ingredient() {
        let catalog = catalog();
        let reply = respond(&catalog, "recipe for buttermilk chicken please");
        assert!(reply.text.contains("6 out of 6"));
    }

    #[test]
    fn test_unknown_recipe_gets_recipe_fallback() {
        let catalog = catalog();
        let reply = respond(&catalog, "recipe for lasagna");
        assert_eq!(reply.text, recipes::RECIPE_FALLBACK);
        assert!(reply.ingredients.is_empty());
    }

    #[test]
    fn test_canned_reply_lookup_is_case_insensitive() {
        let catalog = catalog();
        let reply = respond(&catalog, "Payment Help");
        assert!(reply.text.starts_with("For payment issues:"));
    }

    #[test]
    fn test_unmatched_message_gets_default_reply() {
        let catalog = catalog();
        let reply = respond(&catalog, "asdkjasd");
        assert_eq!(reply.text, recipes::DEFAULT_RESPONSE);
    }

    #[test]
    fn test_recipe_keyword_takes_priority_over_canned_reply() {
        // "need" marks this as a recipe query even though "scan" would
        // also match a canned reply
        let catalog = catalog();
        let reply = respond(&catalog, "i need to scan something");
        assert_eq!(reply.text, recipes::RECIPE_FALLBACK);
    }

    #[test]
    fn test_ingredient_resolution_prefers_direct_name_match() {
        let catalog = catalog();

        // "Fresh Milk" is contained in item 1's name directly
        let item = find_item_for_ingredient(&catalog, "Fresh Milk").unwrap();
        assert_eq!(item.id, "1");

        // "Eggs" resolves to Grade A Eggs by containment
        let item = find_item_for_ingredient(&catalog, "Eggs").unwrap();
        assert_eq!(item.id, "3");

        // Plain "oil" phrasing goes through the synonym table
        let item = find_item_for_ingredient(&catalog, "cooking oil").unwrap();
        assert_eq!(item.id, "9");

        assert!(find_item_for_ingredient(&catalog, "saffron").is_none());
    }

    #[test]
    fn test_transcript_opens_with_greeting_and_clears_back_to_it() {
        let catalog = catalog();
        let mut transcript = Transcript::new();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].sender, Sender::Bot);
        assert_eq!(transcript.messages()[0].text, GREETING);

        transcript.push_user("payment help");
        transcript.push_bot(respond(&catalog, "payment help"));
        assert_eq!(transcript.messages().len(), 3);

        transcript.clear();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].text, GREETING);
    }
}
