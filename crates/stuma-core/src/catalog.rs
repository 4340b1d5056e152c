//! # Catalog Filtering
//!
//! Pure derived-view computation over an item snapshot. The state layer
//! recomputes its `filtered` view through [`filter_items`] whenever the item
//! snapshot, the selected category, or the search query changes; nothing
//! ever mutates a filtered list in place.
//!
//! Both predicates compose conjunctively: an item survives only if it
//! matches the query AND falls under the selected category. The empty query
//! and the `All` category are each the identity.

use crate::types::{Category, Item};

/// Applies the search and category predicates to `items`, preserving order.
pub fn filter_items(items: &[Item], category: Category, query: &str) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches_query(item, query) && category.matches(&item.category))
        .cloned()
        .collect()
}

/// Case-insensitive substring match against the item name OR its category.
/// The empty query matches everything.
pub fn matches_query(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.name.to_lowercase().contains(&needle) || item.category.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(id: i64, name: &str, category: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            category: category.to_string(),
            description: String::new(),
            stock: 2,
            price: 500_000.0,
            seller: "budi".to_string(),
            created_at: "2024-05-01T10:00:00Z".to_string(),
            updated_at: "2024-05-01T10:00:00Z".to_string(),
        }
    }

    fn fixtures() -> Vec<Item> {
        vec![
            test_item(1, "Desk", "Furniture"),
            test_item(2, "Chair", "Furniture"),
            test_item(3, "Shirt", "Clothes"),
        ]
    }

    #[test]
    fn test_all_category_is_identity() {
        let items = fixtures();
        assert_eq!(filter_items(&items, Category::All, ""), items);
    }

    #[test]
    fn test_category_filter_scenario() {
        let items = vec![test_item(1, "Desk", "Furniture")];

        let furniture = filter_items(&items, Category::Furniture, "");
        assert_eq!(furniture.len(), 1);
        assert_eq!(furniture[0].name, "Desk");

        let electronic = filter_items(&items, Category::Electronic, "");
        assert!(electronic.is_empty());
    }

    #[test]
    fn test_category_matching_ignores_case() {
        let items = vec![test_item(1, "Desk", "fUrNiTuRe")];
        assert_eq!(filter_items(&items, Category::Furniture, "").len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = fixtures();
        let once = filter_items(&items, Category::Furniture, "");
        let twice = filter_items(&once, Category::Furniture, "");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_scenario() {
        let items = vec![
            test_item(1, "Desk", "Furniture"),
            test_item(2, "Chair", "Furniture"),
        ];

        let hits = filter_items(&items, Category::All, "Desk");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Desk");

        // The empty query is the identity filter.
        assert_eq!(filter_items(&items, Category::All, ""), items);
    }

    #[test]
    fn test_search_matches_name_or_category() {
        let items = fixtures();

        // "furn" hits both furniture items through their category field.
        let by_category = filter_items(&items, Category::All, "furn");
        assert_eq!(by_category.len(), 2);

        let by_name = filter_items(&items, Category::All, "shi");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Shirt");
    }

    #[test]
    fn test_search_and_category_compose() {
        let items = fixtures();

        // Query matches Desk only; category narrows to Furniture. Conjunction.
        let hits = filter_items(&items, Category::Furniture, "desk");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Desk");

        // Query matches Desk, but Desk is not Clothes.
        assert!(filter_items(&items, Category::Clothes, "desk").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let items = fixtures();
        let furniture = filter_items(&items, Category::Furniture, "");
        let ids: Vec<i64> = furniture.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
