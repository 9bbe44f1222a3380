//! Pure view computation over the collection. Never mutates its input and
//! preserves relative order.

use crate::model::Item;

/// Select the items whose name contains `query` (case-insensitive) AND,
/// when `category` is given, whose category matches it exactly.
///
/// An empty query matches every name; `None` category matches every
/// category.
pub fn filter_items<'a>(items: &'a [Item], query: &str, category: Option<&str>) -> Vec<&'a Item> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            let matches_search = item.name.to_lowercase().contains(&query);
            let matches_category = category.is_none_or(|c| item.category == c);
            matches_search && matches_category
        })
        .collect()
}
