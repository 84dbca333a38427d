//! Shopping List Helpers
//!
//! Free-function forms of the list operations and the sentence formatter.

use super::models::{Item, ShoppingList};

/// Adds `item` to `list` unless it is already present. Returns the new size.
pub fn add_item(list: &mut ShoppingList, item: impl Into<Item>) -> usize {
    list.add(item)
}

/// Removes `item` from `list` if present. Returns the new size.
pub fn remove_item(list: &mut ShoppingList, item: &str) -> usize {
    list.remove(item)
}

pub fn item_present(list: &ShoppingList, item: &str) -> bool {
    list.contains(item)
}

/// Renders the list as a single sentence.
///
/// Example output: `"Mi lista de la compra es: milk sugar bread"`.
pub fn format_shopping_list(list: &ShoppingList) -> String {
    list.to_string()
}
