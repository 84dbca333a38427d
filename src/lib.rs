//! Shopping List Library
//!
//! This library provides a duplicate-free shopping list with add, remove and
//! presence-check operations, and renders it as a sentence.

// Domain modules
pub mod list;

// Infrastructure
pub mod logger;

pub use list::{format_shopping_list, Item, ShoppingList, ShoppingListError};
