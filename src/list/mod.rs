//! Shopping List Domain Module
//!
//! This module contains the shopping list business logic, including:
//! - Domain models (Item, ShoppingList) and their operations
//! - Free-function helpers and formatting
//! - Error types

pub mod error;
pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use error::{Result, ShoppingListError};
pub use helpers::{add_item, format_shopping_list, item_present, remove_item};
pub use models::{Item, ShoppingList, LIST_HEADER};
