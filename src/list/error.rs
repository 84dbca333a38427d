//! Shopping List Errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShoppingListError {
    /// Lookup of an item that is not on the list
    #[error("item not found: {item}")]
    ItemNotFound { item: String },
}

pub type Result<T> = std::result::Result<T, ShoppingListError>;
