//! Shopping List Domain Models
//!
//! This module contains the data structures of the shopping list domain and
//! the operations that keep a list free of duplicates.

use super::error::{Result, ShoppingListError};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Leading phrase of a rendered shopping list
pub const LIST_HEADER: &str = "Mi lista de la compra es:";

// =============================================================================
// Shopping List Domain Models
// =============================================================================

/// A named entry in the shopping list, identified solely by its text.
///
/// Two items are equal only when their names match exactly; no trimming or
/// case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name of the item
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Item {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Item {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for Item {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Item {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered, duplicate-free collection of items.
///
/// Items keep their insertion order until a removal, which moves the last
/// item into the freed slot. Every operation that mutates the list returns
/// the resulting size, which always equals [`ShoppingList::len`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Item>", into = "Vec<Item>")]
pub struct ShoppingList {
    items: Vec<Item>,
}

impl ShoppingList {
    /// Creates an empty shopping list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Items in list order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Appends `item` unless an equal item is already present.
    ///
    /// Returns the size of the list after the call: the old size plus one
    /// when the item was new, the unchanged size otherwise.
    pub fn add(&mut self, item: impl Into<Item>) -> usize {
        let item = item.into();
        if self.contains(item.as_str()) {
            tracing::debug!(item = %item, size = self.len(), "Item already listed, skipping");
            return self.len();
        }

        tracing::debug!(item = %item, size = self.len() + 1, "Item added");
        self.items.push(item);
        self.len()
    }

    /// Removes `item` if present, moving the last item into its slot.
    ///
    /// Absence is not an error: the list is left untouched and its current
    /// size is returned.
    pub fn remove(&mut self, item: &str) -> usize {
        match self.position(item) {
            Ok(index) => {
                self.items.swap_remove(index);
                tracing::debug!(item, size = self.len(), "Item removed");
            }
            Err(e) => {
                tracing::debug!(size = self.len(), "Nothing to remove: {}", e);
            }
        }
        self.len()
    }

    /// Returns true iff an item with exactly this name is in the list
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Returns the 0-indexed position of `item`.
    ///
    /// # Errors
    ///
    /// [`ShoppingListError::ItemNotFound`] when no item has that name.
    pub fn position(&self, item: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|i| i == item)
            .ok_or_else(|| ShoppingListError::ItemNotFound {
                item: item.to_string(),
            })
    }
}

impl From<Vec<Item>> for ShoppingList {
    fn from(items: Vec<Item>) -> Self {
        items.into_iter().collect()
    }
}

impl From<ShoppingList> for Vec<Item> {
    fn from(list: ShoppingList) -> Self {
        list.items
    }
}

impl<I: Into<Item>> FromIterator<I> for ShoppingList {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.add(item);
        }
        list
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LIST_HEADER)?;
        for item in self {
            write!(f, " {}", item)?;
        }
        Ok(())
    }
}
