// src/store.rs
//! Category to record-collection mapping supplied by callers.

use crate::error::{Result, TallyError};
use crate::types::{Category, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named record collections, one per category.
///
/// Insertion order inside each collection is preserved so rendered tables are
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet {
    categories: BTreeMap<Category, Vec<Record>>,
}

impl CategorySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, category: Category, records: Vec<Record>) -> Self {
        self.insert(category, records);
        self
    }

    /// Replaces the collection for `category`, returning the previous one.
    pub fn insert(&mut self, category: Category, records: Vec<Record>) -> Option<Vec<Record>> {
        self.categories.insert(category, records)
    }

    /// # Errors
    /// Returns `MissingCategory` if `category` has no collection.
    pub fn get(&self, category: Category) -> Result<&[Record]> {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .ok_or_else(|| TallyError::MissingCategory(category.to_string()))
    }

    /// Looks a collection up by its label.
    ///
    /// # Errors
    /// Returns `MissingCategory` for unknown labels and absent collections alike.
    pub fn get_named(&self, name: &str) -> Result<&[Record]> {
        self.get(name.parse()?)
    }

    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains_key(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Record])> {
        self.categories.iter().map(|(c, r)| (*c, r.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn total_records(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}
