//! Category bookkeeping rules.
//!
//! Category names are unique per user ignoring case. The hosted backend does
//! not enforce this, so callers check with [`find_by_name`] before inserting
//! and periodically prune with [`duplicate_category_ids`].

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::{Category, CreateCategoryInput, DEFAULT_CATEGORIES};

/// First category whose name equals `name`, ignoring case.
pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    let wanted = name.trim().to_lowercase();
    categories.iter().find(|c| c.name.to_lowercase() == wanted)
}

/// Ids of categories that repeat an earlier name (ignoring case).
///
/// `categories` must be ordered by creation time; the oldest row of each name
/// survives.
pub fn duplicate_category_ids(categories: &[Category]) -> Vec<String> {
    let mut seen = HashSet::new();
    categories
        .iter()
        .filter(|c| !seen.insert(c.name.to_lowercase()))
        .map(|c| c.id.clone())
        .collect()
}

/// Whether a user's account should receive [`DEFAULT_CATEGORIES`].
pub fn needs_default_seed(existing: &[Category]) -> bool {
    existing.is_empty()
}

/// Insert requests for the default categories.
pub fn default_category_inputs() -> Vec<CreateCategoryInput> {
    DEFAULT_CATEGORIES.iter().map(|d| d.to_input()).collect()
}

/// Default categories are protected from deletion. Matching is exact.
pub fn is_default_category(name: &str) -> bool {
    DEFAULT_CATEGORIES.iter().any(|d| d.name == name)
}

impl CreateCategoryInput {
    /// Trim the name and reject blank ones.
    pub fn normalized(self) -> Result<Self> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput(
                "Category name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            color: self.color,
        })
    }
}
