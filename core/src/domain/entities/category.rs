//! Category entity: a reference entity classifying offers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Offer classification with a store-wide unique name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier; `None` until persisted
    pub id: Option<Uuid>,

    /// Category name, unique within the store
    pub name: String,
}

impl Category {
    /// Creates a new, not-yet-persisted category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Fantasy");
        assert_eq!(category.id, None);
        assert_eq!(category.name, "Fantasy");
    }
}
