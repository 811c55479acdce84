//! Category DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bb_core::domain::entities::category::Category;

/// Request body for POST /categories
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
}

/// Request body for PUT /categories/{id}
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    pub id: Uuid,

    #[validate(length(min = 1, max = 128))]
    pub name: String,
}

/// Public view of a category
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.unwrap_or_default(),
            name: category.name,
        }
    }
}
