//! Request DTOs.

use serde::{Deserialize, Serialize};

use sheethub_entity::category::CreateCategory;

/// Body of `POST /create_category`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    /// Unique category name.
    pub category_name: String,
    /// Region label.
    pub region: String,
    /// Classification used by `/sum_type`.
    #[serde(rename = "type")]
    pub category_type: String,
}

impl From<CreateCategoryRequest> for CreateCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            name: req.category_name,
            region: req.region,
            category_type: req.category_type,
        }
    }
}

/// Query of `GET /find_regions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindRegionsQuery {
    /// Case-insensitive substring to look for in extracted text.
    #[serde(default)]
    pub search_term: Option<String>,
}
