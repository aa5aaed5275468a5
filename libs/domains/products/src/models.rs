use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    /// Name of the product's category, if it has one
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Request body for creating a product
///
/// `price` accepts a JSON number or a numeric string; anything else is
/// rejected with "Price must be a number".
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = String, example = "9.99")]
    pub price: Value,
    #[serde(default)]
    pub category_id: Option<i32>,
}

/// A product that passed validation and is ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
        }
    }

    /// The search term, or `None` when absent or blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }

    /// Whether `name` satisfies this filter.
    pub fn matches(&self, name: &str) -> bool {
        match self.search_term() {
            Some(term) => name.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        }
    }
}
