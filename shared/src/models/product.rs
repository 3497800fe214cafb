//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    /// Category reference
    pub category_id: i64,
    pub image_url: Option<String>,
    /// Average review rating, absent until the first review
    pub rating: Option<f64>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

fn default_true() -> bool {
    true
}

/// Product category entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Catalogue filter, sent as query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ProductQuery {
    pub fn category(category_id: i64) -> Self {
        Self {
            category_id: Some(category_id),
            search: None,
        }
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self {
            category_id: None,
            search: Some(text.into()),
        }
    }
}
