//! Review Model

use serde::{Deserialize, Serialize};

/// Lowest accepted rating
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating
pub const MAX_RATING: u8 = 5;

/// Product review entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub product_id: i64,
    pub author: String,
    pub rating: u8,
    pub text: Option<String>,
    pub created_at: i64,
}

/// Create review payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub rating: u8,
    pub text: Option<String>,
}

impl ReviewCreate {
    pub fn is_rating_valid(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }
}
