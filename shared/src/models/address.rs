//! Address Model

use serde::{Deserialize, Serialize};

/// Delivery address entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub city: String,
    pub street: String,
    pub house: String,
    pub apartment: Option<String>,
    pub postal_code: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    /// Server-assigned, never part of a request
    pub created_at: Option<i64>,
}

/// Create address payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCreate {
    pub city: String,
    pub street: String,
    pub house: String,
    pub apartment: Option<String>,
    pub postal_code: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

impl AddressCreate {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        house: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            house: house.into(),
            apartment: None,
            postal_code: None,
            is_default: false,
        }
    }

    pub fn with_apartment(mut self, apartment: impl Into<String>) -> Self {
        self.apartment = Some(apartment.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}
