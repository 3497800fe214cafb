//! Payment Method Model

use serde::{Deserialize, Serialize};

/// Saved card
///
/// The backend never echoes the full card number, only its last 4 digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: i64,
    pub card_last4: String,
    pub holder_name: String,
    /// 1-12
    pub expiry_month: u8,
    /// Four-digit year
    pub expiry_year: u16,
    pub created_at: Option<i64>,
}

/// Create payment method payload
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodCreate {
    pub card_number: String,
    pub holder_name: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub cvv: String,
}

impl PaymentMethodCreate {
    /// Last 4 digits of the card number, separators ignored
    ///
    /// `None` when the number holds fewer than 4 digits.
    pub fn last4(&self) -> Option<String> {
        let digits: Vec<char> = self
            .card_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.len() < 4 {
            return None;
        }
        Some(digits[digits.len() - 4..].iter().collect())
    }
}

// Card number and CVV stay out of logs
impl std::fmt::Debug for PaymentMethodCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentMethodCreate")
            .field("card_last4", &self.last4())
            .field("holder_name", &self.holder_name)
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .finish_non_exhaustive()
    }
}
