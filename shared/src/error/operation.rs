//! Remote operations known to the client

use super::table::StatusTable;
use serde::{Deserialize, Serialize};

/// Every remote call the storefront client makes
///
/// The operation decides which [`StatusTable`] classifies its failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    // Auth
    SignIn,
    SignUp,

    // Catalogue
    GetProducts,
    GetProduct,
    GetCategories,

    // Cart
    GetCart,
    AddToCart,
    UpdateCartItem,
    RemoveFromCart,

    // Addresses
    GetAddresses,
    CreateAddress,
    DeleteAddress,

    // Payment methods
    GetPaymentMethods,
    CreatePaymentMethod,
    DeletePaymentMethod,

    // Orders
    GetOrders,
    GetOrder,
    Checkout,

    // Reviews
    GetReviews,
    CreateReview,

    // User profile
    GetUserInfo,
    UpdateUserInfo,
}

impl Operation {
    /// Status table used to classify HTTP failures of this operation
    pub fn status_table(&self) -> StatusTable {
        match self {
            Self::SignIn => StatusTable::SIGN_IN,
            Self::SignUp => StatusTable::SIGN_UP,
            _ => StatusTable::DEFAULT,
        }
    }

    /// Whether the call carries the session token
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::SignIn | Self::SignUp)
    }

    /// Get the string name for this operation
    pub fn name(&self) -> &'static str {
        match self {
            Self::SignIn => "sign_in",
            Self::SignUp => "sign_up",
            Self::GetProducts => "get_products",
            Self::GetProduct => "get_product",
            Self::GetCategories => "get_categories",
            Self::GetCart => "get_cart",
            Self::AddToCart => "add_to_cart",
            Self::UpdateCartItem => "update_cart_item",
            Self::RemoveFromCart => "remove_from_cart",
            Self::GetAddresses => "get_addresses",
            Self::CreateAddress => "create_address",
            Self::DeleteAddress => "delete_address",
            Self::GetPaymentMethods => "get_payment_methods",
            Self::CreatePaymentMethod => "create_payment_method",
            Self::DeletePaymentMethod => "delete_payment_method",
            Self::GetOrders => "get_orders",
            Self::GetOrder => "get_order",
            Self::Checkout => "checkout",
            Self::GetReviews => "get_reviews",
            Self::CreateReview => "create_review",
            Self::GetUserInfo => "get_user_info",
            Self::UpdateUserInfo => "update_user_info",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
