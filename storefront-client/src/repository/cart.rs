//! Cart

use super::Session;
use crate::http::HttpClient;
use shared::models::{Cart, CartItemAdd, CartItemUpdate};
use shared::{ApiResult, DomainError, Operation};

pub struct CartRepository<H> {
    session: Session<H>,
}

impl<H: HttpClient> CartRepository<H> {
    pub(crate) fn new(session: Session<H>) -> Self {
        Self { session }
    }

    pub async fn get_cart(&self) -> ApiResult<Cart> {
        self.session
            .call(Operation::GetCart, self.session.http.get("cart"))
            .await
    }

    /// Add `quantity` units of a product; returns the updated cart
    pub async fn add_item(&self, product_id: i64, quantity: u32) -> ApiResult<Cart> {
        if quantity == 0 {
            return Err(DomainError::InvalidData);
        }
        let request = CartItemAdd {
            product_id,
            quantity,
        };
        self.session
            .call(
                Operation::AddToCart,
                self.session.http.post("cart/items", &request),
            )
            .await
    }

    /// Set the quantity of a line; returns the updated cart
    pub async fn update_item(&self, product_id: i64, quantity: u32) -> ApiResult<Cart> {
        if quantity == 0 {
            return self.remove_item(product_id).await;
        }
        let path = format!("cart/items/{}", product_id);
        let request = CartItemUpdate { quantity };
        self.session
            .call(
                Operation::UpdateCartItem,
                self.session.http.put(&path, &request),
            )
            .await
    }

    /// Remove a line; returns the updated cart
    pub async fn remove_item(&self, product_id: i64) -> ApiResult<Cart> {
        let path = format!("cart/items/{}", product_id);
        self.session
            .call(Operation::RemoveFromCart, self.session.http.delete(&path))
            .await
    }
}
