//! Orders and checkout

use super::Session;
use crate::http::HttpClient;
use shared::models::{CheckoutRequest, Order};
use shared::{ApiResult, Operation};

pub struct OrderRepository<H> {
    session: Session<H>,
}

impl<H: HttpClient> OrderRepository<H> {
    pub(crate) fn new(session: Session<H>) -> Self {
        Self { session }
    }

    pub async fn get_orders(&self) -> ApiResult<Vec<Order>> {
        self.session
            .call(Operation::GetOrders, self.session.http.get("orders"))
            .await
    }

    pub async fn get_order(&self, id: i64) -> ApiResult<Order> {
        let path = format!("orders/{}", id);
        self.session
            .call(Operation::GetOrder, self.session.http.get(&path))
            .await
    }

    /// Turn the current cart into an order
    pub async fn checkout(&self, address_id: i64, payment_method_id: i64) -> ApiResult<Order> {
        let request = CheckoutRequest {
            address_id,
            payment_method_id,
        };
        let order: Order = self
            .session
            .call(Operation::Checkout, self.session.http.post("orders", &request))
            .await?;
        tracing::info!(order_id = order.id, total = %order.total, "Order placed");
        Ok(order)
    }
}
