//! Saved payment methods

use super::Session;
use crate::http::HttpClient;
use shared::models::{PaymentMethod, PaymentMethodCreate};
use shared::{ApiResult, Operation, ensure_consistent};

pub struct PaymentMethodRepository<H> {
    session: Session<H>,
}

impl<H: HttpClient> PaymentMethodRepository<H> {
    pub(crate) fn new(session: Session<H>) -> Self {
        Self { session }
    }

    pub async fn get_payment_methods(&self) -> ApiResult<Vec<PaymentMethod>> {
        self.session
            .call(
                Operation::GetPaymentMethods,
                self.session.http.get("payment-methods"),
            )
            .await
    }

    /// Save a card
    ///
    /// The echo carries only the last 4 digits, which must match the
    /// submitted number along with holder and expiry.
    pub async fn create_payment_method(
        &self,
        request: &PaymentMethodCreate,
    ) -> ApiResult<PaymentMethod> {
        let method: PaymentMethod = self
            .session
            .call(
                Operation::CreatePaymentMethod,
                self.session.http.post("payment-methods", request),
            )
            .await?;
        ensure_consistent(request, method).inspect_err(|_| {
            tracing::warn!(operation = %Operation::CreatePaymentMethod, "Echoed card does not match request");
        })
    }

    pub async fn delete_payment_method(&self, id: i64) -> ApiResult<()> {
        let path = format!("payment-methods/{}", id);
        self.session
            .call(
                Operation::DeletePaymentMethod,
                self.session.http.delete_empty(&path),
            )
            .await
    }
}
