//! Delivery addresses

use super::Session;
use crate::http::HttpClient;
use shared::models::{Address, AddressCreate};
use shared::{ApiResult, Operation, ensure_consistent};

pub struct AddressRepository<H> {
    session: Session<H>,
}

impl<H: HttpClient> AddressRepository<H> {
    pub(crate) fn new(session: Session<H>) -> Self {
        Self { session }
    }

    pub async fn get_addresses(&self) -> ApiResult<Vec<Address>> {
        self.session
            .call(Operation::GetAddresses, self.session.http.get("addresses"))
            .await
    }

    /// Create an address
    ///
    /// The echoed address must match the request, otherwise the call fails
    /// with `DataInconsistent` and the echo is discarded.
    pub async fn create_address(&self, request: &AddressCreate) -> ApiResult<Address> {
        let address: Address = self
            .session
            .call(
                Operation::CreateAddress,
                self.session.http.post("addresses", request),
            )
            .await?;
        ensure_consistent(request, address).inspect_err(|_| {
            tracing::warn!(operation = %Operation::CreateAddress, "Echoed address does not match request");
        })
    }

    pub async fn delete_address(&self, id: i64) -> ApiResult<()> {
        let path = format!("addresses/{}", id);
        self.session
            .call(Operation::DeleteAddress, self.session.http.delete_empty(&path))
            .await
    }
}
