//! Response consistency checks
//!
//! Create/update endpoints echo the stored entity back. A 2xx status alone is
//! not trusted for these writes: the echoed entity must carry the fields that
//! were requested, otherwise the write is treated as failed with
//! [`DomainError::DataInconsistent`].
//!
//! Only fields present on the request are compared. Server-generated fields
//! (ids, timestamps) never take part.

use crate::error::{ApiResult, DomainError};
use crate::models::{Address, AddressCreate, PaymentMethod, PaymentMethodCreate, UserInfo, UserInfoUpdate};

/// Whether a response reflects the request that produced it
pub trait IsConsistentWith<Request: ?Sized> {
    fn is_consistent_with(&self, request: &Request) -> bool;
}

/// Accept `response` only if it is consistent with `request`
///
/// On mismatch the response is dropped and `DataInconsistent` is returned.
pub fn ensure_consistent<Request, Response>(
    request: &Request,
    response: Response,
) -> ApiResult<Response>
where
    Request: ?Sized,
    Response: IsConsistentWith<Request>,
{
    if response.is_consistent_with(request) {
        Ok(response)
    } else {
        Err(DomainError::DataInconsistent)
    }
}

impl IsConsistentWith<AddressCreate> for Address {
    fn is_consistent_with(&self, request: &AddressCreate) -> bool {
        self.city == request.city
            && self.street == request.street
            && self.house == request.house
            && self.apartment == request.apartment
            && self.postal_code == request.postal_code
            && self.is_default == request.is_default
    }
}

impl IsConsistentWith<PaymentMethodCreate> for PaymentMethod {
    fn is_consistent_with(&self, request: &PaymentMethodCreate) -> bool {
        request.last4().as_deref() == Some(self.card_last4.as_str())
            && self.holder_name == request.holder_name
            && self.expiry_month == request.expiry_month
            && self.expiry_year == request.expiry_year
    }
}

impl IsConsistentWith<UserInfoUpdate> for UserInfo {
    fn is_consistent_with(&self, request: &UserInfoUpdate) -> bool {
        self.name == request.name
            && self.surname == request.surname
            && self.phone == request.phone
            && self.email == request.email
            && self.birth_date == request.birth_date
            && self.gender == request.gender
    }
}
