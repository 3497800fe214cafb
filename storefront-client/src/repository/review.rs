//! Product reviews

use super::Session;
use crate::http::HttpClient;
use shared::models::{Review, ReviewCreate};
use shared::{ApiResult, DomainError, Operation};

pub struct ReviewRepository<H> {
    session: Session<H>,
}

impl<H: HttpClient> ReviewRepository<H> {
    pub(crate) fn new(session: Session<H>) -> Self {
        Self { session }
    }

    pub async fn get_reviews(&self, product_id: i64) -> ApiResult<Vec<Review>> {
        let path = format!("products/{}/reviews", product_id);
        self.session
            .call(Operation::GetReviews, self.session.http.get(&path))
            .await
    }

    /// Post a review; out-of-range ratings are rejected without a request
    pub async fn create_review(&self, product_id: i64, request: &ReviewCreate) -> ApiResult<Review> {
        if !request.is_rating_valid() {
            tracing::debug!(rating = request.rating, "Review rating out of range");
            return Err(DomainError::InvalidData);
        }
        let path = format!("products/{}/reviews", product_id);
        self.session
            .call(Operation::CreateReview, self.session.http.post(&path, request))
            .await
    }
}
