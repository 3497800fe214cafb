//! Catalogue

use super::Session;
use crate::http::HttpClient;
use shared::models::{Category, Product, ProductQuery};
use shared::{ApiResult, Operation};

pub struct ProductRepository<H> {
    session: Session<H>,
}

impl<H: HttpClient> ProductRepository<H> {
    pub(crate) fn new(session: Session<H>) -> Self {
        Self { session }
    }

    /// List products, optionally filtered by category or search text
    pub async fn get_products(&self, query: &ProductQuery) -> ApiResult<Vec<Product>> {
        self.session
            .call(
                Operation::GetProducts,
                self.session.http.get_with_query("products", query),
            )
            .await
    }

    pub async fn get_product(&self, id: i64) -> ApiResult<Product> {
        let path = format!("products/{}", id);
        self.session
            .call(Operation::GetProduct, self.session.http.get(&path))
            .await
    }

    pub async fn get_categories(&self) -> ApiResult<Vec<Category>> {
        self.session
            .call(Operation::GetCategories, self.session.http.get("categories"))
            .await
    }
}
