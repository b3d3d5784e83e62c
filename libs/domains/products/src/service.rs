//! Product Service - thin orchestration over the repository

use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter, ProductInput};
use crate::repository::ProductRepository;

/// Product service used by the HTTP handlers
///
/// Every call maps onto one repository operation; absence is reported as
/// `None`/`false` so handlers choose the HTTP shape.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(id).await
    }

    /// Persist a new product. Values are stored as given, without validation.
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// Full overwrite of an existing product; `None` if it does not exist.
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: i64,
        input: ProductInput,
    ) -> ProductResult<Option<Product>> {
        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<bool> {
        self.repository.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn filter_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.filter(filter).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
