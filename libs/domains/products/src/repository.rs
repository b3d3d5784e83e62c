use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter, ProductInput};

/// Repository trait for Product persistence
///
/// Read operations return products ordered by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Point lookup; `None` is a normal outcome, not an error
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert with a freshly assigned id
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Overwrite every mutable field; `None` when `id` does not exist
    async fn update(&self, id: i64, input: ProductInput) -> ProductResult<Option<Product>>;

    /// `true` if a product was removed
    async fn delete(&self, id: i64) -> ProductResult<bool>;

    /// Products matching every present criterion of `filter`
    async fn filter(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;
}

#[derive(Debug)]
struct Store {
    next_id: i64,
    products: BTreeMap<i64, Product>,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                next_id: 1,
                products: BTreeMap::new(),
            })),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let product = Product::from_input(id, input);
        store.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i64, input: ProductInput) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };
        product.overwrite(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn filter(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store
            .products
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64) -> ProductInput {
        ProductInput {
            name: Some(name.to_string()),
            description: Some(format!("{} description", name)),
            price: Some(price),
            rating: Some(4.0),
            category: Some("general".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let repo = InMemoryProductRepository::new();

        let created = repo.create(input("Lamp", 19.99)).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let repo = InMemoryProductRepository::new();

        let a = repo.create(input("A", 1.0)).await.unwrap();
        let b = repo.create(input("B", 2.0)).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();

        let a = repo.create(input("A", 1.0)).await.unwrap();
        repo.delete(a.id).await.unwrap();
        let b = repo.create(input("B", 2.0)).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_missing_id_is_absent_everywhere() {
        let repo = InMemoryProductRepository::new();

        assert_eq!(repo.get_by_id(9999).await.unwrap(), None);
        assert_eq!(repo.update(9999, input("X", 1.0)).await.unwrap(), None);
        assert!(!repo.delete(9999).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields_and_keeps_id() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Lamp", 19.99)).await.unwrap();

        let updated = repo
            .update(
                created.id,
                ProductInput {
                    name: Some("Desk Lamp".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Desk Lamp");
        assert_eq!(updated.description, "");
        assert_eq!(updated.price, 0.0);
        assert_eq!(updated.category, None);
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Lamp", 19.99)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), None);
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_filter_price_range_scenario() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("A", 5.0)).await.unwrap();
        let b = repo.create(input("B", 15.0)).await.unwrap();
        repo.create(input("C", 25.0)).await.unwrap();

        let result = repo
            .filter(ProductFilter {
                min_price: Some(10.0),
                max_price: Some(20.0),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result, vec![b]);
    }

    #[tokio::test]
    async fn test_empty_filter_equals_list() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("A", 5.0)).await.unwrap();
        repo.create(input("B", 15.0)).await.unwrap();

        let all = repo.list().await.unwrap();
        let filtered = repo.filter(ProductFilter::default()).await.unwrap();

        assert_eq!(all, filtered);
    }

    #[tokio::test]
    async fn test_filter_without_matches_is_empty() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("A", 5.0)).await.unwrap();

        let result = repo
            .filter(ProductFilter {
                category: Some("nope".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(result.is_empty());
    }
}
