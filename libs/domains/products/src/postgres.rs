use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    entity,
    error::ProductResult,
    models::{Product, ProductFilter, ProductInput},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// One predicate per present criterion, ANDed.
pub(crate) fn filter_condition(filter: &ProductFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(category) = &filter.category {
        condition = condition.add(entity::Column::Category.eq(category.as_str()));
    }
    if let Some(min_price) = filter.min_price {
        condition = condition.add(entity::Column::Price.gte(min_price));
    }
    if let Some(max_price) = filter.max_price {
        condition = condition.add(entity::Column::Price.lte(max_price));
    }
    if let Some(min_rating) = filter.min_rating {
        condition = condition.add(entity::Column::Rating.gte(min_rating));
    }
    if let Some(max_rating) = filter.max_rating {
        condition = condition.add(entity::Column::Rating.lte(max_rating));
    }

    condition
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let model = entity::ActiveModel::for_insert(input)
            .insert(&self.db)
            .await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, id: i64, input: ProductInput) -> ProductResult<Option<Product>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut product: Product = model.into();
        product.overwrite(input);

        let updated = entity::ActiveModel::overwriting(product)
            .update(&self.db)
            .await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn filter(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(filter_condition(&filter))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait};

    fn model(id: i64, price: f64) -> entity::Model {
        entity::Model {
            id,
            name: format!("Product {}", id),
            description: String::new(),
            price,
            rating: 4.0,
            category: Some("books".to_string()),
        }
    }

    #[test]
    fn test_filter_condition_builds_one_predicate_per_criterion() {
        let filter = ProductFilter {
            category: Some("books".to_string()),
            min_price: Some(10.0),
            max_price: Some(20.0),
            ..Default::default()
        };

        let sql = entity::Entity::find()
            .filter(filter_condition(&filter))
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""products"."category" = 'books'"#));
        assert!(sql.contains(r#""products"."price" >="#));
        assert!(sql.contains(r#""products"."price" <="#));
        assert!(!sql.contains(r#""products"."rating" >="#));
        assert!(!sql.contains(r#""products"."rating" <="#));
    }

    #[test]
    fn test_empty_filter_adds_no_predicates() {
        let sql = entity::Entity::find()
            .filter(filter_condition(&ProductFilter::default()))
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(!sql.contains(r#""products"."price" >="#));
        assert!(!sql.contains(r#""products"."category" ="#));
    }

    #[tokio::test]
    async fn test_get_by_id_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, 9.5)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.get_by_id(3).await.unwrap().unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.price, 9.5);
        assert_eq!(product.category.as_deref(), Some("books"));
    }

    #[tokio::test]
    async fn test_update_missing_row_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.update(9999, ProductInput::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_database_failure_surfaces_as_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.list().await.is_err());
    }
}
