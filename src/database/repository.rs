use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, QueryBuilder};
use uuid::Uuid;

use super::manager::{DatabaseError, DatabaseManager};
use super::models::product::{Product, ProductFilter, ProductId, ProductPatch};
use super::store::ProductStore;

const COLUMNS: &str = "id, name, description, price, image, category, in_stock, created_at, updated_at";

/// Row shape of the `products` table
#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: String,
    price: f64,
    image: String,
    category: String,
    in_stock: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DatabaseError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category = row.category.parse().map_err(|e| {
            DatabaseError::QueryError(format!("product {} has {}", row.id, e))
        })?;

        Ok(Product {
            id: row.id.into(),
            name: row.name,
            description: row.description,
            price: row.price,
            image: row.image,
            category,
            in_stock: row.in_stock,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_product(row: Option<ProductRow>) -> Result<Option<Product>, DatabaseError> {
    row.map(Product::try_from).transpose()
}

/// PostgreSQL-backed product store
pub struct ProductRepository {
    manager: DatabaseManager,
}

impl ProductRepository {
    pub fn new(manager: DatabaseManager) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, DatabaseError> {
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM products WHERE TRUE", COLUMNS));

        if let Some(category) = filter.category {
            query.push(" AND category = ").push_bind(category.as_str());
        }
        if let Some(in_stock) = filter.in_stock {
            query.push(" AND in_stock = ").push_bind(in_stock);
        }
        query.push(" ORDER BY created_at DESC");

        query
            .build_query_as::<ProductRow>()
            .fetch_all(self.manager.pool())
            .await?
            .into_iter()
            .map(Product::try_from)
            .collect()
    }

    async fn find(&self, id: ProductId) -> Result<Option<Product>, DatabaseError> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", COLUMNS);
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(self.manager.pool())
            .await?;
        into_product(row)
    }

    async fn insert(&self, product: &Product) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, image, category, in_stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image)
        .bind(product.category.as_str())
        .bind(product.in_stock)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(self.manager.pool())
        .await?;
        Ok(())
    }

    async fn update(
        &self,
        id: ProductId,
        patch: &ProductPatch,
        at: DateTime<Utc>,
    ) -> Result<Option<Product>, DatabaseError> {
        // Single statement: absent fields bind NULL and keep the stored value
        let sql = format!(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                image = COALESCE($5, image),
                category = COALESCE($6, category),
                in_stock = COALESCE($7, in_stock),
                updated_at = $8
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        );

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id.as_uuid())
            .bind(patch.name.as_deref())
            .bind(patch.description.as_deref())
            .bind(patch.price)
            .bind(patch.image.as_deref())
            .bind(patch.category.map(|c| c.as_str()))
            .bind(patch.in_stock)
            .bind(at)
            .fetch_optional(self.manager.pool())
            .await?;
        into_product(row)
    }

    async fn delete(&self, id: ProductId) -> Result<Option<Product>, DatabaseError> {
        let sql = format!("DELETE FROM products WHERE id = $1 RETURNING {}", COLUMNS);
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(self.manager.pool())
            .await?;
        into_product(row)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        self.manager.health_check().await
    }

    async fn close(&self) {
        self.manager.close().await;
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
