use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::manager::DatabaseError;
use super::models::product::{Product, ProductFilter, ProductId, ProductPatch};
use super::store::ProductStore;

/// Process-local store for development and tests
#[derive(Clone, Default)]
pub struct MemoryProductStore {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, DatabaseError> {
        let products = self.products.read().await;
        let mut matching: Vec<Product> = products
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn find(&self, id: ProductId) -> Result<Option<Product>, DatabaseError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn insert(&self, product: &Product) -> Result<(), DatabaseError> {
        let mut products = self.products.write().await;
        if products.contains_key(&product.id) {
            return Err(DatabaseError::QueryError(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: ProductId,
        patch: &ProductPatch,
        at: DateTime<Utc>,
    ) -> Result<Option<Product>, DatabaseError> {
        let mut products = self.products.write().await;
        Ok(products.get_mut(&id).map(|product| {
            patch.apply(product, at);
            product.clone()
        }))
    }

    async fn delete(&self, id: ProductId) -> Result<Option<Product>, DatabaseError> {
        Ok(self.products.write().await.remove(&id))
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
