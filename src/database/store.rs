use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::manager::{DatabaseError, DatabaseManager};
use super::memory::MemoryProductStore;
use super::models::product::{Product, ProductFilter, ProductId, ProductPatch};
use super::repository::ProductRepository;
use crate::config::{DatabaseConfig, StoreBackend};

/// Persistence operations on the products collection.
///
/// Every method is a single atomic call against the backing store;
/// concurrent writes to one record resolve last-write-wins.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Newest first
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, DatabaseError>;

    async fn find(&self, id: ProductId) -> Result<Option<Product>, DatabaseError>;

    async fn insert(&self, product: &Product) -> Result<(), DatabaseError>;

    /// Apply the carried fields and refresh `updated_at`; `None` when the record is absent
    async fn update(
        &self,
        id: ProductId,
        patch: &ProductPatch,
        at: DateTime<Utc>,
    ) -> Result<Option<Product>, DatabaseError>;

    /// Returns the removed record, `None` when it was already gone
    async fn delete(&self, id: ProductId) -> Result<Option<Product>, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;

    /// Release connections on shutdown
    async fn close(&self) {}

    fn backend(&self) -> &'static str;
}

pub type SharedProductStore = Arc<dyn ProductStore>;

/// Build the store selected by configuration
pub async fn connect(config: &DatabaseConfig) -> Result<SharedProductStore, DatabaseError> {
    match config.backend {
        StoreBackend::Postgres => {
            let manager = DatabaseManager::connect(config).await?;
            Ok(Arc::new(ProductRepository::new(manager)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory product store; data is lost on restart");
            Ok(Arc::new(MemoryProductStore::new()))
        }
    }
}
