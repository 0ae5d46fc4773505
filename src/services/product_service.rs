use chrono::Utc;
use serde_json::Value;

use crate::database::{
    DatabaseError, NewProduct, Product, ProductFilter, ProductId, ProductPatch, SharedProductStore,
    ValidationErrors,
};

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("Store error: {0}")]
    Store(#[from] DatabaseError),
}

/// Product operations: validation first, then one store call
#[derive(Clone)]
pub struct ProductService {
    store: SharedProductStore,
}

impl ProductService {
    pub fn new(store: SharedProductStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SharedProductStore {
        &self.store
    }

    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductError> {
        Ok(self.store.list(filter).await?)
    }

    pub async fn get(&self, id: &str) -> Result<Product, ProductError> {
        let product_id = parse_id(id)?;
        self.store
            .find(product_id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    pub async fn create(&self, body: &Value) -> Result<Product, ProductError> {
        let product = NewProduct::from_json(body)?.into_product(Utc::now());
        self.store.insert(&product).await?;
        Ok(product)
    }

    /// Parse a raw request body and create from it
    pub async fn create_from_bytes(&self, body: &[u8]) -> Result<Product, ProductError> {
        self.create(&parse_body(body)?).await
    }

    pub async fn update(&self, id: &str, body: &Value) -> Result<Product, ProductError> {
        // Payload is checked before the store is consulted
        let patch = ProductPatch::from_json(body)?;
        let product_id = parse_id(id)?;

        self.store
            .update(product_id, &patch, Utc::now())
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    pub async fn update_from_bytes(&self, id: &str, body: &[u8]) -> Result<Product, ProductError> {
        self.update(id, &parse_body(body)?).await
    }

    pub async fn delete(&self, id: &str) -> Result<Product, ProductError> {
        let product_id = parse_id(id)?;
        self.store
            .delete(product_id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    pub async fn health_check(&self) -> Result<(), ProductError> {
        Ok(self.store.health_check().await?)
    }
}

// A malformed identifier cannot name any record
fn parse_id(id: &str) -> Result<ProductId, ProductError> {
    id.parse()
        .map_err(|_| ProductError::NotFound(id.to_string()))
}

fn parse_body(body: &[u8]) -> Result<Value, ProductError> {
    serde_json::from_slice(body).map_err(|e| ProductError::InvalidPayload(e.to_string()))
}
