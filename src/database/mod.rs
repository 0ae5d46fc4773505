pub mod manager;
pub mod memory;
pub mod models;
pub mod repository;
pub mod store;
pub mod validation;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryProductStore;
pub use models::product::{Category, NewProduct, Product, ProductFilter, ProductId, ProductPatch};
pub use repository::ProductRepository;
pub use store::{ProductStore, SharedProductStore};
pub use validation::ValidationErrors;
