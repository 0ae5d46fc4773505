// handlers/public/products/mod.rs - Product reads

pub mod product_get;
pub mod products_get;

pub use product_get::product_get;
pub use products_get::products_get;
