// handlers/protected/products/mod.rs - Product mutations

pub mod product_delete;
pub mod product_post;
pub mod product_put;

pub use product_delete::product_delete;
pub use product_post::product_post;
pub use product_put::product_put;
