// handlers/public/mod.rs - Public handlers (no session required)
//
// Route Prefix: /api/products (reads), /api/auth/*, /api, /health

pub mod auth;
pub mod meta;
pub mod products;
