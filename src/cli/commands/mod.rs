pub mod product;
pub mod seed;
pub mod token;
