//! Request handlers for the catalog API.

pub mod health;
pub mod products;

pub use health::health_check;
pub use products::{create_product, delete_product, get_products, update_product};
