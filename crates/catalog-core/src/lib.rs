//! Core domain models, validation, and storage for the product catalog.
//!
//! Provides the `Product` entity, payload validation against the catalog
//! business rules, and the repository layer over a shared PostgreSQL pool.
//! The HTTP crate depends on these foundational types; no SQL is issued
//! outside the storage module.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod storage;
pub mod validate;

pub use error::{CoreError, Result};
pub use models::{NewProduct, Product, ProductId};
pub use validate::{validate_product, ValidationError, MAX_PRODUCT_NAME_LENGTH};
