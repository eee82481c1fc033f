//! Repository for product database operations.
//!
//! Translates validated inputs into parameterized SQL against the
//! `products` table and maps rows back to [`Product`] entities. Name
//! uniqueness is checked here as a separate query, not enforced by a
//! database constraint, so a concurrent writer can slip between the check
//! and the write.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductId},
};

/// Repository for product database operations.
pub struct Repository {
    pool: Arc<PgPool>,
}

impl Repository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<PgPool> {
        self.pool.clone()
    }

    /// Fetches every product.
    ///
    /// Order is whatever the store returns; callers must not rely on it.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn find_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT productid, productname, price, stock
            FROM products
            ",
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(products)
    }

    /// Finds a product by id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT productid, productname, price, stock
            FROM products
            WHERE productid = $1
            ",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(product)
    }

    /// Checks whether a product name is already in use.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn name_exists(&self, name: &str) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(
            r"
            SELECT EXISTS(SELECT 1 FROM products WHERE productname = $1)
            ",
        )
        .bind(name)
        .fetch_one(&*self.pool)
        .await?;

        Ok(exists.0)
    }

    /// Checks whether a product name is in use by any row other than `id`.
    ///
    /// Used on update so a product can keep its own name.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn name_exists_excluding(&self, name: &str, id: ProductId) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(
            r"
            SELECT EXISTS(
                SELECT 1 FROM products
                WHERE productname = $1 AND productid != $2
            )
            ",
        )
        .bind(name)
        .bind(id)
        .fetch_one(&*self.pool)
        .await?;

        Ok(exists.0)
    }

    /// Inserts a product and returns the created row with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns error if the insert fails.
    pub async fn insert(&self, product: &NewProduct) -> Result<Product> {
        let created = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (productname, price, stock)
            VALUES ($1, $2, $3)
            RETURNING productid, productname, price, stock
            ",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .fetch_one(&*self.pool)
        .await?;

        Ok(created)
    }

    /// Replaces all mutable fields of a product by id.
    ///
    /// Returns the updated row, or `None` when no row matched the id.
    ///
    /// # Errors
    ///
    /// Returns error if the update fails.
    pub async fn update(&self, id: ProductId, product: &NewProduct) -> Result<Option<Product>> {
        let updated = sqlx::query_as::<_, Product>(
            r"
            UPDATE products
            SET productname = $2, price = $3, stock = $4
            WHERE productid = $1
            RETURNING productid, productname, price, stock
            ",
        )
        .bind(id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(updated)
    }

    /// Deletes a product by id.
    ///
    /// Returns `true` when a row was removed, `false` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns error if the delete fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE productid = $1
            ",
        )
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
