//! Repository for the `products` table.

use sqlx::SqlitePool;
use stockroom_core::types::DbId;

use crate::models::product::{NewProduct, Product};

/// Column list for product queries.
const COLUMNS: &str = "id, name, category, quantity, price, description, image_filename";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List all products, grouped by category then name (both ascending).
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY category, name");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = ?1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product, returning its assigned ID.
    pub async fn create(pool: &SqlitePool, input: &NewProduct) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO products (name, category, quantity, price, description, image_filename)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&input.name)
        .bind(&input.category)
        .bind(input.quantity)
        .bind(input.price)
        .bind(&input.description)
        .bind(&input.image_filename)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replace every column of a product. Returns `true` if a row was updated.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &NewProduct,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products
             SET name = ?2, category = ?3, quantity = ?4, price = ?5,
                 description = ?6, image_filename = ?7
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.category)
        .bind(input.quantity)
        .bind(input.price)
        .bind(&input.description)
        .bind(&input.image_filename)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a product by ID. Returns `true` if a row was deleted.
    ///
    /// Review rows follow by cascade; the caller is responsible for the
    /// associated image file.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
