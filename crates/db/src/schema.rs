//! Idempotent schema bootstrap and evolution.

use crate::DbPool;

const CREATE_PRODUCTS: &str = "
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        price REAL NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        image_filename TEXT
    )";

const CREATE_REVIEWS: &str = "
    CREATE TABLE IF NOT EXISTS reviews (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id INTEGER NOT NULL REFERENCES products(id) ON DELETE CASCADE,
        rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
        comment TEXT,
        reviewer_name TEXT NOT NULL DEFAULT 'Anonymous',
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )";

/// Create the schema if it does not exist and apply in-place evolution.
///
/// Safe to run on every startup: table creation is `IF NOT EXISTS` and the
/// `image_filename` column is only added when a pre-existing `products`
/// table lacks it.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS).execute(pool).await?;
    sqlx::query(CREATE_REVIEWS).execute(pool).await?;
    ensure_image_filename_column(pool).await?;
    Ok(())
}

/// Add the `image_filename` column to a `products` table created before the
/// column existed. No-op when the column is already present.
async fn ensure_image_filename_column(pool: &DbPool) -> Result<(), sqlx::Error> {
    let (present,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM pragma_table_info('products') WHERE name = 'image_filename'",
    )
    .fetch_one(pool)
    .await?;

    if present == 0 {
        sqlx::query("ALTER TABLE products ADD COLUMN image_filename TEXT")
            .execute(pool)
            .await?;
        tracing::info!("Added image_filename column to products table");
    }

    Ok(())
}
