//! Sample catalog inserted on first run against an empty store.

use crate::DbPool;

/// Fixed sample catalog: (name, category, quantity, price, description).
const SAMPLE_PRODUCTS: &[(&str, &str, i64, f64, &str)] = &[
    ("Laptop Pro 15\"", "Electronics", 15, 1299.99, "High-performance laptop with 16GB RAM"),
    ("Wireless Mouse", "Electronics", 45, 29.99, "Ergonomic wireless mouse with USB receiver"),
    ("Mechanical Keyboard", "Electronics", 30, 89.99, "RGB backlit mechanical keyboard"),
    ("USB-C Hub", "Electronics", 60, 49.99, "7-in-1 USB-C multiport adapter"),
    ("Monitor 27\"", "Electronics", 20, 349.99, "4K UHD monitor with HDR support"),
    ("Office Chair", "Furniture", 12, 299.99, "Ergonomic office chair with lumbar support"),
    ("Standing Desk", "Furniture", 8, 599.99, "Electric height-adjustable standing desk"),
    ("Desk Lamp", "Furniture", 25, 39.99, "LED desk lamp with adjustable brightness"),
    ("Bookshelf", "Furniture", 10, 149.99, "5-tier wooden bookshelf"),
    ("File Cabinet", "Furniture", 15, 199.99, "3-drawer locking file cabinet"),
    ("Notebook A5", "Stationery", 100, 4.99, "Hardcover ruled notebook, 200 pages"),
    ("Pen Set", "Stationery", 80, 12.99, "Premium ballpoint pen set, 10 pieces"),
    ("Sticky Notes", "Stationery", 150, 3.99, "Colorful sticky notes pack, 6 colors"),
    ("Stapler", "Stationery", 40, 8.99, "Heavy-duty stapler with 1000 staples"),
    ("Paper Clips", "Stationery", 200, 2.99, "Assorted paper clips, 500 count"),
    ("Coffee Maker", "Appliances", 18, 79.99, "12-cup programmable coffee maker"),
    ("Water Bottle", "Accessories", 90, 19.99, "Insulated stainless steel water bottle"),
    ("Backpack", "Accessories", 35, 59.99, "Laptop backpack with USB charging port"),
    ("Headphones", "Electronics", 25, 149.99, "Noise-cancelling wireless headphones"),
    ("Webcam HD", "Electronics", 22, 69.99, "1080p HD webcam with built-in microphone"),
];

/// Insert the sample catalog when the `products` table is empty.
///
/// Re-running against a populated store inserts nothing, so repeated
/// bootstraps never duplicate the catalog.
pub async fn seed_sample_products(pool: &DbPool) -> Result<(), sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for &(name, category, quantity, price, description) in SAMPLE_PRODUCTS {
        sqlx::query(
            "INSERT INTO products (name, category, quantity, price, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(name)
        .bind(category)
        .bind(quantity)
        .bind(price)
        .bind(description)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!(count = SAMPLE_PRODUCTS.len(), "Seeded sample product catalog");
    Ok(())
}
