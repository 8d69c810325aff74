//! Integration tests for schema bootstrap, evolution, and seeding.

use sqlx::SqlitePool;
use stockroom_db::models::product::NewProduct;
use stockroom_db::models::review::NewReview;
use stockroom_db::repositories::{ProductRepo, ReviewRepo};
use stockroom_db::{init_schema, seed_sample_products};

fn sample_input(name: &str, category: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        category: category.to_string(),
        quantity: 5,
        price: 9.99,
        description: String::new(),
        image_filename: None,
    }
}

// ---------------------------------------------------------------------------
// Test: bootstrap is idempotent
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn init_schema_can_run_repeatedly(pool: SqlitePool) {
    init_schema(&pool).await.unwrap();
    init_schema(&pool).await.unwrap();
    init_schema(&pool).await.unwrap();

    let products = ProductRepo::list(&pool).await.unwrap();
    assert!(products.is_empty());
}

// ---------------------------------------------------------------------------
// Test: seeding fills an empty store exactly once
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn seeding_inserts_twenty_products_once(pool: SqlitePool) {
    init_schema(&pool).await.unwrap();

    seed_sample_products(&pool).await.unwrap();
    seed_sample_products(&pool).await.unwrap();

    let products = ProductRepo::list(&pool).await.unwrap();
    assert_eq!(products.len(), 20);

    // Spot-check the five categories are all present.
    let categories: std::collections::BTreeSet<&str> =
        products.iter().map(|p| p.category.as_str()).collect();
    let expected: std::collections::BTreeSet<&str> =
        ["Accessories", "Appliances", "Electronics", "Furniture", "Stationery"]
            .into_iter()
            .collect();
    assert_eq!(categories, expected);
}

#[sqlx::test]
async fn seeding_skips_a_populated_store(pool: SqlitePool) {
    init_schema(&pool).await.unwrap();

    ProductRepo::create(&pool, &sample_input("Lone Widget", "Misc"))
        .await
        .unwrap();
    seed_sample_products(&pool).await.unwrap();

    let products = ProductRepo::list(&pool).await.unwrap();
    assert_eq!(products.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: image_filename column is added to a legacy schema
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn legacy_products_table_gains_image_column(pool: SqlitePool) {
    // A products table from before image support existed.
    sqlx::query(
        "CREATE TABLE products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            price REAL NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO products (name, category, quantity, price) VALUES ('Old', 'Misc', 1, 1.0)")
        .execute(&pool)
        .await
        .unwrap();

    // Evolution must add the column, and running again must not fail.
    init_schema(&pool).await.unwrap();
    init_schema(&pool).await.unwrap();

    let products = ProductRepo::list(&pool).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].image_filename, None);
}

// ---------------------------------------------------------------------------
// Test: deleting a product cascades to its reviews
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn product_delete_cascades_to_reviews(pool: SqlitePool) {
    init_schema(&pool).await.unwrap();

    let product_id = ProductRepo::create(&pool, &sample_input("Widget", "Misc"))
        .await
        .unwrap();
    for rating in [5, 3] {
        ReviewRepo::create(
            &pool,
            &NewReview {
                product_id,
                rating,
                comment: None,
                reviewer_name: "Anonymous".to_string(),
            },
        )
        .await
        .unwrap();
    }

    assert!(ProductRepo::delete(&pool, product_id).await.unwrap());

    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

// ---------------------------------------------------------------------------
// Test: the store rejects out-of-range ratings
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn rating_check_constraint_enforced(pool: SqlitePool) {
    init_schema(&pool).await.unwrap();

    let product_id = ProductRepo::create(&pool, &sample_input("Widget", "Misc"))
        .await
        .unwrap();

    let result = sqlx::query("INSERT INTO reviews (product_id, rating) VALUES (?1, 6)")
        .bind(product_id)
        .execute(&pool)
        .await;
    assert!(result.is_err());
}
