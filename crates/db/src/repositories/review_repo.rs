//! Repository for the `reviews` table.

use sqlx::SqlitePool;
use stockroom_core::types::DbId;

use crate::models::review::{NewReview, RatingStats, Review};

/// Column list for review queries.
const COLUMNS: &str = "id, product_id, rating, comment, reviewer_name, created_at";

/// Provides create/read/delete operations for reviews.
///
/// Reviews are never updated.
pub struct ReviewRepo;

impl ReviewRepo {
    /// List reviews for a product, newest first.
    ///
    /// `created_at` has second granularity, so `id` breaks ties to keep the
    /// order stable for reviews created within the same second.
    pub async fn list_by_product(
        pool: &SqlitePool,
        product_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE product_id = ?1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new review, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &NewReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (product_id, rating, comment, reviewer_name)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.product_id)
            .bind(input.rating)
            .bind(&input.comment)
            .bind(&input.reviewer_name)
            .fetch_one(pool)
            .await
    }

    /// Aggregate rating statistics for a product.
    ///
    /// A product with no reviews reports zero counts and a null average.
    pub async fn stats(
        pool: &SqlitePool,
        product_id: DbId,
    ) -> Result<RatingStats, sqlx::Error> {
        sqlx::query_as::<_, RatingStats>(
            "SELECT
                COUNT(*) AS total,
                AVG(rating) AS average,
                COALESCE(SUM(CASE WHEN rating = 5 THEN 1 ELSE 0 END), 0) AS five_star,
                COALESCE(SUM(CASE WHEN rating = 4 THEN 1 ELSE 0 END), 0) AS four_star,
                COALESCE(SUM(CASE WHEN rating = 3 THEN 1 ELSE 0 END), 0) AS three_star,
                COALESCE(SUM(CASE WHEN rating = 2 THEN 1 ELSE 0 END), 0) AS two_star,
                COALESCE(SUM(CASE WHEN rating = 1 THEN 1 ELSE 0 END), 0) AS one_star
             FROM reviews WHERE product_id = ?1",
        )
        .bind(product_id)
        .fetch_one(pool)
        .await
    }

    /// Delete a review by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
