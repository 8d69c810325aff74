//! Customer review model.

use serde::Serialize;
use sqlx::FromRow;
use stockroom_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Review {
    pub id: DbId,
    pub product_id: DbId,
    pub rating: i64,
    pub comment: Option<String>,
    pub reviewer_name: String,
    pub created_at: Timestamp,
}

/// Validated write model for inserting a review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub product_id: DbId,
    pub rating: i64,
    pub comment: Option<String>,
    pub reviewer_name: String,
}

/// Aggregated rating statistics for one product.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RatingStats {
    pub total: i64,
    /// `None` when the product has no reviews.
    pub average: Option<f64>,
    pub five_star: i64,
    pub four_star: i64,
    pub three_star: i64,
    pub two_star: i64,
    pub one_star: i64,
}
