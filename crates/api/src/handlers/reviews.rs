//! Handlers for customer reviews.
//!
//! Reviews hang off a product and are create/read/delete only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use stockroom_core::error::CoreError;
use stockroom_core::review;
use stockroom_core::types::DbId;
use stockroom_db::models::review::{NewReview, RatingStats, Review};
use stockroom_db::repositories::{ProductRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Incoming review payload.
///
/// `rating` arrives as a raw JSON value so integers and numeric strings are
/// both accepted.
#[derive(Debug, serde::Deserialize)]
pub struct ReviewPayload {
    pub rating: Option<serde_json::Value>,
    pub comment: Option<String>,
    pub reviewer_name: Option<String>,
}

/// Ensure the addressed product exists before touching its reviews.
async fn require_product(state: &AppState, id: DbId) -> AppResult<()> {
    ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(())
}

/// GET /api/products/{id}/reviews
///
/// List reviews for a product, newest first.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    require_product(&state, product_id).await?;

    let reviews = ReviewRepo::list_by_product(&state.pool, product_id).await?;
    Ok(Json(reviews))
}

/// POST /api/products/{id}/reviews
///
/// Create a review for a product. `rating` must be an integer in [1,5];
/// a blank or absent `reviewer_name` is stored as "Anonymous".
pub async fn create_review(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(payload): Json<ReviewPayload>,
) -> AppResult<(StatusCode, Json<Review>)> {
    require_product(&state, product_id).await?;

    let rating = match payload.rating {
        Some(ref value) => review::parse_rating(value)?,
        None => {
            return Err(CoreError::Validation("Missing required field: rating".to_string()).into())
        }
    };
    let reviewer_name = review::normalize_reviewer_name(payload.reviewer_name.as_deref());

    let input = NewReview {
        product_id,
        rating,
        comment: payload.comment,
        reviewer_name,
    };

    let created = ReviewRepo::create(&state.pool, &input).await?;

    tracing::info!(
        review_id = created.id,
        product_id,
        rating,
        "Review created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/products/{id}/reviews/stats
///
/// Rating statistics for a product: count, average, per-star histogram.
/// A product with zero reviews reports zero counts and a null average.
pub async fn review_stats(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<Json<RatingStats>> {
    require_product(&state, product_id).await?;

    let stats = ReviewRepo::stats(&state.pool, product_id).await?;
    Ok(Json(stats))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ReviewRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }));
    }

    tracing::info!(review_id = id, "Review deleted");

    Ok(Json(MessageResponse {
        message: "Review deleted successfully",
    }))
}
