//! Route definitions for the product catalog, mounted at `/products`.
//!
//! Review routes for a single product live here too since they are
//! addressed through the product id.

use axum::routing::get;
use axum::Router;

use crate::handlers::{products, reviews};
use crate::state::AppState;

/// Product catalog routes.
///
/// ```text
/// GET    /                      -> list_products
/// POST   /                      -> create_product
/// GET    /{id}                  -> get_product
/// PUT    /{id}                  -> update_product
/// DELETE /{id}                  -> delete_product
/// GET    /{id}/reviews          -> list_reviews
/// POST   /{id}/reviews          -> create_review
/// GET    /{id}/reviews/stats    -> review_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/{id}/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route("/{id}/reviews/stats", get(reviews::review_stats))
}
