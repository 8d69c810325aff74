//! Route definitions for reviews addressed by their own id, mounted at
//! `/reviews`.

use axum::routing::delete;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Review routes.
///
/// ```text
/// DELETE /{id}   -> delete_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(reviews::delete_review))
}
