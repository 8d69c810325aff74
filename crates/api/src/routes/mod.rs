pub mod health;
pub mod products;
pub mod reviews;
pub mod uploads;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                       list, create
/// /products/{id}                  get, update, delete
/// /products/{id}/reviews          list, create
/// /products/{id}/reviews/stats    rating histogram
/// /reviews/{id}                   delete
/// /upload-image                   multipart image upload (POST)
/// ```
///
/// Image serving lives at the root (`/uploads/{filename}`), mounted
/// separately via [`uploads::serve_router`].
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/reviews", reviews::router())
        .merge(uploads::upload_router(config.max_upload_bytes))
}
