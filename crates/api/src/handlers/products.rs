//! Handlers for the product catalog.
//!
//! `quantity` and `price` arrive as raw JSON values so both numbers and
//! numeric strings are accepted; parsing and range checks live in
//! `stockroom_core::catalog`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use stockroom_core::catalog;
use stockroom_core::error::CoreError;
use stockroom_core::types::DbId;
use stockroom_db::models::product::{NewProduct, Product};
use stockroom_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// Incoming product payload for create and update.
///
/// On create the first four fields are required; on update any subset may
/// be supplied and unspecified fields retain their prior values.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<serde_json::Value>,
    pub price: Option<serde_json::Value>,
    pub description: Option<String>,
    /// Free text; deliberately not checked against the upload store.
    pub image_filename: Option<String>,
}

/// GET /api/products
///
/// List all products, grouped by category then name.
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(product))
}

/// POST /api/products
///
/// Create a new product. Requires `name`, `category`, `quantity`, `price`.
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let (Some(name), Some(category), Some(quantity), Some(price)) = (
        payload.name,
        payload.category,
        payload.quantity,
        payload.price,
    ) else {
        return Err(CoreError::Validation("Missing required fields".to_string()).into());
    };

    catalog::validate_name(&name)?;
    catalog::validate_category(&category)?;
    let quantity = catalog::parse_quantity(&quantity)?;
    let price = catalog::parse_price(&price)?;

    let input = NewProduct {
        name,
        category,
        quantity,
        price,
        description: payload.description.unwrap_or_default(),
        image_filename: payload.image_filename,
    };

    let id = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(product_id = id, name = %input.name, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Product added successfully",
        }),
    ))
}

/// PUT /api/products/{id}
///
/// Update a product. Unspecified fields keep their prior values; the
/// storage-level write replaces every column.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<Json<MessageResponse>> {
    let existing = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    let name = payload.name.unwrap_or(existing.name);
    let category = payload.category.unwrap_or(existing.category);
    catalog::validate_name(&name)?;
    catalog::validate_category(&category)?;

    let quantity = match payload.quantity {
        Some(ref value) => catalog::parse_quantity(value)?,
        None => existing.quantity,
    };
    let price = match payload.price {
        Some(ref value) => catalog::parse_price(value)?,
        None => existing.price,
    };

    let input = NewProduct {
        name,
        category,
        quantity,
        price,
        description: payload.description.unwrap_or(existing.description),
        image_filename: payload.image_filename.or(existing.image_filename),
    };

    if !ProductRepo::update(&state.pool, id, &input).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    tracing::info!(product_id = id, "Product updated");

    Ok(Json(MessageResponse {
        message: "Product updated successfully",
    }))
}

/// DELETE /api/products/{id}
///
/// Delete a product and its reviews (cascade). The associated image file is
/// removed best-effort: a failed file deletion is logged and the request
/// still succeeds.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let existing = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    if !ProductRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    if let Some(filename) = existing.image_filename {
        let path = std::path::Path::new(&state.config.upload_dir).join(&filename);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!(
                product_id = id,
                filename = %filename,
                error = %e,
                "Failed to remove product image file"
            );
        }
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(Json(MessageResponse {
        message: "Product deleted successfully",
    }))
}
