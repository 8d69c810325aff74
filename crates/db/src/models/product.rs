//! Product catalog model.

use serde::Serialize;
use sqlx::FromRow;
use stockroom_core::types::DbId;

/// A row from the `products` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub description: String,
    /// Filename in the upload store; free text, not checked against the
    /// store's contents.
    pub image_filename: Option<String>,
}

/// Validated write model for inserting or fully replacing a product.
///
/// Built by the HTTP layer after field validation; updates merge unspecified
/// fields from the existing row before reaching the repository.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub description: String,
    pub image_filename: Option<String>,
}
