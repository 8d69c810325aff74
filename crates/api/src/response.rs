//! Shared response types for mutation endpoints.
//!
//! Creation and message payloads match the service's wire contract:
//! `{ "id": ..., "message": ... }` on create, `{ "message": ... }` on
//! update/delete.

use serde::Serialize;
use stockroom_core::types::DbId;

/// Response for create endpoints that report the new row's id.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
    pub message: &'static str,
}

/// Response for update/delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
