//! Room entity model and DTOs.

use registrar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub number: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateRoom {
    pub number: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateRoom {
    pub number: Option<String>,
}
