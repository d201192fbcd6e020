//! Department entity model and DTOs.

use registrar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateDepartment {
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateDepartment {
    pub title: Option<String>,
}
