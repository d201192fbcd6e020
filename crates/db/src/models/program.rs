//! Degree program entity model and DTOs.

use registrar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Program {
    pub id: DbId,
    pub title: String,
    pub department_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct CreateProgram {
    pub title: String,
    pub department_id: DbId,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProgram {
    pub title: Option<String>,
    pub department_id: Option<DbId>,
}
