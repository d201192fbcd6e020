//! Block section entity model and DTOs.

use registrar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: DbId,
    pub name: String,
    /// Open sections accept enrollment; closed ("block") sections do not.
    pub is_open: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateSection {
    pub name: String,
    pub is_open: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSection {
    pub name: Option<String>,
    pub is_open: Option<bool>,
}
