//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use registrar_core::types::DbId;
use serde::Deserialize;

/// Query parameters for list endpoints with a free-text search (`?q=`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Query parameters for list endpoints filterable by department.
#[derive(Debug, Default, Deserialize)]
pub struct DepartmentParams {
    pub department_id: Option<DbId>,
}
