//! Student grade row model and DTOs.

use registrar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One student's grade row within an enrollment record.
///
/// `rating` and `remark` are both null until graded; once set they must
/// agree per `registrar_core::grading::validate_grade`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentRecord {
    pub id: DbId,
    pub record_id: DbId,
    pub student_id: DbId,
    pub rating: Option<f64>,
    /// `PSD`, `FLD`, `DRP`, or `INC`.
    pub remark: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStudentRecord {
    /// Overridden from the URL path when created via
    /// `POST /records/{id}/students`.
    #[serde(default)]
    pub record_id: Option<DbId>,
    pub student_id: DbId,
    pub rating: Option<f64>,
    pub remark: Option<String>,
}

/// Grade update. Both fields are applied as given (not patched), so a
/// grade can be cleared by sending both as null.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStudentRecord {
    pub rating: Option<f64>,
    pub remark: Option<String>,
}
