//! Repository for the `student_records` table.
//!
//! Grade agreement (rating vs remark) is validated in the handlers via
//! `registrar_core::grading`; the table's CHECK constraints are a second
//! line of defense.

use registrar_core::types::DbId;
use sqlx::PgPool;

use crate::models::student_record::{CreateStudentRecord, StudentRecord, UpdateStudentRecord};

const COLUMNS: &str = "id, record_id, student_id, rating, remark";

/// Provides CRUD operations for student grade rows.
pub struct StudentRecordRepo;

impl StudentRecordRepo {
    /// Enroll a student in a record. `record_id` is taken from the
    /// argument, not the DTO (handlers override it from the URL path).
    pub async fn create(
        pool: &PgPool,
        record_id: DbId,
        input: &CreateStudentRecord,
    ) -> Result<StudentRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_records (record_id, student_id, rating, remark)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentRecord>(&query)
            .bind(record_id)
            .bind(input.student_id)
            .bind(input.rating)
            .bind(&input.remark)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StudentRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student_records WHERE id = $1");
        sqlx::query_as::<_, StudentRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the grade rows of a record.
    pub async fn list_by_record(pool: &PgPool, record_id: DbId) -> Result<Vec<StudentRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM student_records WHERE record_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, StudentRecord>(&query)
            .bind(record_id)
            .fetch_all(pool)
            .await
    }

    /// List a student's grade rows across all records.
    pub async fn list_by_student(pool: &PgPool, student_id: DbId) -> Result<Vec<StudentRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM student_records WHERE student_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, StudentRecord>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Set or clear a grade. Both fields are written as given.
    pub async fn update_grade(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudentRecord,
    ) -> Result<Option<StudentRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE student_records SET rating = $2, remark = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentRecord>(&query)
            .bind(id)
            .bind(input.rating)
            .bind(&input.remark)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM student_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
