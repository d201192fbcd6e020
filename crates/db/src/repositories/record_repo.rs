//! Repository for the `records` table.
//!
//! A record owns its meetings and student records. Deletion is an
//! explicit transaction that removes the dependents first; the schema's
//! RESTRICT foreign keys make sure no other path can orphan or cascade
//! them implicitly.

use registrar_core::types::DbId;
use sqlx::PgPool;

use crate::models::record::{CreateRecord, Record, RecordFilter, UpdateRecord};

const COLUMNS: &str = "id, academic_year, academic_term, curriculum_course_id, advisor_id, section_id";

/// Provides CRUD operations for enrollment records.
pub struct RecordRepo;

impl RecordRepo {
    pub async fn create(pool: &PgPool, input: &CreateRecord) -> Result<Record, sqlx::Error> {
        let query = format!(
            "INSERT INTO records (academic_year, academic_term, curriculum_course_id, advisor_id, section_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(input.academic_year)
            .bind(input.academic_term)
            .bind(input.curriculum_course_id)
            .bind(input.advisor_id)
            .bind(input.section_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records WHERE id = $1");
        sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List records, newest academic year first, filtered by any
    /// combination of year, term, advisor, and section.
    pub async fn list(pool: &PgPool, filter: &RecordFilter) -> Result<Vec<Record>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM records
             WHERE ($1::integer IS NULL OR academic_year = $1)
               AND ($2::smallint IS NULL OR academic_term = $2)
               AND ($3::bigint IS NULL OR advisor_id = $3)
               AND ($4::bigint IS NULL OR section_id = $4)
             ORDER BY academic_year DESC, academic_term, id"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(filter.academic_year)
            .bind(filter.academic_term)
            .bind(filter.advisor_id)
            .bind(filter.section_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecord,
    ) -> Result<Option<Record>, sqlx::Error> {
        let query = format!(
            "UPDATE records SET
                academic_year = COALESCE($2, academic_year),
                academic_term = COALESCE($3, academic_term),
                curriculum_course_id = COALESCE($4, curriculum_course_id),
                advisor_id = COALESCE($5, advisor_id),
                section_id = COALESCE($6, section_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .bind(input.academic_year)
            .bind(input.academic_term)
            .bind(input.curriculum_course_id)
            .bind(input.advisor_id)
            .bind(input.section_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a record together with the meetings and student records it
    /// owns, in one transaction. Returns `true` if the record existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM meetings WHERE record_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM student_records WHERE record_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM records WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
