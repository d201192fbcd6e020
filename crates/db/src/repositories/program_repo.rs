//! Repository for the `programs` table.

use registrar_core::types::DbId;
use sqlx::PgPool;

use crate::models::program::{CreateProgram, Program, UpdateProgram};

const COLUMNS: &str = "id, title, department_id";

/// Provides CRUD operations for degree programs.
pub struct ProgramRepo;

impl ProgramRepo {
    pub async fn create(pool: &PgPool, input: &CreateProgram) -> Result<Program, sqlx::Error> {
        let query = format!(
            "INSERT INTO programs (title, department_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Program>(&query)
            .bind(&input.title)
            .bind(input.department_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Program>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM programs WHERE id = $1");
        sqlx::query_as::<_, Program>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List programs, optionally filtered by department, ordered by
    /// department then title.
    pub async fn list(
        pool: &PgPool,
        department_id: Option<DbId>,
    ) -> Result<Vec<Program>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM programs
             WHERE $1::bigint IS NULL OR department_id = $1
             ORDER BY department_id, title"
        );
        sqlx::query_as::<_, Program>(&query)
            .bind(department_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProgram,
    ) -> Result<Option<Program>, sqlx::Error> {
        let query = format!(
            "UPDATE programs SET
                title = COALESCE($2, title),
                department_id = COALESCE($3, department_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Program>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.department_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM programs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
