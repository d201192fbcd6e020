//! Repository for the `professors` table.

use registrar_core::types::DbId;
use sqlx::PgPool;

use crate::models::professor::{CreateProfessor, Professor, UpdateProfessor};

const COLUMNS: &str = "user_id, title_prefix, title_suffix";

/// Provides CRUD operations for professor profiles.
pub struct ProfessorRepo;

impl ProfessorRepo {
    pub async fn create(pool: &PgPool, input: &CreateProfessor) -> Result<Professor, sqlx::Error> {
        let query = format!(
            "INSERT INTO professors (user_id, title_prefix, title_suffix)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Professor>(&query)
            .bind(input.user_id)
            .bind(&input.title_prefix)
            .bind(&input.title_suffix)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_user_id(pool: &PgPool, user_id: DbId) -> Result<Option<Professor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM professors WHERE user_id = $1");
        sqlx::query_as::<_, Professor>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all professors ordered by the underlying user's name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Professor>, sqlx::Error> {
        let query = format!(
            "SELECT p.{COLUMNS} FROM professors p
             JOIN users u ON u.id = p.user_id
             ORDER BY u.last_name, u.first_name"
        );
        sqlx::query_as::<_, Professor>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfessor,
    ) -> Result<Option<Professor>, sqlx::Error> {
        let query = format!(
            "UPDATE professors SET
                title_prefix = COALESCE($2, title_prefix),
                title_suffix = COALESCE($3, title_suffix)
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Professor>(&query)
            .bind(user_id)
            .bind(&input.title_prefix)
            .bind(&input.title_suffix)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM professors WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
