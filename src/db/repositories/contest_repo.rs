//! Contest repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Contest};

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// List all contests
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(
            r#"SELECT * FROM concursos ORDER BY concurso_id"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(contests)
    }

    /// Check whether a contest exists
    pub async fn exists(pool: &PgPool, concurso_id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM concursos WHERE concurso_id = $1)"#,
        )
        .bind(concurso_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
