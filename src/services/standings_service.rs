//! Standings service

use sqlx::PgPool;

use crate::{
    db::repositories::ContestRepository,
    error::{AppError, AppResult},
    handlers::contestants::response::StandingRow,
    handlers::contests::response::ContestRow,
};

/// Standings reader for business logic
pub struct StandingsService;

impl StandingsService {
    /// List every contestant enrolled in a contest with their current
    /// rating, defaulting to 0 when no vote was submitted.
    ///
    /// An unknown contest id is `NotFound`; an existing contest with zero
    /// enrollments is a valid empty result, not an error.
    pub async fn list_standings(pool: &PgPool, concurso_id: i64) -> AppResult<Vec<StandingRow>> {
        if !ContestRepository::exists(pool, concurso_id).await? {
            return Err(AppError::NotFound(format!(
                "Contest {concurso_id} does not exist"
            )));
        }

        let standings = sqlx::query_as::<_, StandingRow>(
            r#"
            SELECT
                c.concursante_id,
                c.nombre,
                COALESCE(cal.calificacion, 0) AS calificacion
            FROM concursantes c
            JOIN concursantes_concursos cc ON c.concursante_id = cc.concursante_id
            LEFT JOIN calificaciones cal ON c.concursante_id = cal.concursante_id
                AND cal.concurso_id = cc.concurso_id
            WHERE cc.concurso_id = $1
            ORDER BY c.concursante_id
            "#,
        )
        .bind(concurso_id)
        .fetch_all(pool)
        .await?;

        Ok(standings)
    }

    /// List all contest ids
    pub async fn list_contests(pool: &PgPool) -> AppResult<Vec<ContestRow>> {
        let contests = ContestRepository::list(pool).await?;

        Ok(contests
            .into_iter()
            .map(|c| ContestRow {
                concurso_id: c.concurso_id,
            })
            .collect())
    }
}
