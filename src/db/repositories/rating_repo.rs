//! Rating repository

use sqlx::{FromRow, PgPool, Row};

use crate::{error::AppResult, models::Rating};

/// Repository for rating (calificación) database operations
pub struct RatingRepository;

impl RatingRepository {
    /// Insert or overwrite the rating for a (contestant, contest) pair.
    ///
    /// A single atomic statement backed by the unique index on
    /// (concursante_id, concurso_id): concurrent submissions for the same
    /// pair serialize on the index, the last commit wins, and two rows can
    /// never exist. `xmax = 0` holds only for freshly inserted tuples,
    /// which distinguishes "registered" from "updated".
    pub async fn upsert(
        pool: &PgPool,
        concursante_id: i64,
        concurso_id: i64,
        calificacion: f64,
    ) -> AppResult<(Rating, bool)> {
        let row = sqlx::query(
            r#"
            INSERT INTO calificaciones (concursante_id, concurso_id, calificacion)
            VALUES ($1, $2, $3)
            ON CONFLICT (concursante_id, concurso_id)
            DO UPDATE SET calificacion = EXCLUDED.calificacion, updated_at = NOW()
            RETURNING *, (xmax = 0) AS created
            "#,
        )
        .bind(concursante_id)
        .bind(concurso_id)
        .bind(calificacion)
        .fetch_one(pool)
        .await?;

        let created: bool = row.try_get("created")?;
        let rating = Rating::from_row(&row)?;

        Ok((rating, created))
    }
}
