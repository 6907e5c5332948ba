//! Rating service

use sqlx::PgPool;

use crate::{db::repositories::RatingRepository, error::AppResult};

/// Rating upsert service for business logic
pub struct RatingService;

impl RatingService {
    /// Store the rating for a (contestant, contest) pair.
    ///
    /// Exactly one rating row exists per pair afterwards: the first vote
    /// inserts it, later votes overwrite the value (no history is kept).
    /// Returns `true` when the rating was newly registered, `false` when
    /// an existing one was updated.
    pub async fn upsert_rating(
        pool: &PgPool,
        concursante_id: i64,
        concurso_id: i64,
        calificacion: f64,
    ) -> AppResult<bool> {
        let (rating, created) =
            RatingRepository::upsert(pool, concursante_id, concurso_id, calificacion).await?;

        tracing::debug!(
            concursante_id,
            concurso_id,
            calificacion = rating.calificacion,
            created,
            "stored rating"
        );

        Ok(created)
    }
}
