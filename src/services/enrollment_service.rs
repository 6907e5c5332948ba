//! Enrollment service
//!
//! Resolves a contestant by name (creating one on first appearance) and
//! ensures exactly one enrollment link to the contest exists.

use sqlx::PgPool;

use crate::{
    db::repositories::ContestantRepository,
    error::{AppError, AppResult},
};

/// Outcome of resolving a contestant name for a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollmentOutcome {
    pub concursante_id: i64,
    /// Whether the contestant was newly created (drives 201 vs 200)
    pub created: bool,
}

/// Enrollment service for business logic
pub struct EnrollmentService;

impl EnrollmentService {
    /// Find-or-create a contestant by name and enroll it in the contest.
    ///
    /// Both writes run in one transaction: a crash between contestant
    /// creation and enrollment can never leave an orphaned contestant
    /// visible. Re-enrolling an already enrolled pair is a silent no-op.
    pub async fn resolve_and_enroll(
        pool: &PgPool,
        nombre: &str,
        concurso_id: i64,
    ) -> AppResult<EnrollmentOutcome> {
        let mut tx = pool.begin().await?;

        let (concursante_id, created) =
            match ContestantRepository::insert_if_absent(&mut tx, nombre).await? {
                Some(contestant) => (contestant.concursante_id, true),
                None => {
                    // Lost the insert to an existing name; the unique index
                    // guarantees the row is there to read.
                    let contestant = ContestantRepository::find_by_name(&mut tx, nombre)
                        .await?
                        .ok_or_else(|| {
                            AppError::Database(format!(
                                "contestant '{nombre}' vanished between insert and lookup"
                            ))
                        })?;
                    (contestant.concursante_id, false)
                }
            };

        let enrollment =
            ContestantRepository::enroll(&mut tx, concursante_id, concurso_id).await?;

        tx.commit().await?;

        tracing::debug!(
            concursante_id,
            concurso_id,
            created,
            enrolled = enrollment.is_some(),
            "resolved contestant"
        );

        Ok(EnrollmentOutcome {
            concursante_id,
            created,
        })
    }
}
