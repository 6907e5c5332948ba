//! Contestant repository
//!
//! The find-or-create and enrollment statements take a `PgConnection` so
//! the enrollment service can run them inside one transaction.

use sqlx::PgConnection;

use crate::{
    error::AppResult,
    models::{Contestant, Enrollment},
};

/// Repository for contestant and enrollment database operations
pub struct ContestantRepository;

impl ContestantRepository {
    /// Insert a contestant, skipping the insert if the name is taken.
    ///
    /// Returns the new row when one was created, `None` when a contestant
    /// with this name already exists. The unique index on `nombre` makes
    /// this race-free: two concurrent calls can never both create.
    pub async fn insert_if_absent(
        conn: &mut PgConnection,
        nombre: &str,
    ) -> AppResult<Option<Contestant>> {
        let contestant = sqlx::query_as::<_, Contestant>(
            r#"
            INSERT INTO concursantes (nombre)
            VALUES ($1)
            ON CONFLICT (nombre) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(nombre)
        .fetch_optional(conn)
        .await?;

        Ok(contestant)
    }

    /// Find a contestant by exact name
    pub async fn find_by_name(
        conn: &mut PgConnection,
        nombre: &str,
    ) -> AppResult<Option<Contestant>> {
        let contestant = sqlx::query_as::<_, Contestant>(
            r#"SELECT * FROM concursantes WHERE nombre = $1"#,
        )
        .bind(nombre)
        .fetch_optional(conn)
        .await?;

        Ok(contestant)
    }

    /// Enroll a contestant in a contest (idempotent).
    ///
    /// Returns the enrollment row when one was created, `None` when the
    /// pair was already enrolled.
    pub async fn enroll(
        conn: &mut PgConnection,
        concursante_id: i64,
        concurso_id: i64,
    ) -> AppResult<Option<Enrollment>> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            INSERT INTO concursantes_concursos (concursante_id, concurso_id)
            VALUES ($1, $2)
            ON CONFLICT (concursante_id, concurso_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(concursante_id)
        .bind(concurso_id)
        .fetch_optional(conn)
        .await?;

        Ok(enrollment)
    }
}
