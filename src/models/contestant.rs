//! Contestant and enrollment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Contestant database model
///
/// `nombre` is the natural key: the enrollment resolver reuses an existing
/// contestant whenever the name already exists, enforced by a unique index.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contestant {
    pub concursante_id: i64,
    pub nombre: String,
    pub created_at: DateTime<Utc>,
}

/// Enrollment link between a contestant and a contest
///
/// At most one row per (concursante_id, concurso_id) pair; enrollment is
/// never updated or deleted by this service.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Enrollment {
    pub concursante_id: i64,
    pub concurso_id: i64,
    pub registered_at: DateTime<Utc>,
}
