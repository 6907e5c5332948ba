//! Rating (calificación) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Rating database model
///
/// The unique key on (concursante_id, concurso_id) is the consistency
/// guarantee the upsert relies on: a contestant holds at most one rating
/// per contest, and repeated votes overwrite the value in place.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Rating {
    pub calificacion_id: i64,
    pub concursante_id: i64,
    pub concurso_id: i64,
    pub calificacion: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
