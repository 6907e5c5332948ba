//! Contest model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Contest database model
///
/// Contests carry no attributes beyond identity; they are created
/// externally and never modified by this service.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub concurso_id: i64,
    pub created_at: DateTime<Utc>,
}
