//! Contest response DTOs

use serde::Serialize;

/// One contest in the listing
#[derive(Debug, Serialize)]
pub struct ContestRow {
    pub concurso_id: i64,
}
