//! Vote request DTOs

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Vote submission request
///
/// Presence is checked explicitly per field so that a rating of 0 is
/// accepted; only a field that is actually absent is a validation error.
#[derive(Debug, Deserialize)]
pub struct SubmitVoteRequest {
    pub calificacion: Option<f64>,
    pub concursante_id: Option<i64>,
    pub concurso_id: Option<i64>,
}

impl SubmitVoteRequest {
    /// Check all three fields are present
    pub fn into_parts(self) -> AppResult<(i64, i64, f64)> {
        let calificacion = self
            .calificacion
            .ok_or_else(|| AppError::Validation("calificacion is required".to_string()))?;
        let concursante_id = self
            .concursante_id
            .ok_or_else(|| AppError::Validation("concursante_id is required".to_string()))?;
        let concurso_id = self
            .concurso_id
            .ok_or_else(|| AppError::Validation("concurso_id is required".to_string()))?;

        Ok((concursante_id, concurso_id, calificacion))
    }
}
