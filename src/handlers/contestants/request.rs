//! Contestant request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NOMBRE_LENGTH;
use crate::error::{AppError, AppResult};

/// Create-or-assign contestant request
///
/// Fields are optional at the serde level so a missing field yields the
/// endpoint's own 400 error body instead of a body-rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContestantRequest {
    #[validate(length(min = 1, max = MAX_NOMBRE_LENGTH))]
    pub nombre: Option<String>,

    pub concurso_id: Option<i64>,
}

impl CreateContestantRequest {
    /// Check both fields are present and the name is non-blank
    pub fn into_parts(self) -> AppResult<(String, i64)> {
        let nombre = self
            .nombre
            .ok_or_else(|| AppError::Validation("nombre is required".to_string()))?;
        if nombre.trim().is_empty() {
            return Err(AppError::Validation("nombre must not be empty".to_string()));
        }
        let concurso_id = self
            .concurso_id
            .ok_or_else(|| AppError::Validation("concurso_id is required".to_string()))?;

        Ok((nombre, concurso_id))
    }
}
