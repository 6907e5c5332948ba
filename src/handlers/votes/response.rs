//! Vote response DTOs

use serde::Serialize;

/// Vote submission response
#[derive(Debug, Serialize)]
pub struct SubmitVoteResponse {
    pub message: String,
}

/// User-facing message for a vote outcome
pub fn vote_message(created: bool) -> &'static str {
    if created {
        "Calificación registrada con éxito"
    } else {
        "Calificación actualizada con éxito"
    }
}
