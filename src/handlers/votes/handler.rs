//! Vote handler implementations

use axum::{Json, extract::State};

use crate::{error::AppResult, services::RatingService, state::AppState};

use super::{
    request::SubmitVoteRequest,
    response::{SubmitVoteResponse, vote_message},
};

/// Submit or update a rating for a (contestant, contest) pair
pub async fn submit_vote(
    State(state): State<AppState>,
    Json(payload): Json<SubmitVoteRequest>,
) -> AppResult<Json<SubmitVoteResponse>> {
    let (concursante_id, concurso_id, calificacion) = payload.into_parts()?;

    let created =
        RatingService::upsert_rating(state.db(), concursante_id, concurso_id, calificacion)
            .await?;

    Ok(Json(SubmitVoteResponse {
        message: vote_message(created).to_string(),
    }))
}
