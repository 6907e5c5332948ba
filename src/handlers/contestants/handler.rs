//! Contestant handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult,
    services::{EnrollmentService, StandingsService},
    state::AppState,
};

use super::{
    request::CreateContestantRequest,
    response::{CreateContestantResponse, StandingRow},
};

/// Create a contestant by name, or assign an existing one to the contest.
///
/// Returns 201 when the contestant was newly created, 200 when an existing
/// contestant was (re-)assigned.
pub async fn create_or_assign_contestant(
    State(state): State<AppState>,
    Json(payload): Json<CreateContestantRequest>,
) -> AppResult<(StatusCode, Json<CreateContestantResponse>)> {
    payload.validate()?;
    let (nombre, concurso_id) = payload.into_parts()?;

    let outcome = EnrollmentService::resolve_and_enroll(state.db(), &nombre, concurso_id).await?;

    let (status, message) = if outcome.created {
        (
            StatusCode::CREATED,
            "Concursante creado y asignado al concurso",
        )
    } else {
        (
            StatusCode::OK,
            "Concursante existente asignado al concurso",
        )
    };

    Ok((
        status,
        Json(CreateContestantResponse {
            message: message.to_string(),
            concursante_id: outcome.concursante_id,
        }),
    ))
}

/// List standings for a contest
///
/// 404 only when the contest id is unknown; a contest without enrollments
/// returns an empty array.
pub async fn list_contest_standings(
    State(state): State<AppState>,
    Path(concurso_id): Path<i64>,
) -> AppResult<Json<Vec<StandingRow>>> {
    let standings = StandingsService::list_standings(state.db(), concurso_id).await?;
    Ok(Json(standings))
}
