//! Contest handler implementations

use axum::{Json, extract::State};

use crate::{error::AppResult, services::StandingsService, state::AppState};

use super::response::ContestRow;

/// List all contests
///
/// Zero contests is an empty array, never an error.
pub async fn list_contests(State(state): State<AppState>) -> AppResult<Json<Vec<ContestRow>>> {
    let contests = StandingsService::list_contests(state.db()).await?;
    Ok(Json(contests))
}
