//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod contestants;
pub mod contests;
pub mod health;
pub mod votes;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(contests::routes())
        .merge(contestants::routes())
        .merge(votes::routes())
}
