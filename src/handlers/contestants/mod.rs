//! Contestant enrollment and standings handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Contestant routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/concursantes", post(handler::create_or_assign_contestant))
        .route(
            "/concursantes/concurso/{concurso_id}",
            get(handler::list_contest_standings),
        )
}
