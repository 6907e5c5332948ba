//! Contest voting backend
//!
//! This library implements a small voting service for contests
//! (concursos): contestants are enrolled into contests by name, voters
//! submit a numeric rating (calificación) per contestant per contest, and
//! standings expose each enrolled contestant with their current rating.
//!
//! # Invariants
//!
//! - A contestant holds at most one rating per contest; repeated votes
//!   overwrite the stored value atomically.
//! - Enrolling a known name never creates a duplicate contestant, and
//!   re-enrolling is a silent no-op.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
