//! Business logic services

pub mod enrollment_service;
pub mod rating_service;
pub mod standings_service;

pub use enrollment_service::EnrollmentService;
pub use rating_service::RatingService;
pub use standings_service::StandingsService;
