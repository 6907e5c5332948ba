//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod contest_repo;
pub mod contestant_repo;
pub mod rating_repo;

pub use contest_repo::ContestRepository;
pub use contestant_repo::ContestantRepository;
pub use rating_repo::RatingRepository;
