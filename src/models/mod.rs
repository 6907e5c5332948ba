//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod contest;
pub mod contestant;
pub mod rating;

pub use contest::*;
pub use contestant::*;
pub use rating::*;
