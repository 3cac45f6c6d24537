//! Data models
//!
//! Shared between the booking form controller and its views.

pub mod reservation;

// Re-exports
pub use reservation::*;
