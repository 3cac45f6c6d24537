//! Shared types for the Little Lemon reservation desk
//!
//! Domain model of the booking form, its validation schema, and the error
//! types used across crates.

pub mod error;
pub mod models;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Occasion, ReservationDraft, ReservationField};
pub use validation::{FieldError, FieldErrors};
