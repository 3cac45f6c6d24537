//! Unified error system for the reservation desk
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! Field validation failures are not errors of the application; they are
//! user guidance and live in [`crate::validation`]. They only become an
//! [`AppError`] when a caller needs a single error value.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::UnknownField).with_detail("field", "party");
//! assert_eq!(err.code.code(), 4001);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
