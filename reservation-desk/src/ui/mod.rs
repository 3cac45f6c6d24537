//! Terminal views
//!
//! - [`shell`]: static page frame (header, navigation, booking card)
//! - [`form_view`]: the booking form bound to a [`crate::form::FormController`]
//! - [`alert`]: modal acknowledgment popup

pub mod alert;
pub mod form_view;
pub mod shell;

pub use alert::render_alert;
pub use form_view::{Focus, FormAction, FormView};
pub use shell::PageShell;
