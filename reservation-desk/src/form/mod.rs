//! Booking form state

pub mod controller;

pub use controller::{
    Acknowledgment, BOOKING_CONFIRMATION, DisplayState, ErrorSet, FormController, SubmitOutcome,
    coerce_guests,
};
