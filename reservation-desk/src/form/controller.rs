//! Booking form state controller
//!
//! Owns the [`ReservationDraft`] and the [`ErrorSet`] of one form instance.
//! Edits never validate; they only store the value and drop that field's
//! error. Submitting validates the whole draft and either acknowledges it or
//! replaces the error set wholesale.

use shared::validation::{self, FieldErrors};
use shared::{AppResult, ReservationDraft, ReservationField};
use std::collections::BTreeMap;

/// Text shown to the guest after a successful submission
pub const BOOKING_CONFIRMATION: &str = "Booking successful! We look forward to serving you.";

/// Current per-field validation messages, keyed in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet(BTreeMap<ReservationField, String>);

impl ErrorSet {
    pub fn get(&self, field: ReservationField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ReservationField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ReservationField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn remove(&mut self, field: ReservationField) -> Option<String> {
        self.0.remove(&field)
    }
}

impl From<&FieldErrors> for ErrorSet {
    fn from(errors: &FieldErrors) -> Self {
        Self(
            errors
                .iter()
                .map(|e| (e.field, e.message.clone()))
                .collect(),
        )
    }
}

/// Confirmation handed back to the UI on a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub message: &'static str,
    /// Draft as it was submitted
    pub draft: ReservationDraft,
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Acknowledgment),
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// What the form should look like right now, derived from controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Editing,
    SubmittedWithErrors,
    SubmittedSuccess,
}

/// Parse party size text the way a lenient number field does
///
/// Leading whitespace, an optional sign, then as many digits as follow.
/// Anything without leading digits becomes 0 so that it fails the range
/// rule on submit instead of being dropped here. Large magnitudes saturate.
pub fn coerce_guests(raw: &str) -> i32 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'));

    let mut magnitude: i64 = 0;
    let mut seen = false;
    for d in digits {
        seen = true;
        magnitude = (magnitude * 10 + d).min(i64::from(i32::MAX) + 1);
    }
    if !seen {
        return 0;
    }

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Form state for a single booking form
#[derive(Debug, Clone, Default)]
pub struct FormController {
    draft: ReservationDraft,
    errors: ErrorSet,
    /// Set by an accepted submit, cleared by the next edit
    accepted: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn error_for(&self, field: ReservationField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn display_state(&self) -> DisplayState {
        if !self.errors.is_empty() {
            DisplayState::SubmittedWithErrors
        } else if self.accepted {
            DisplayState::SubmittedSuccess
        } else {
            DisplayState::Editing
        }
    }

    /// Store a raw input value and drop that field's error
    ///
    /// The error goes away even if the new value is still invalid; it comes
    /// back only on the next submit.
    pub fn on_field_change(&mut self, field: ReservationField, raw_value: &str) {
        match field {
            ReservationField::Date => self.draft.date = raw_value.to_string(),
            ReservationField::Time => self.draft.time = raw_value.to_string(),
            ReservationField::Guests => self.draft.guests = coerce_guests(raw_value),
            ReservationField::Occasion => self.draft.occasion = raw_value.to_string(),
            ReservationField::SpecialRequests => {
                self.draft.special_requests = raw_value.to_string()
            }
        }

        let cleared = self.errors.remove(field).is_some();
        self.accepted = false;
        tracing::trace!(field = %field, cleared, "Booking field changed");
    }

    /// Same as [`Self::on_field_change`], addressed by form identifier
    pub fn on_field_change_named(&mut self, name: &str, raw_value: &str) -> AppResult<()> {
        let field: ReservationField = name.parse()?;
        self.on_field_change(field, raw_value);
        Ok(())
    }

    /// Validate the whole draft
    ///
    /// On success the draft is left as is (no reset) and a diagnostic
    /// record goes to the `booking` log target. On failure the error set is
    /// replaced by exactly the fields that failed this time.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        match validation::check(&self.draft) {
            Ok(()) => {
                self.errors = ErrorSet::default();
                self.accepted = true;

                let record = serde_json::to_string(&self.draft).unwrap_or_default();
                tracing::info!(target: "booking", draft = %record, "Booking submitted");

                SubmitOutcome::Accepted(Acknowledgment {
                    message: BOOKING_CONFIRMATION,
                    draft: self.draft.clone(),
                })
            }
            Err(errors) => {
                self.errors = ErrorSet::from(&errors);
                self.accepted = false;
                tracing::debug!(failed = errors.len(), "Booking form rejected: {}", errors);
                SubmitOutcome::Rejected(errors)
            }
        }
    }
}
