//! Booking form validation schema
//!
//! Rules are per field, with no cross-field checks:
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | date | non-empty | Date is required |
//! | time | non-empty | Time is required |
//! | guests | >= 1 | At least 1 guest required |
//! | guests | <= 10 | Maximum 10 guests allowed |
//! | specialRequests | <= 500 chars | Special requests limited to 500 characters |
//!
//! Every failing field is reported, never just the first one. Text length is
//! measured with [`input_len`], in UTF-16 code units like a browser's
//! `maxlength`, so an emoji counts as two.

use crate::error::ErrorCode;
use crate::models::{
    MAX_GUESTS, MAX_SPECIAL_REQUESTS_LEN, MIN_GUESTS, ReservationDraft, ReservationField,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

pub const DATE_REQUIRED: &str = "Date is required";
pub const TIME_REQUIRED: &str = "Time is required";
pub const GUESTS_TOO_FEW: &str = "At least 1 guest required";
pub const GUESTS_TOO_MANY: &str = "Maximum 10 guests allowed";
pub const SPECIAL_REQUESTS_TOO_LONG: &str = "Special requests limited to 500 characters";

/// Length of user-entered text in UTF-16 code units
pub fn input_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

impl Validate for ReservationDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.date.is_empty() {
            errors.add(ReservationField::Date.as_str(), rule("required", DATE_REQUIRED));
        }
        if self.time.is_empty() {
            errors.add(ReservationField::Time.as_str(), rule("required", TIME_REQUIRED));
        }
        if self.guests < MIN_GUESTS {
            errors.add(ReservationField::Guests.as_str(), rule("range", GUESTS_TOO_FEW));
        }
        if self.guests > MAX_GUESTS {
            errors.add(ReservationField::Guests.as_str(), rule("range", GUESTS_TOO_MANY));
        }
        if input_len(&self.special_requests) > MAX_SPECIAL_REQUESTS_LEN {
            errors.add(
                ReservationField::SpecialRequests.as_str(),
                rule("length", SPECIAL_REQUESTS_TOO_LONG),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A single field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: ReservationField,
    pub code: ErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn new(field: ReservationField, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }
}

/// All failures from one validation pass, one entry per field in form order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Collapse `validator` output to the first message of each field
    ///
    /// Entries for names outside [`ReservationField`] are dropped.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut collected: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .filter_map(|(name, list)| {
                let field = name.parse::<ReservationField>().ok()?;
                let first = list.first()?;
                let message = first
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| first.code.to_string());
                Some(FieldError::new(field, code_for(&first.code), message))
            })
            .collect();
        collected.sort_by_key(|e| e.field);
        Self(collected)
    }

    pub fn get(&self, field: ReservationField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

fn code_for(rule: &str) -> ErrorCode {
    match rule {
        "required" => ErrorCode::RequiredField,
        "range" => ErrorCode::ValueOutOfRange,
        "length" => ErrorCode::SpecialRequestsTooLong,
        _ => ErrorCode::ValidationFailed,
    }
}

/// Validate a whole draft
pub fn check(draft: &ReservationDraft) -> Result<(), FieldErrors> {
    draft
        .validate()
        .map_err(|errors| FieldErrors::from_validation(&errors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ReservationDraft {
        ReservationDraft {
            date: "2026-10-20".to_string(),
            time: "13:00".to_string(),
            guests: 4,
            ..Default::default()
        }
    }

    fn message_for(errors: &FieldErrors, field: ReservationField) -> Option<&str> {
        errors.get(field).map(|e| e.message.as_str())
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(check(&valid_draft()).is_ok());
    }

    #[test]
    fn test_empty_date_and_time() {
        let draft = ReservationDraft::default();
        let errors = check(&draft).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(message_for(&errors, ReservationField::Date), Some(DATE_REQUIRED));
        assert_eq!(message_for(&errors, ReservationField::Time), Some(TIME_REQUIRED));
        assert_eq!(
            errors.get(ReservationField::Date).map(|e| e.code),
            Some(ErrorCode::RequiredField)
        );
    }

    #[test]
    fn test_date_required_regardless_of_other_fields() {
        let draft = ReservationDraft {
            date: String::new(),
            guests: 50,
            special_requests: "x".repeat(600),
            ..valid_draft()
        };
        let errors = check(&draft).unwrap_err();
        assert_eq!(message_for(&errors, ReservationField::Date), Some(DATE_REQUIRED));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_guest_bounds() {
        for guests in [-5, 0] {
            let draft = ReservationDraft { guests, ..valid_draft() };
            let errors = check(&draft).unwrap_err();
            assert_eq!(message_for(&errors, ReservationField::Guests), Some(GUESTS_TOO_FEW));
            assert_eq!(errors.len(), 1);
        }

        for guests in [11, 250, i32::MAX] {
            let draft = ReservationDraft { guests, ..valid_draft() };
            let errors = check(&draft).unwrap_err();
            assert_eq!(message_for(&errors, ReservationField::Guests), Some(GUESTS_TOO_MANY));
        }

        for guests in MIN_GUESTS..=MAX_GUESTS {
            let draft = ReservationDraft { guests, ..valid_draft() };
            assert!(check(&draft).is_ok(), "guests={guests} should pass");
        }
    }

    #[test]
    fn test_special_requests_length() {
        let at_limit = ReservationDraft {
            special_requests: "a".repeat(MAX_SPECIAL_REQUESTS_LEN),
            ..valid_draft()
        };
        assert!(check(&at_limit).is_ok());

        let over_limit = ReservationDraft {
            special_requests: "a".repeat(MAX_SPECIAL_REQUESTS_LEN + 1),
            ..valid_draft()
        };
        let errors = check(&over_limit).unwrap_err();
        assert_eq!(
            message_for(&errors, ReservationField::SpecialRequests),
            Some(SPECIAL_REQUESTS_TOO_LONG)
        );
    }

    #[test]
    fn test_special_requests_counts_characters_not_bytes() {
        // 500 two-byte characters
        let draft = ReservationDraft {
            special_requests: "é".repeat(MAX_SPECIAL_REQUESTS_LEN),
            ..valid_draft()
        };
        assert!(check(&draft).is_ok());
    }

    #[test]
    fn test_astral_characters_count_twice() {
        assert_eq!(input_len("😀"), 2);
        assert_eq!(input_len("é"), 1);

        let at_limit = ReservationDraft {
            special_requests: "😀".repeat(MAX_SPECIAL_REQUESTS_LEN / 2),
            ..valid_draft()
        };
        assert!(check(&at_limit).is_ok());

        // 300 emoji are 600 code units
        let over_limit = ReservationDraft {
            special_requests: "😀".repeat(300),
            ..valid_draft()
        };
        let errors = check(&over_limit).unwrap_err();
        assert_eq!(
            message_for(&errors, ReservationField::SpecialRequests),
            Some(SPECIAL_REQUESTS_TOO_LONG)
        );
    }

    #[test]
    fn test_occasion_is_unconstrained() {
        let draft = ReservationDraft {
            occasion: "anything at all".to_string(),
            ..valid_draft()
        };
        assert!(check(&draft).is_ok());
    }

    #[test]
    fn test_errors_are_in_form_order() {
        let draft = ReservationDraft {
            date: String::new(),
            time: String::new(),
            guests: 0,
            occasion: String::new(),
            special_requests: "z".repeat(501),
        };
        let errors = check(&draft).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                ReservationField::Date,
                ReservationField::Time,
                ReservationField::Guests,
                ReservationField::SpecialRequests,
            ]
        );
    }

    #[test]
    fn test_validator_trait_output() {
        let draft = ReservationDraft::default();
        let errors = draft.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_display() {
        let errors = check(&ReservationDraft::default()).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "date: Date is required; time: Time is required"
        );
    }
}
