//! Reservation Model

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest accepted party size
pub const MIN_GUESTS: i32 = 1;

/// Largest accepted party size
pub const MAX_GUESTS: i32 = 10;

/// Party size a fresh draft starts with
pub const DEFAULT_GUESTS: i32 = 2;

/// Special requests limit, counted in characters
pub const MAX_SPECIAL_REQUESTS_LEN: usize = 500;

/// Bookable hourly slots, lunch through the last dinner seating
pub const TIME_SLOTS: [&str; 8] = [
    "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00", "19:00",
];

/// Position of `time` in [`TIME_SLOTS`]
pub fn time_slot_index(time: &str) -> Result<usize, AppError> {
    TIME_SLOTS
        .iter()
        .position(|slot| *slot == time)
        .ok_or_else(|| AppError::new(ErrorCode::InvalidTimeSlot).with_detail("time", time))
}

/// Reservation draft (预订草稿)
///
/// The in-progress record behind the booking form. It may violate the
/// validation rules while being edited; it is only checked as a whole on
/// submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    /// ISO calendar date (`YYYY-MM-DD`), empty until picked
    pub date: String,
    /// One of [`TIME_SLOTS`], empty until picked
    pub time: String,
    pub guests: i32,
    /// One of the [`Occasion`] values, empty when unset
    pub occasion: String,
    pub special_requests: String,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            guests: DEFAULT_GUESTS,
            occasion: String::new(),
            special_requests: String::new(),
        }
    }
}

impl ReservationDraft {
    /// Current value of a field, formatted the way the form shows it
    pub fn value_of(&self, field: ReservationField) -> String {
        match field {
            ReservationField::Date => self.date.clone(),
            ReservationField::Time => self.time.clone(),
            ReservationField::Guests => self.guests.to_string(),
            ReservationField::Occasion => self.occasion.clone(),
            ReservationField::SpecialRequests => self.special_requests.clone(),
        }
    }

    /// Parsed occasion, `None` when unset or not one of the known values
    pub fn occasion_kind(&self) -> Option<Occasion> {
        self.occasion.parse().ok()
    }
}

/// Booking form field identifiers
///
/// Ordered the way the form lays them out, which is also the order errors
/// are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReservationField {
    Date,
    Time,
    Guests,
    Occasion,
    SpecialRequests,
}

impl ReservationField {
    pub const ALL: [ReservationField; 5] = [
        Self::Date,
        Self::Time,
        Self::Guests,
        Self::Occasion,
        Self::SpecialRequests,
    ];

    /// Wire/form identifier (`specialRequests`, not `special_requests`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Guests => "guests",
            Self::Occasion => "occasion",
            Self::SpecialRequests => "specialRequests",
        }
    }

    /// Accessible label shown next to the input
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Guests => "Number of Guests",
            Self::Occasion => "Occasion",
            Self::SpecialRequests => "Special Requests",
        }
    }

    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::Guests)
    }
}

impl fmt::Display for ReservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::UnknownField, format!("Unknown field: {s}"))
                    .with_detail("field", s)
            })
    }
}

/// Occasion for the visit (场合)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    Birthday,
    Anniversary,
    Business,
    Other,
}

impl Occasion {
    pub const ALL: [Occasion; 4] = [
        Self::Birthday,
        Self::Anniversary,
        Self::Business,
        Self::Other,
    ];

    /// Value stored in the draft
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Anniversary => "anniversary",
            Self::Business => "business",
            Self::Other => "other",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Birthday => "Birthday",
            Self::Anniversary => "Anniversary",
            Self::Business => "Business",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Occasion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|occasion| occasion.as_str() == s)
            .ok_or_else(|| {
                AppError::new(ErrorCode::InvalidOccasion).with_detail("occasion", s)
            })
    }
}
