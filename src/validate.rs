//! Per-field validation of the raw day/month/year text.
//!
//! Each field is checked on its own and every field is always checked, so a
//! single pass reports all problems at once. Problems are values, not errors:
//! nothing here returns `Err`.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::age::{days_in_month, is_leap_year};

/// A problem with one input field. `Display` is the text shown to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    RequiredFieldMissing,

    #[error("Must be a valid day")]
    InvalidDayValue,

    #[error("Must be a valid month")]
    InvalidMonthValue,

    /// Year is unparsable or later than the current year
    #[error("Must be in the past")]
    InvalidYearValue,

    /// All fields are fine on their own but the date is after today
    #[error("Must be in the past")]
    FutureBirthDate,
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The three form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Day,
    Month,
    Year,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Day, Field::Month, Field::Year];

    /// Label shown above the input box.
    pub fn label(self) -> &'static str {
        match self {
            Field::Day => "DAY",
            Field::Month => "MONTH",
            Field::Year => "YEAR",
        }
    }

    /// Hint shown in an empty input box.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Day => "DD",
            Field::Month => "MM",
            Field::Year => "YYYY",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "day" | "d" => Some(Field::Day),
            "month" | "m" => Some(Field::Month),
            "year" | "y" => Some(Field::Year),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

/// Optional error per field. No error means the field is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub day: Option<FieldError>,
    pub month: Option<FieldError>,
    pub year: Option<FieldError>,
}

impl ValidationResult {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Day => self.day,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    pub fn set(&mut self, field: Field, error: FieldError) {
        match field {
            Field::Day => self.day = Some(error),
            Field::Month => self.month = Some(error),
            Field::Year => self.year = Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }

    /// Fields with an error, in form order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|f| self.get(f).map(|e| (f, e)))
    }
}

/// Parse a field as an unsigned decimal integer.
///
/// Surrounding whitespace is ignored; anything other than ASCII digits
/// (signs, decimal points, exponents) is rejected.
pub fn parse_number(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// What the year field says about February, before the year itself is
/// validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearHint {
    /// Nothing typed yet; February is allowed its 29th.
    Blank,
    /// Typed but not a number; February stops at the 28th.
    Unparsable,
    Parsed(u32),
}

impl YearHint {
    pub fn from_raw(raw: &str) -> Self {
        if is_blank(raw) {
            return YearHint::Blank;
        }
        match parse_number(raw) {
            Some(y) => YearHint::Parsed(y),
            None => YearHint::Unparsable,
        }
    }

    pub fn is_leap(self) -> bool {
        match self {
            YearHint::Blank => true,
            YearHint::Unparsable => false,
            YearHint::Parsed(y) => i32::try_from(y).is_ok_and(is_leap_year),
        }
    }
}

/// Day rules. `month` is the already-parsed neighbour, if any, and `year`
/// decides whether February has 28 or 29 days.
pub fn validate_day(raw: &str, month: Option<u32>, year: YearHint) -> Option<FieldError> {
    if is_blank(raw) {
        return Some(FieldError::RequiredFieldMissing);
    }
    let day = match parse_number(raw) {
        Some(d) if (1..=31).contains(&d) => d,
        _ => return Some(FieldError::InvalidDayValue),
    };

    match month {
        Some(2) => {
            let limit = if year.is_leap() { 29 } else { 28 };
            (day > limit).then_some(FieldError::InvalidDayValue)
        }
        Some(m @ (4 | 6 | 9 | 11)) => {
            (day > days_in_month(0, m)).then_some(FieldError::InvalidDayValue)
        }
        _ => None,
    }
}

pub fn validate_month(raw: &str) -> Option<FieldError> {
    if is_blank(raw) {
        return Some(FieldError::RequiredFieldMissing);
    }
    match parse_number(raw) {
        Some(m) if (1..=12).contains(&m) => None,
        _ => Some(FieldError::InvalidMonthValue),
    }
}

pub fn validate_year(raw: &str, current_year: i32) -> Option<FieldError> {
    if is_blank(raw) {
        return Some(FieldError::RequiredFieldMissing);
    }
    match parse_number(raw).and_then(|y| i32::try_from(y).ok()) {
        Some(y) if y <= current_year => None,
        _ => Some(FieldError::InvalidYearValue),
    }
}
