//! The age calculator proper: raw field text in, errors and breakdown out.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::age::{AgeBreakdown, BreakdownMode, breakdown};
use crate::validate::{
    Field, FieldError, ValidationResult, YearHint, parse_number, validate_day, validate_month,
    validate_year,
};

/// The three form fields exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl RawInput {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
        }
    }

    /// Copy with one field replaced.
    pub fn with(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            Field::Day => next.day = value,
            Field::Month => next.month = value,
            Field::Year => next.year = value,
        }
        next
    }
}

/// Errors and breakdown from one evaluation. Always produced together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub errors: ValidationResult,
    pub age: AgeBreakdown,
}

impl Evaluation {
    fn rejected(errors: ValidationResult) -> Self {
        Self {
            errors,
            age: AgeBreakdown::NOT_COMPUTED,
        }
    }
}

/// Validate `input` and, if every field passes and the date is not after
/// `today`, compute the age using the default approximate breakdown.
pub fn evaluate(input: &RawInput, today: NaiveDate) -> Evaluation {
    evaluate_with(input, today, BreakdownMode::Approximate)
}

/// Same as [`evaluate`] with an explicit breakdown mode.
pub fn evaluate_with(input: &RawInput, today: NaiveDate, mode: BreakdownMode) -> Evaluation {
    let month = parse_number(&input.month);

    let errors = ValidationResult {
        day: validate_day(&input.day, month, YearHint::from_raw(&input.year)),
        month: validate_month(&input.month),
        year: validate_year(&input.year, today.year()),
    };

    if !errors.is_valid() {
        debug!(?errors, "input rejected");
        return Evaluation::rejected(errors);
    }

    let birthdate = match candidate_date(input) {
        Some(date) => date,
        None => {
            let mut errors = errors;
            errors.set(Field::Day, FieldError::InvalidDayValue);
            debug!("fields valid but no such date");
            return Evaluation::rejected(errors);
        }
    };

    if birthdate > today {
        let mut errors = errors;
        errors.set(Field::Year, FieldError::FutureBirthDate);
        debug!(%birthdate, %today, "birth date in the future");
        return Evaluation::rejected(errors);
    }

    let age = breakdown(birthdate, today, mode);
    debug!(%birthdate, %today, ?mode, %age, "age computed");
    Evaluation { errors, age }
}

fn candidate_date(input: &RawInput) -> Option<NaiveDate> {
    let year = i32::try_from(parse_number(&input.year)?).ok()?;
    NaiveDate::from_ymd_opt(year, parse_number(&input.month)?, parse_number(&input.day)?)
}
