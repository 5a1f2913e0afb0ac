//! Form state and its transitions.
//!
//! Every transition returns a new state with the evaluation recomputed from
//! scratch, so the errors and the breakdown can never disagree with the input.

use chrono::NaiveDate;
use serde::Serialize;

use crate::age::BreakdownMode;
use crate::evaluate::{Evaluation, RawInput, evaluate_with};
use crate::validate::{Field, FieldError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub input: RawInput,
    /// Errors are only shown once the form has been submitted.
    pub submitted: bool,
    #[serde(flatten)]
    pub evaluation: Evaluation,
    #[serde(skip)]
    mode: BreakdownMode,
}

impl FormState {
    /// Empty, unsubmitted form.
    pub fn new(today: NaiveDate, mode: BreakdownMode) -> Self {
        Self::from_input(RawInput::default(), false, today, mode)
    }

    pub fn from_input(
        input: RawInput,
        submitted: bool,
        today: NaiveDate,
        mode: BreakdownMode,
    ) -> Self {
        let evaluation = evaluate_with(&input, today, mode);
        Self {
            input,
            submitted,
            evaluation,
            mode,
        }
    }

    pub fn mode(&self) -> BreakdownMode {
        self.mode
    }

    /// A field changed.
    pub fn set_field(&self, field: Field, value: impl Into<String>, today: NaiveDate) -> Self {
        Self::from_input(self.input.with(field, value), self.submitted, today, self.mode)
    }

    /// The submit control was used. Errors become visible from now on.
    pub fn submit(&self, today: NaiveDate) -> Self {
        Self::from_input(self.input.clone(), true, today, self.mode)
    }

    /// Back to an empty, unsubmitted form.
    pub fn clear(&self, today: NaiveDate) -> Self {
        Self::new(today, self.mode)
    }

    /// The error to display for `field`, if any.
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if self.submitted {
            self.evaluation.errors.get(field)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::AgeBreakdown;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_errors_hidden_until_submit() {
        let form = FormState::new(today(), BreakdownMode::Approximate);
        assert_eq!(
            form.evaluation.errors.day,
            Some(FieldError::RequiredFieldMissing)
        );
        assert_eq!(form.visible_error(Field::Day), None);

        let form = form.submit(today());
        assert_eq!(
            form.visible_error(Field::Day),
            Some(FieldError::RequiredFieldMissing)
        );
    }

    #[test]
    fn test_recomputes_on_every_change() {
        let form = FormState::new(today(), BreakdownMode::Approximate)
            .set_field(Field::Day, "1", today())
            .set_field(Field::Month, "1", today());
        assert_eq!(form.evaluation.age, AgeBreakdown::NOT_COMPUTED);

        let form = form.set_field(Field::Year, "2000", today());
        assert_eq!(form.evaluation.age, AgeBreakdown::new(24, 0, 6));

        let form = form.set_field(Field::Month, "13", today());
        assert_eq!(form.evaluation.age, AgeBreakdown::NOT_COMPUTED);
        assert_eq!(
            form.evaluation.errors.month,
            Some(FieldError::InvalidMonthValue)
        );
    }

    #[test]
    fn test_submitted_survives_edits_but_not_clear() {
        let form = FormState::new(today(), BreakdownMode::Calendar)
            .submit(today())
            .set_field(Field::Day, "3", today());
        assert!(form.submitted);
        assert_eq!(form.mode(), BreakdownMode::Calendar);

        let form = form.clear(today());
        assert!(!form.submitted);
        assert_eq!(form.input, RawInput::default());
        assert_eq!(form.mode(), BreakdownMode::Calendar);
    }
}
