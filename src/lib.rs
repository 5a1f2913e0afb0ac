//! Age calculator: validates a day/month/year of birth and reports how many
//! years, months and days have passed since.
//!
//! The core is [`evaluate`], a pure function from the three raw form fields
//! and a reference date to per-field errors plus an [`AgeBreakdown`].
//! [`FormState`] wraps it with the submitted flag a form needs; the other
//! modules are front-end plumbing for the `agecalc` binary.

pub mod age;
pub mod clock;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod form;
pub mod logging;
pub mod render;
pub mod session;
pub mod svg;
pub mod validate;

pub use age::{AgeBreakdown, BreakdownMode};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AppError, Result};
pub use evaluate::{Evaluation, RawInput, evaluate, evaluate_with};
pub use form::FormState;
pub use validate::{Field, FieldError, ValidationResult};
